//! Typed-text reveal progression
//!
//! Pure character-per-tick cursor over the target string. The wasm shell
//! drives one tick every 48 ms and owns the blinking cursor element.

/// Reveal progress over a fixed target string
#[derive(Debug, Clone)]
pub struct Typer {
    chars: Vec<char>,
    shown: usize,
}

impl Typer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal the next character, or `None` once the whole string is out.
    pub fn tick(&mut self) -> Option<char> {
        let c = self.chars.get(self.shown).copied()?;
        self.shown += 1;
        Some(c)
    }

    /// Everything revealed so far
    pub fn shown_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut t = Typer::new("abc");
        assert_eq!(t.tick(), Some('a'));
        assert_eq!(t.shown_text(), "a");
        assert_eq!(t.tick(), Some('b'));
        assert_eq!(t.tick(), Some('c'));
        assert!(t.is_done());
        assert_eq!(t.tick(), None);
        assert_eq!(t.shown_text(), "abc");
    }

    #[test]
    fn test_full_greeting_takes_len_ticks() {
        let greeting = crate::greeting();
        let mut t = Typer::new(&greeting);
        let n = greeting.chars().count();
        for _ in 0..n {
            assert!(!t.is_done());
            assert!(t.tick().is_some());
        }
        assert!(t.is_done());
        assert_eq!(t.shown_text(), "Happy Birthday, Sanjana!");
    }

    #[test]
    fn test_empty_string_is_done_immediately() {
        let mut t = Typer::new("");
        assert!(t.is_done());
        assert_eq!(t.tick(), None);
    }
}
