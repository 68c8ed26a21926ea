//! Experience state machine
//!
//! One `Experience` instance per page session, owned by the app object.
//! Input events go in, at most one effect comes out; the shell performs the
//! side effects (DOM, canvas, audio) the effect names.

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has happened yet
    Idle,
    /// Candles are lit, waiting for the wish
    CandlesLit,
    /// The wish was made; celebration ran (terminal until replay)
    Revealed,
}

/// A discrete user-triggered signal (no payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Light,
    Wish,
    Replay,
    ToggleMusic,
    TogglePalette,
}

/// What the shell must do in response to an accepted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Mark all candles lit, swap the light/wish controls, update prompts
    LightCandles,
    /// Confetti burst + fireworks + balloons + typed reveal + melody attempt
    Celebrate,
    /// Clear candle markers and balloons, cancel effect timers, restore prompts
    Reset,
    /// Music mute flag changed; update the toggle's glyph
    MusicChanged(bool),
    /// Alternate palette flag changed; toggle the body class
    PaletteChanged(bool),
}

/// The two core flags plus the two orthogonal toggles
#[derive(Debug, Clone)]
pub struct Experience {
    candles_lit: bool,
    revealed: bool,
    music_enabled: bool,
    palette_alt: bool,
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

impl Experience {
    pub fn new() -> Self {
        Self {
            candles_lit: false,
            revealed: false,
            music_enabled: true,
            palette_alt: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.candles_lit, self.revealed) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::CandlesLit,
            (true, true) => Phase::Revealed,
        }
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn palette_alt(&self) -> bool {
        self.palette_alt
    }

    /// Apply one input event. Returns `None` when the event is a no-op in
    /// the current state (e.g. a second `Light`, or `Wish` before lighting).
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Light => {
                if self.candles_lit {
                    return None;
                }
                self.candles_lit = true;
                Some(Effect::LightCandles)
            }
            Event::Wish => {
                // Invariant: revealed can only become true while lit
                if !self.candles_lit || self.revealed {
                    return None;
                }
                self.revealed = true;
                Some(Effect::Celebrate)
            }
            Event::Replay => {
                // Both flags return to false together
                self.candles_lit = false;
                self.revealed = false;
                Some(Effect::Reset)
            }
            Event::ToggleMusic => {
                self.music_enabled = !self.music_enabled;
                Some(Effect::MusicChanged(self.music_enabled))
            }
            Event::TogglePalette => {
                self.palette_alt = !self.palette_alt;
                Some(Effect::PaletteChanged(self.palette_alt))
            }
        }
    }
}
