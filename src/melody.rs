//! The celebration tune
//!
//! Note table and timeline math only; actual oscillator scheduling lives in
//! `audio` (wasm). Keeping the timing pure lets the host test it.

/// One tone: frequency in Hz, duration in seconds
pub type Note = (f32, f64);

/// Number of tones in the tune
pub const NOTE_COUNT: usize = 7;

/// C5 E5 G5 C6 A5 B5 C6 - a little ascending fanfare
pub const NOTES: [Note; NOTE_COUNT] = [
    (523.25, 0.18),
    (659.25, 0.18),
    (783.99, 0.18),
    (1046.5, 0.26),
    (880.0, 0.2),
    (987.77, 0.24),
    (1046.5, 0.36),
];

/// Silence between consecutive notes (seconds)
pub const NOTE_GAP: f64 = 0.03;
/// Ramp from 0 to peak gain (seconds)
pub const ATTACK: f64 = 0.01;
/// Ramp from peak gain back to 0 after the note ends (seconds)
pub const RELEASE: f64 = 0.08;
/// Peak gain
pub const PEAK_GAIN: f32 = 0.25;
/// The audio context is closed this long after playback starts (ms),
/// whether or not the tune finished
pub const CONTEXT_CLOSE_MS: i32 = 2500;

/// Start offset of each note relative to the first note's start.
///
/// Notes are scheduled back-to-back: each starts where the previous one's
/// duration ended, plus the gap.
pub fn start_times() -> [f64; NOTE_COUNT] {
    let mut times = [0.0; NOTE_COUNT];
    let mut t = 0.0;
    for (i, (_, dur)) in NOTES.iter().enumerate() {
        times[i] = t;
        t += dur + NOTE_GAP;
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_notes_back_to_back() {
        let times = start_times();
        assert_eq!(times.len(), 7);
        assert_eq!(times[0], 0.0);
        for i in 1..NOTES.len() {
            let expected = times[i - 1] + NOTES[i - 1].1 + NOTE_GAP;
            assert!((times[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tune_fits_inside_context_lifetime() {
        let times = start_times();
        let last = times[NOTES.len() - 1] + NOTES[NOTES.len() - 1].1 + RELEASE;
        assert!(last * 1000.0 < CONTEXT_CLOSE_MS as f64);
    }

    #[test]
    fn test_notes_are_audible_frequencies() {
        for (freq, dur) in NOTES {
            assert!(freq > 20.0 && freq < 20_000.0);
            assert!(dur > 0.0);
        }
    }
}
