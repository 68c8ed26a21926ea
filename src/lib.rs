//! Birthday Surprise - an interactive greeting page
//!
//! Core modules:
//! - `sim`: Pure, host-testable celebration logic (state machine, confetti
//!   physics, effect specs, typed-text progression)
//! - `color`: Hex color shading utility
//! - `melody`: Note table and timeline math for the celebration tune
//! - `renderer`: Canvas 2D confetti rendering (wasm only)
//! - `dom`: Balloon/firework/typed-text DOM effects (wasm only)
//! - `audio`: Web Audio melody playback (wasm only)

pub mod color;
pub mod melody;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use color::shade;
pub use sim::{Effect, Event, Experience, Phase};

/// Celebration constants and page copy
pub mod consts {
    /// Who the party is for
    pub const TARGET_NAME: &str = "Sanjana";

    /// Status message shown before anything happens
    pub const MSG_INITIAL: &str = "Tap “Light Candles” to begin the celebration.";
    /// Status message once the candles are lit
    pub const MSG_LIT: &str = "Candles are lit! Now press “Make a Wish”.";
    /// Hint shown while waiting for the wish
    pub const HINT_LIT: &str = "Make a wish!";
    /// Hint restored on replay
    pub const HINT_RESET: &str = "Press Light Candles to start.";

    /// Milliseconds between revealed characters
    pub const TYPE_INTERVAL_MS: i32 = 48;
}

/// The congratulatory message revealed character by character
pub fn greeting() -> String {
    format!("Happy Birthday, {}!", consts::TARGET_NAME)
}
