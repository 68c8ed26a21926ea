//! Pure celebration logic
//!
//! Everything here must stay platform-free and deterministic:
//! - Seeded RNG only
//! - No rendering, DOM, or timer dependencies
//! - Frame/tick counts instead of wall-clock time
//!
//! The wasm shell (`dom`, `renderer`, `audio`, `main`) drives these types
//! from browser callbacks.

pub mod confetti;
pub mod effects;
pub mod state;
pub mod typer;

pub use confetti::{ConfettiSim, Particle, BURST_COUNT};
pub use effects::{
    balloon_flight, firework_burst, BalloonSpec, FireworkSpec, SparkSpec, BALLOON_COUNT,
    FIREWORK_BURSTS, SPARKS_PER_BURST,
};
pub use state::{Effect, Event, Experience, Phase};
pub use typer::Typer;
