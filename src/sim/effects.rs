//! Randomized parameters for the ephemeral DOM effects
//!
//! Balloons and fireworks are fire-and-forget elements; everything random
//! about them is decided here so the numbers stay host-testable. `dom`
//! turns a spec into actual elements and timers.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::color::shade;

/// Balloons released per wish
pub const BALLOON_COUNT: usize = 10;
/// Rose, light rose, amber, gold, indigo, pink
pub const BALLOON_PALETTE: [&str; 6] = [
    "#f43f5e", "#fb7185", "#f59e0b", "#fbbf24", "#6366f1", "#ec4899",
];
/// Gradient partner shading (percent passed to `shade`)
pub const BALLOON_SHADE: f32 = -25.0;
/// Balloon elements outlive their rise animation by this long
pub const BALLOON_LINGER_S: f64 = 2.0;

/// Firework bursts per launch
pub const FIREWORK_BURSTS: usize = 5;
/// Sparks arranged around each burst point
pub const SPARKS_PER_BURST: usize = 18;
/// Delay between consecutive bursts
pub const BURST_INTERVAL_MS: i32 = 300;
/// A burst element self-removes after this long
pub const BURST_LIFETIME_MS: i32 = 1800;

/// One balloon's randomized parameters
#[derive(Debug, Clone)]
pub struct BalloonSpec {
    /// Horizontal position, percent of container width
    pub left_pct: f32,
    /// Base palette color
    pub color: &'static str,
    /// Darker gradient partner
    pub color_shaded: String,
    /// Rise animation duration in seconds
    pub duration_s: f64,
    /// Animation start delay in seconds
    pub delay_s: f64,
}

impl BalloonSpec {
    /// How long the element lives before self-removal
    pub fn lifetime_ms(&self) -> i32 {
        ((self.duration_s + BALLOON_LINGER_S) * 1000.0) as i32
    }
}

/// One spark's offset from the burst point plus its hue
#[derive(Debug, Clone, Copy)]
pub struct SparkSpec {
    pub dx: f32,
    pub dy: f32,
    /// Degrees on the HSL wheel
    pub hue: u16,
}

/// One firework burst: a position in the central viewport region and its
/// ring of sparks
#[derive(Debug, Clone)]
pub struct FireworkSpec {
    /// Percent of viewport width
    pub x_vw: f32,
    /// Percent of viewport height
    pub y_vh: f32,
    pub sparks: Vec<SparkSpec>,
}

/// Roll the parameters for one balloon release.
pub fn balloon_flight(rng: &mut Pcg32) -> Vec<BalloonSpec> {
    (0..BALLOON_COUNT)
        .map(|i| {
            let color = BALLOON_PALETTE[i % BALLOON_PALETTE.len()];
            BalloonSpec {
                left_pct: rng.random_range(10.0..90.0),
                color,
                color_shaded: shade(color, BALLOON_SHADE),
                duration_s: rng.random_range(11.0..17.0),
                delay_s: rng.random_range(0.0..1.3),
            }
        })
        .collect()
}

/// Roll one firework burst: position in the 20-80% / 25-65% region, 18
/// sparks at equal angular increments with randomized radial distance.
pub fn firework_burst(rng: &mut Pcg32) -> FireworkSpec {
    let sparks = (0..SPARKS_PER_BURST)
        .map(|i| {
            let angle = (i as f32 / SPARKS_PER_BURST as f32) * std::f32::consts::TAU;
            let dist = rng.random_range(40.0..70.0f32);
            SparkSpec {
                dx: angle.cos() * dist,
                dy: angle.sin() * dist,
                hue: rng.random_range(0..360),
            }
        })
        .collect();
    FireworkSpec {
        x_vw: rng.random_range(20.0..80.0),
        y_vh: rng.random_range(25.0..65.0),
        sparks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_balloon_release_rolls_ten() {
        let mut rng = Pcg32::seed_from_u64(21);
        let flight = balloon_flight(&mut rng);
        assert_eq!(flight.len(), BALLOON_COUNT);
        for (i, b) in flight.iter().enumerate() {
            assert!(b.left_pct >= 10.0 && b.left_pct < 90.0);
            assert!(b.duration_s >= 11.0 && b.duration_s < 17.0);
            assert!(b.delay_s >= 0.0 && b.delay_s < 1.3);
            assert_eq!(b.color, BALLOON_PALETTE[i % BALLOON_PALETTE.len()]);
            assert_eq!(b.color_shaded, shade(b.color, BALLOON_SHADE));
        }
    }

    #[test]
    fn test_balloon_lifetime_covers_rise_plus_linger() {
        let mut rng = Pcg32::seed_from_u64(22);
        for b in balloon_flight(&mut rng) {
            let ms = b.lifetime_ms();
            assert!(ms >= 13_000 && ms < 19_000);
        }
    }

    #[test]
    fn test_firework_has_eighteen_evenly_spaced_sparks() {
        let mut rng = Pcg32::seed_from_u64(23);
        let fw = firework_burst(&mut rng);
        assert_eq!(fw.sparks.len(), SPARKS_PER_BURST);
        assert!(fw.x_vw >= 20.0 && fw.x_vw < 80.0);
        assert!(fw.y_vh >= 25.0 && fw.y_vh < 65.0);

        let step = std::f32::consts::TAU / SPARKS_PER_BURST as f32;
        for (i, s) in fw.sparks.iter().enumerate() {
            let dist = (s.dx * s.dx + s.dy * s.dy).sqrt();
            assert!(dist >= 40.0 && dist < 70.0);
            let angle = s.dy.atan2(s.dx).rem_euclid(std::f32::consts::TAU);
            let expected = (i as f32 * step).rem_euclid(std::f32::consts::TAU);
            let diff = (angle - expected).abs();
            let diff = diff.min(std::f32::consts::TAU - diff);
            assert!(diff < 1e-3, "spark {i} off its angular slot");
            assert!(s.hue < 360);
        }
    }

    #[test]
    fn test_full_show_is_five_bursts() {
        let mut rng = Pcg32::seed_from_u64(25);
        let show: Vec<FireworkSpec> = (0..FIREWORK_BURSTS)
            .map(|_| firework_burst(&mut rng))
            .collect();
        assert_eq!(show.len(), 5);
        assert!(show.iter().all(|fw| fw.sparks.len() == SPARKS_PER_BURST));
    }

    #[test]
    fn test_bursts_vary_between_rolls() {
        let mut rng = Pcg32::seed_from_u64(24);
        let a = firework_burst(&mut rng);
        let b = firework_burst(&mut rng);
        assert!(a.x_vw != b.x_vw || a.y_vh != b.y_vh);
    }
}
