//! Confetti particle simulation
//!
//! Owns the active particle collection and advances it one animation frame
//! at a time. No drawing here; `renderer::ConfettiCanvas` paints the
//! surviving particles after each `step`.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Particles injected per burst
pub const BURST_COUNT: usize = 130;
/// Downward acceleration applied to vy each frame
pub const GRAVITY: f32 = 0.15;
/// Particles falling this far below the surface are removed
pub const FALL_MARGIN: f32 = 20.0;
/// Particle time-to-live range in frames (inclusive)
pub const TTL_RANGE: (u32, u32) = (200, 260);

/// Confetti colors: white, rose, amber
pub const PALETTE: [&str; 3] = ["#ffffff", "#f43f5e", "#f59e0b"];

/// One piece of confetti
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Surface-relative position
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    /// Side length of the rendered square
    pub size: f32,
    /// Index into [`PALETTE`]
    pub color: usize,
    /// Age in frames, starts at 0
    pub life: u32,
    /// Maximum age before forced removal
    pub ttl: u32,
    /// Current rotation in degrees
    pub rotation: f32,
    /// Degrees per frame, fixed at creation
    pub vr: f32,
}

/// The active collection plus the surface bounds the removal rule needs
pub struct ConfettiSim {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: Pcg32,
}

impl ConfettiSim {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Track the host surface's displayed size. Must happen before the next
    /// `step` when the surface changes, or the fall-out bound goes stale.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Inject a batch of particles. Bursts accumulate; calling this twice
    /// before a step leaves 2 * [`BURST_COUNT`] particles active.
    pub fn burst(&mut self) {
        self.particles.reserve(BURST_COUNT);
        for _ in 0..BURST_COUNT {
            let rng = &mut self.rng;
            self.particles.push(Particle {
                pos: Vec2::new(
                    self.width / 2.0 + rng.random_range(-20.0..20.0),
                    self.height * 0.35 + rng.random_range(-10.0..10.0),
                ),
                vel: Vec2::new(
                    rng.random_range(-3.0..3.0),
                    -rng.random_range(2.0..8.0),
                ),
                size: rng.random_range(4.0..10.0),
                color: rng.random_range(0..PALETTE.len()),
                life: 0,
                ttl: rng.random_range(TTL_RANGE.0..=TTL_RANGE.1),
                rotation: rng.random_range(0.0..360.0),
                vr: rng.random_range(-6.0..6.0),
            });
        }
    }

    /// Advance one frame: integrate kinematics, age every particle, then
    /// drop the ones that expired or fell off the surface. Removal happens
    /// in the same frame the condition is met.
    pub fn step(&mut self) {
        let floor = self.height + FALL_MARGIN;
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.rotation += p.vr;
            p.life += 1;
        }
        self.particles.retain(|p| p.life <= p.ttl && p.pos.y <= floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_adds_exactly_130() {
        let mut sim = ConfettiSim::new(800.0, 600.0, 42);
        sim.burst();
        assert_eq!(sim.len(), BURST_COUNT);
        sim.burst();
        assert_eq!(sim.len(), 2 * BURST_COUNT);
    }

    #[test]
    fn test_burst_spawn_envelope() {
        let mut sim = ConfettiSim::new(800.0, 600.0, 7);
        sim.burst();
        for p in sim.particles() {
            assert!((p.pos.x - 400.0).abs() < 20.0);
            assert!((p.pos.y - 210.0).abs() < 10.0);
            assert!(p.vel.y < 0.0, "initial velocity must be upward");
            assert!(p.size >= 4.0 && p.size < 10.0);
            assert!(p.color < PALETTE.len());
            assert_eq!(p.life, 0);
            assert!(p.ttl >= TTL_RANGE.0 && p.ttl <= TTL_RANGE.1);
        }
    }

    #[test]
    fn test_step_integrates_and_ages() {
        let mut sim = ConfettiSim::new(800.0, 600.0, 1);
        sim.burst();
        let before: Vec<Particle> = sim.particles().to_vec();
        sim.step();
        for (old, new) in before.iter().zip(sim.particles()) {
            assert_eq!(new.life, old.life + 1);
            assert!((new.pos.x - (old.pos.x + old.vel.x)).abs() < 1e-4);
            assert!((new.pos.y - (old.pos.y + old.vel.y)).abs() < 1e-4);
            assert!((new.vel.y - (old.vel.y + GRAVITY)).abs() < 1e-4);
            assert!((new.rotation - (old.rotation + old.vr)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_particles_expire_by_ttl() {
        // A tall surface so nothing falls out before its ttl runs down
        let mut sim = ConfettiSim::new(800.0, 1.0e9, 3);
        sim.burst();
        for _ in 0..=TTL_RANGE.1 {
            sim.step();
        }
        assert!(sim.is_empty(), "all particles must expire by max ttl");
    }

    #[test]
    fn test_particles_removed_below_floor() {
        let mut sim = ConfettiSim::new(800.0, 100.0, 9);
        sim.burst();
        // Worst case initial vy is -8; gravity reclaims that in ~54 frames
        // and the 120px floor falls well before any ttl does.
        for _ in 0..150 {
            sim.step();
        }
        for p in sim.particles() {
            assert!(p.pos.y <= 100.0 + FALL_MARGIN);
            assert!(p.life <= p.ttl);
        }
    }

    #[test]
    fn test_removal_happens_same_frame() {
        let mut sim = ConfettiSim::new(800.0, 600.0, 5);
        sim.burst();
        loop {
            sim.step();
            // After every step, no particle may linger past its limits
            for p in sim.particles() {
                assert!(p.life <= p.ttl);
                assert!(p.pos.y <= 600.0 + FALL_MARGIN);
            }
            if sim.is_empty() {
                break;
            }
        }
    }

    #[test]
    fn test_resize_moves_the_floor() {
        let mut sim = ConfettiSim::new(800.0, 600.0, 11);
        sim.burst();
        // Shrinking the surface pulls the fall-out bound up
        sim.resize(400.0, 50.0);
        for _ in 0..120 {
            sim.step();
        }
        for p in sim.particles() {
            assert!(p.pos.y <= 50.0 + FALL_MARGIN);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = ConfettiSim::new(800.0, 600.0, 1234);
        let mut b = ConfettiSim::new(800.0, 600.0, 1234);
        a.burst();
        b.burst();
        for _ in 0..50 {
            a.step();
            b.step();
        }
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.rotation, pb.rotation);
        }
    }
}
