//! Seeded planet layout and circular orbits.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A planet on a circular, horizontal orbit around the sun.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    /// Distance from the sun on the horizontal plane.
    pub orbit_radius: f32,
    /// Vertical offset from the sun.
    pub height: f32,
    /// Current orbital angle in radians, kept in `[0, TAU)`.
    pub phase: f32,
    /// Radians added to `phase` every frame.
    pub step: f32,
    /// Body radius, for the renderer.
    pub size: f32,
}

impl Planet {
    pub fn advance(&mut self) {
        self.phase = (self.phase + self.step).rem_euclid(TAU);
    }

    /// World position for an orbit centered on `center`.
    pub fn position(&self, center: Vec3) -> Vec3 {
        center
            + Vec3::new(
                self.orbit_radius * self.phase.cos(),
                self.height,
                self.orbit_radius * self.phase.sin(),
            )
    }
}

/// Generates a deterministic set of planets from a seed.
pub struct PlanetGenerator {
    seed: u64,
    count: u32,
    min_orbit_radius: f32,
    max_orbit_radius: f32,
    max_step: f32,
}

impl PlanetGenerator {
    /// Create a generator with the default orbit ranges (4 to 14 m, up to 0.01 rad/frame).
    pub fn new(seed: u64, count: u32) -> Self {
        Self {
            seed,
            count,
            min_orbit_radius: 4.0,
            max_orbit_radius: 14.0,
            max_step: 0.01,
        }
    }

    /// Override the orbit radius range. The bounds are sorted.
    pub fn with_orbit_radii(mut self, a: f32, b: f32) -> Self {
        self.min_orbit_radius = a.min(b);
        self.max_orbit_radius = a.max(b);
        self
    }

    /// Override the largest per-frame orbital step.
    pub fn with_max_step(mut self, max_step: f32) -> Self {
        self.max_step = max_step.abs();
        self
    }

    /// Generate the planets. Deterministic for a given seed and settings.
    pub fn generate(&self) -> Vec<Planet> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let radius_span = self.max_orbit_radius - self.min_orbit_radius;

        let planets: Vec<Planet> = (0..self.count)
            .map(|_| {
                let orbit_radius = self.min_orbit_radius + rng.random::<f32>() * radius_span;
                let height = (rng.random::<f32>() - 0.5) * 4.0;
                let phase = rng.random::<f32>() * TAU;
                // Never zero: every planet visibly moves.
                let step = self.max_step * (0.2 + 0.8 * rng.random::<f32>());
                let size = 0.2 + rng.random::<f32>() * 0.8;
                Planet {
                    orbit_radius,
                    height,
                    phase,
                    step,
                    size,
                }
            })
            .collect();

        tracing::debug!(seed = self.seed, count = planets.len(), "generated planets");
        planets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_planets() {
        let a = PlanetGenerator::new(42, 10).generate();
        let b = PlanetGenerator::new(42, 10).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_planets() {
        let a = PlanetGenerator::new(1, 10).generate();
        let b = PlanetGenerator::new(2, 10).generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_values_in_range() {
        let planets = PlanetGenerator::new(5, 64)
            .with_orbit_radii(12.0, 3.0)
            .with_max_step(0.02)
            .generate();
        assert_eq!(planets.len(), 64);
        for p in &planets {
            assert!((3.0..=12.0).contains(&p.orbit_radius));
            assert!(p.step > 0.0 && p.step <= 0.02);
            assert!((0.0..TAU).contains(&p.phase));
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(PlanetGenerator::new(9, 0).generate().is_empty());
    }

    #[test]
    fn test_phase_wraps() {
        let mut planet = Planet {
            orbit_radius: 5.0,
            height: 0.0,
            phase: TAU - 0.001,
            step: 0.01,
            size: 1.0,
        };
        planet.advance();
        assert!(planet.phase < 0.01);
    }
}
