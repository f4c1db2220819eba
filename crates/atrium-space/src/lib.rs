//! Dark room planetarium: a spinning sun and seeded planets on circular orbits.
//!
//! Everything here advances by a fixed increment per rendered frame, not per
//! second, so the sky turns faster on faster displays.

pub mod planets;
pub mod sun;

pub use planets::{Planet, PlanetGenerator};
pub use sun::Sun;

use glam::Vec3;

/// The sun plus every planet orbiting it.
#[derive(Clone, Debug)]
pub struct CelestialSystem {
    pub sun: Sun,
    pub planets: Vec<Planet>,
    frames: u64,
}

impl CelestialSystem {
    pub fn new(sun: Sun, planets: Vec<Planet>) -> Self {
        Self {
            sun,
            planets,
            frames: 0,
        }
    }

    /// Advance one frame: every planet steps along its orbit and the sun spins.
    pub fn advance(&mut self) {
        for planet in &mut self.planets {
            planet.advance();
        }
        self.sun.advance();
        self.frames += 1;
    }

    /// World positions of all planets, in generation order.
    pub fn planet_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let center = self.sun.position;
        self.planets.iter().map(move |p| p.position(center))
    }

    /// Number of frames this system has been advanced.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_planets_and_sun() {
        let planets = PlanetGenerator::new(3, 4).generate();
        let mut system = CelestialSystem::new(Sun::new(Vec3::new(-37.5, 6.0, 0.0), 0.001), planets);
        let before: Vec<Vec3> = system.planet_positions().collect();

        system.advance();

        let after: Vec<Vec3> = system.planet_positions().collect();
        assert_eq!(system.frames(), 1);
        assert!((system.sun.spin - 0.001).abs() < 1e-7);
        for (a, b) in before.iter().zip(&after) {
            assert!((*a - *b).length() > 0.0, "planet did not move");
        }
    }

    #[test]
    fn test_orbits_keep_their_radius() {
        let center = Vec3::new(-37.5, 6.0, 0.0);
        let planets = PlanetGenerator::new(11, 6).generate();
        let mut system = CelestialSystem::new(Sun::new(center, 0.001), planets);
        for _ in 0..500 {
            system.advance();
        }
        for (planet, pos) in system.planets.iter().zip(system.planet_positions()) {
            let offset = pos - center;
            let horizontal = Vec3::new(offset.x, 0.0, offset.z).length();
            assert!((horizontal - planet.orbit_radius).abs() < 1e-3);
            assert!((offset.y - planet.height).abs() < 1e-6);
        }
    }
}
