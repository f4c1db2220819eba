//! The dark room's sun: a fixed body that spins about its vertical axis.

use std::f32::consts::TAU;

use glam::Vec3;

/// Sun at the center of the planetarium.
#[derive(Clone, Debug)]
pub struct Sun {
    /// World position; planets orbit around it.
    pub position: Vec3,
    /// Current rotation about the vertical axis in radians, kept in `[0, TAU)`.
    pub spin: f32,
    /// Radians added every frame.
    pub spin_per_frame: f32,
}

impl Sun {
    pub fn new(position: Vec3, spin_per_frame: f32) -> Self {
        Self {
            position,
            spin: 0.0,
            spin_per_frame,
        }
    }

    pub fn advance(&mut self) {
        self.spin = (self.spin + self.spin_per_frame).rem_euclid(TAU);
    }
}
