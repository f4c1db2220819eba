//! First-person camera: eye position plus yaw/pitch look angles.

use glam::{Quat, Vec3};

/// The player's eye.
#[derive(Clone, Debug)]
pub struct FirstPersonCamera {
    /// Eye position in scene space.
    pub position: Vec3,
    /// Horizontal rotation in radians. Positive yaw rotates left (counter-clockwise
    /// when viewed from above), matching right-handed coordinate conventions.
    pub yaw: f32,
    /// Vertical rotation in radians. Positive pitch looks up.
    pub pitch: f32,
    /// Maximum pitch angle in radians. Clamped to ±pitch_limit.
    pub pitch_limit: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 1.7, 0.0))
    }
}

impl FirstPersonCamera {
    /// Camera at `position`, looking down -Z.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: 89.0_f32.to_radians(),
        }
    }

    /// Rotation quaternion from the current yaw and pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// View direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Forward and right directions projected onto the floor plane, so walking
    /// stays horizontal regardless of pitch.
    #[must_use]
    pub fn horizontal_basis(&self) -> (Vec3, Vec3) {
        let yaw_only = Quat::from_rotation_y(self.yaw);
        let forward = yaw_only * Vec3::NEG_Z;
        let right = yaw_only * Vec3::X;
        (
            Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero(),
            Vec3::new(right.x, 0.0, right.z).normalize_or_zero(),
        )
    }

    /// Add look deltas, clamping pitch to the configured limit.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Yaw that would face `target` on the horizontal plane, or `None` when
    /// the target is directly above or below the eye.
    pub fn yaw_towards(&self, target: Vec3) -> Option<f32> {
        let to = target - self.position;
        if to.x.abs() <= f32::EPSILON && to.z.abs() <= f32::EPSILON {
            return None;
        }
        // Yaw 0 looks down -Z; positive yaw turns toward -X.
        Some((-to.x).atan2(-to.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_initial_state_looks_forward_along_neg_z() {
        let cam = FirstPersonCamera::default();
        let forward = cam.forward();
        assert!(forward.x.abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
        assert!((cam.position.y - 1.7).abs() < 1e-6);
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        let cam = FirstPersonCamera {
            yaw: FRAC_PI_2,
            ..Default::default()
        };
        assert!(cam.forward().x < -0.9);
    }

    #[test]
    fn test_pitch_clamps_at_limits() {
        let mut cam = FirstPersonCamera::default();
        cam.look(0.0, 10.0);
        assert!((cam.pitch - cam.pitch_limit).abs() < 1e-6);
        cam.look(0.0, -20.0);
        assert!((cam.pitch + cam.pitch_limit).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_basis_ignores_pitch() {
        let mut cam = FirstPersonCamera::default();
        cam.look(0.3, 1.2);
        let (forward, right) = cam.horizontal_basis();
        assert!(forward.y.abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!(forward.dot(right).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_towards_target() {
        let mut cam = FirstPersonCamera::default();
        cam.yaw = cam.yaw_towards(Vec3::new(10.0, 1.7, 0.0)).unwrap();
        let (forward, _) = cam.horizontal_basis();
        assert!((forward - Vec3::X).length() < 1e-5);

        cam.yaw = cam.yaw_towards(Vec3::new(0.0, 1.7, 10.0)).unwrap();
        let (forward, _) = cam.horizontal_basis();
        assert!((forward - Vec3::Z).length() < 1e-5);

        assert_eq!(cam.yaw_towards(Vec3::new(0.0, 5.0, 0.0)), None);
    }
}
