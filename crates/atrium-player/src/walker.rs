//! Walking movement with per-axis collision sliding.
//!
//! Movement is per frame rather than time-scaled: one call to
//! [`CameraMover::update_position`] moves the camera by at most
//! `walk_speed` meters.

use atrium_math::Aabb;
use glam::{Vec2, Vec3};

use crate::first_person_camera::FirstPersonCamera;

/// Moves the camera once per frame, respecting solid obstacles.
pub trait CameraMover {
    fn update_position(&mut self, camera: &mut FirstPersonCamera, colliders: &[Aabb]);
}

/// Input held for the current frame.
///
/// `forward` and `strafe` are in `[-1, 1]` (positive = forward / right),
/// `turn` is the keyboard turn axis (positive = left), and `look` is the
/// raw mouse delta in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WalkInput {
    pub forward: f32,
    pub strafe: f32,
    pub turn: f32,
    pub look: Vec2,
}

impl WalkInput {
    pub const IDLE: Self = Self {
        forward: 0.0,
        strafe: 0.0,
        turn: 0.0,
        look: Vec2::ZERO,
    };
}

/// Keyboard-and-mouse style walker.
#[derive(Clone, Debug)]
pub struct Walker {
    /// Meters per frame at full stick.
    pub walk_speed: f32,
    /// Radians per frame at full turn.
    pub turn_speed: f32,
    /// Radians per pixel of mouse movement.
    pub mouse_sensitivity: f32,
    /// Half-width of the collision box.
    pub body_radius: f32,
    /// Distance from the eye down to the feet.
    pub eye_height: f32,
    input: WalkInput,
}

impl Default for Walker {
    fn default() -> Self {
        Self {
            walk_speed: 0.1,
            turn_speed: 0.03,
            mouse_sensitivity: 0.002,
            body_radius: 0.3,
            eye_height: 1.7,
            input: WalkInput::IDLE,
        }
    }
}

impl Walker {
    pub fn set_input(&mut self, input: WalkInput) {
        self.input = input;
    }

    pub fn input(&self) -> WalkInput {
        self.input
    }

    /// Collision box of a player whose eye is at `eye`.
    pub fn body_at(&self, eye: Vec3) -> Aabb {
        Aabb::new(
            Vec3::new(
                eye.x - self.body_radius,
                eye.y - self.eye_height,
                eye.z - self.body_radius,
            ),
            Vec3::new(eye.x + self.body_radius, eye.y, eye.z + self.body_radius),
        )
    }

    /// Horizontal displacement requested by the current input.
    fn desired_step(&self, camera: &FirstPersonCamera) -> Vec3 {
        let (forward, right) = camera.horizontal_basis();
        let mut dir = forward * self.input.forward.clamp(-1.0, 1.0)
            + right * self.input.strafe.clamp(-1.0, 1.0);
        // Diagonal input is no faster than straight input.
        if dir.length_squared() > 1.0 {
            dir = dir.normalize();
        }
        dir * self.walk_speed
    }
}

/// Horizontal axis of a single movement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Z,
}

impl Axis {
    fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    fn offset(self, step: Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(step.x, 0.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, step.z),
        }
    }
}

/// For an obstacle the body already overlaps, the horizontal axis of
/// shallower penetration: the way out.
fn escape_axis(body: &Aabb, collider: &Aabb) -> Option<Axis> {
    let depth = body.intersection(collider)?.size();
    Some(if depth.x <= depth.z { Axis::X } else { Axis::Z })
}

/// Whether moving `body` to `moved` along `axis` runs into any collider.
///
/// An overlapped collider only lets the body through along its escape axis
/// when the step carries the body's center away from the collider's center;
/// sideways steps within it are free.
fn blocked(
    body: &Aabb,
    moved: &Aabb,
    axis: Axis,
    colliders: &[Aabb],
    escape: &[Option<Axis>],
) -> bool {
    colliders.iter().zip(escape).any(|(collider, &escape)| {
        if !moved.intersects(collider) {
            return false;
        }
        match escape {
            None => true,
            Some(way_out) if way_out == axis => {
                let center = axis.of(collider.center());
                (axis.of(moved.center()) - center).abs() < (axis.of(body.center()) - center).abs()
            }
            Some(_) => false,
        }
    })
}

impl CameraMover for Walker {
    fn update_position(&mut self, camera: &mut FirstPersonCamera, colliders: &[Aabb]) {
        let yaw_delta =
            self.input.turn * self.turn_speed - self.input.look.x * self.mouse_sensitivity;
        let pitch_delta = -self.input.look.y * self.mouse_sensitivity;
        camera.look(yaw_delta, pitch_delta);

        let step = self.desired_step(camera);
        if step == Vec3::ZERO {
            return;
        }

        // A door may have closed on the body; it can step out, not through.
        let start_body = self.body_at(camera.position);
        let escape: Vec<Option<Axis>> = colliders
            .iter()
            .map(|collider| escape_axis(&start_body, collider))
            .collect();

        for axis in [Axis::X, Axis::Z] {
            let offset = axis.offset(step);
            if offset == Vec3::ZERO {
                continue;
            }
            let body = self.body_at(camera.position);
            let moved = body.translated(offset);
            if blocked(&body, &moved, axis, colliders, &escape) {
                tracing::trace!(?axis, to = axis.of(camera.position + offset), "movement blocked");
            } else {
                camera.position += offset;
            }
        }
    }
}
