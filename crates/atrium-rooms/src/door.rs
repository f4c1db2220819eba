//! Two-leaf pivoting doors and the tween that swings them.
//!
//! Each [`DoorGroup`] owns at most one in-flight [`DoorTween`]. The tween is
//! pulled forward by [`DoorAnimator::advance`] once per frame; issuing a new
//! action replaces the slot, so a superseded swing can never write again.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use atrium_math::Aabb;
use glam::Vec3;

/// Default length of a full swing.
pub const DEFAULT_SWING: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorAction {
    Open,
    Close,
}

impl DoorAction {
    /// Leaf angles this action ends at.
    pub fn target(self) -> LeafAngles {
        match self {
            DoorAction::Open => LeafAngles::OPEN,
            DoorAction::Close => LeafAngles::CLOSED,
        }
    }

    fn in_flight(self) -> DoorPhase {
        match self {
            DoorAction::Open => DoorPhase::Opening,
            DoorAction::Close => DoorPhase::Closing,
        }
    }

    fn settled(self) -> DoorPhase {
        match self {
            DoorAction::Open => DoorPhase::Open,
            DoorAction::Close => DoorPhase::Closed,
        }
    }
}

/// A door leaf's rotation about the vertical axis, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pivot {
    pub yaw: f32,
}

/// Both leaf angles of a door. The leaves always mirror each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafAngles {
    pub left: f32,
    pub right: f32,
}

impl LeafAngles {
    pub const CLOSED: Self = Self {
        left: 0.0,
        right: 0.0,
    };
    pub const OPEN: Self = Self {
        left: -FRAC_PI_2,
        right: FRAC_PI_2,
    };

    /// Linear interpolation toward `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            left: self.left + (to.left - self.left) * t,
            right: self.right + (to.right - self.right) * t,
        }
    }
}

/// Explicit door state. The leaf angles follow from it, never the other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorPhase {
    pub fn is_moving(self) -> bool {
        matches!(self, DoorPhase::Opening | DoorPhase::Closing)
    }
}

/// One in-flight swing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorTween {
    pub started_at: Duration,
    pub duration: Duration,
    pub from: LeafAngles,
    pub to: LeafAngles,
    pub action: DoorAction,
}

impl DoorTween {
    /// `elapsed / duration`, unclamped. A zero duration is always complete.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }
}

/// A door made of exactly two pivoting leaves.
#[derive(Clone, Debug)]
pub struct DoorGroup {
    name: String,
    anchor: Vec3,
    collider: Aabb,
    left: Pivot,
    right: Pivot,
    phase: DoorPhase,
    tween: Option<DoorTween>,
}

impl DoorGroup {
    /// A closed door. `anchor` is the point players reach for, `collider`
    /// the doorway footprint while the door is not fully open.
    pub fn new(name: impl Into<String>, anchor: Vec3, collider: Aabb) -> Self {
        Self {
            name: name.into(),
            anchor,
            collider,
            left: Pivot::default(),
            right: Pivot::default(),
            phase: DoorPhase::Closed,
            tween: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn collider(&self) -> Aabb {
        self.collider
    }

    pub fn left(&self) -> Pivot {
        self.left
    }

    pub fn right(&self) -> Pivot {
        self.right
    }

    pub fn angles(&self) -> LeafAngles {
        LeafAngles {
            left: self.left.yaw,
            right: self.right.yaw,
        }
    }

    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    pub fn tween(&self) -> Option<&DoorTween> {
        self.tween.as_ref()
    }

    /// Anything short of fully open blocks the doorway.
    pub fn blocks_passage(&self) -> bool {
        self.phase != DoorPhase::Open
    }

    fn set_angles(&mut self, angles: LeafAngles) {
        self.left.yaw = angles.left;
        self.right.yaw = angles.right;
    }
}

/// Starts and advances door swings. Every swing lasts the same fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct DoorAnimator {
    duration: Duration,
}

impl Default for DoorAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SWING)
    }
}

impl DoorAnimator {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Request `action` on `door` at time `now`.
    ///
    /// Returns `false` without touching the door when it is already doing or
    /// has already done what was asked. Otherwise a fresh tween starts from
    /// the current leaf angles and replaces any swing in progress.
    pub fn command(&self, door: &mut DoorGroup, action: DoorAction, now: Duration) -> bool {
        let redundant = matches!(
            (action, door.phase),
            (DoorAction::Open, DoorPhase::Open | DoorPhase::Opening)
                | (DoorAction::Close, DoorPhase::Closed | DoorPhase::Closing)
        );
        if redundant {
            tracing::trace!(door = %door.name, ?action, phase = ?door.phase, "door command ignored");
            return false;
        }

        let tween = DoorTween {
            started_at: now,
            duration: self.duration,
            from: door.angles(),
            to: action.target(),
            action,
        };
        if door.tween.replace(tween).is_some() {
            tracing::debug!(door = %door.name, ?action, "door reversed mid-swing");
        } else {
            tracing::debug!(door = %door.name, ?action, "door swing started");
        }
        door.phase = action.in_flight();
        true
    }

    /// Move the door's tween forward to `now`.
    ///
    /// Returns the settled phase on the frame the swing completes.
    pub fn advance(&self, door: &mut DoorGroup, now: Duration) -> Option<DoorPhase> {
        let tween = door.tween?;
        let progress = tween.progress(now);

        if progress < 1.0 {
            door.set_angles(tween.from.lerp(tween.to, progress));
            return None;
        }

        // Snap exactly; the interpolated value may have overshot.
        door.set_angles(tween.to);
        door.tween = None;
        door.phase = tween.action.settled();
        tracing::info!(door = %door.name, phase = ?door.phase, "door settled");
        Some(door.phase)
    }
}
