//! Rotatable statues for the sunny room puzzle.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::time::Duration;

use glam::Vec3;

/// One of the four cardinal directions a statue can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after a quarter turn clockwise, seen from above.
    pub fn clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotation about the vertical axis. North is 0 and clockwise is negative.
    pub fn yaw(self) -> f32 {
        match self {
            Heading::North => 0.0,
            Heading::East => -FRAC_PI_2,
            Heading::South => PI,
            Heading::West => FRAC_PI_2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatueId(pub u8);

impl fmt::Display for StatueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statue#{}", self.0)
    }
}

/// Reported when a statue finishes turning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationEvent {
    pub statue: StatueId,
    pub heading: Heading,
    /// Whether the statue now faces its required heading.
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct QuarterTurn {
    started_at: Duration,
    duration: Duration,
    from_yaw: f32,
    to: Heading,
}

#[derive(Clone, Debug)]
pub struct Statue {
    id: StatueId,
    name: String,
    position: Vec3,
    heading: Heading,
    required: Heading,
    yaw: f32,
    turn: Option<QuarterTurn>,
}

impl Statue {
    pub fn new(
        id: StatueId,
        name: impl Into<String>,
        position: Vec3,
        heading: Heading,
        required: Heading,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            heading,
            required,
            yaw: heading.yaw(),
            turn: None,
        }
    }

    pub fn id(&self) -> StatueId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn required(&self) -> Heading {
        self.required
    }

    /// Current visual rotation, interpolated while turning.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn is_turning(&self) -> bool {
        self.turn.is_some()
    }

    pub fn faces_required(&self) -> bool {
        self.heading == self.required
    }

    /// Begin a clockwise quarter turn. Ignored while a turn is in progress.
    pub fn start_turn(&mut self, now: Duration, duration: Duration) -> bool {
        if self.turn.is_some() {
            return false;
        }
        self.turn = Some(QuarterTurn {
            started_at: now,
            duration,
            from_yaw: self.heading.yaw(),
            to: self.heading.clockwise(),
        });
        tracing::debug!(statue = %self.name, from = ?self.heading, "statue turn started");
        true
    }

    /// Move the turn forward to `now`. Returns the event on the frame the
    /// statue settles on its new heading.
    pub fn advance(&mut self, now: Duration) -> Option<OrientationEvent> {
        let turn = self.turn?;
        let progress = if turn.duration.is_zero() {
            1.0
        } else {
            now.saturating_sub(turn.started_at).as_secs_f32() / turn.duration.as_secs_f32()
        };

        if progress < 1.0 {
            self.yaw = turn.from_yaw - FRAC_PI_2 * progress;
            return None;
        }

        self.turn = None;
        self.heading = turn.to;
        self.yaw = turn.to.yaw();
        let event = OrientationEvent {
            statue: self.id,
            heading: self.heading,
            correct: self.faces_required(),
        };
        tracing::debug!(statue = %self.name, heading = ?self.heading, correct = event.correct, "statue settled");
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn statue() -> Statue {
        Statue::new(StatueId(1), "angel", Vec3::new(30.0, 0.0, -3.0), Heading::North, Heading::South)
    }

    #[test]
    fn test_four_clockwise_turns_return_home() {
        let mut h = Heading::West;
        for _ in 0..4 {
            h = h.clockwise();
        }
        assert_eq!(h, Heading::West);
        assert_eq!(Heading::North.clockwise(), Heading::East);
    }

    #[test]
    fn test_quarter_turn_completes_with_event() {
        let mut s = statue();
        assert!(s.start_turn(Duration::ZERO, 1000 * MS));
        assert!(s.is_turning());
        assert_eq!(s.advance(400 * MS), None);
        assert!((s.yaw() + FRAC_PI_2 * 0.4).abs() < 1e-5);

        let event = s.advance(1000 * MS).unwrap();
        assert_eq!(event.statue, StatueId(1));
        assert_eq!(event.heading, Heading::East);
        assert!(!event.correct);
        assert!(!s.is_turning());
        assert_eq!(s.yaw(), Heading::East.yaw());
    }

    #[test]
    fn test_turn_ignored_while_turning() {
        let mut s = statue();
        assert!(s.start_turn(Duration::ZERO, 1000 * MS));
        assert!(!s.start_turn(100 * MS, 1000 * MS));
        let event = s.advance(1000 * MS).unwrap();
        assert_eq!(event.heading, Heading::East);
    }

    #[test]
    fn test_reaching_required_heading_reports_correct() {
        let mut s = statue();
        let mut now = Duration::ZERO;
        let mut last = None;
        for _ in 0..2 {
            s.start_turn(now, 100 * MS);
            now += 100 * MS;
            last = s.advance(now);
        }
        assert_eq!(last.map(|e| e.correct), Some(true));
        assert!(s.faces_required());

        s.start_turn(now, 100 * MS);
        let past = s.advance(now + 100 * MS).unwrap();
        assert!(!past.correct);
    }

    #[test]
    fn test_zero_duration_turn_settles_immediately() {
        let mut s = statue();
        s.start_turn(50 * MS, Duration::ZERO);
        assert!(s.advance(50 * MS).is_some());
    }

    #[test]
    fn test_yaw_wraps_from_west_to_north() {
        let mut s = Statue::new(StatueId(2), "scholar", Vec3::ZERO, Heading::West, Heading::North);
        s.start_turn(Duration::ZERO, 1000 * MS);
        s.advance(500 * MS);
        assert!((s.yaw() - FRAC_PI_2 * 0.5).abs() < 1e-5);
        let event = s.advance(1000 * MS).unwrap();
        assert!(event.correct);
        assert_eq!(s.yaw(), 0.0);
    }
}
