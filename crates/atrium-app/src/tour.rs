//! Scripted walk through the gallery.
//!
//! A [`Tour`] plays the part of the player: before every frame it decides
//! what the walker's input should be, and it activates doors and statues the
//! same way a player standing next to them would.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

use atrium_config::Config;
use atrium_player::{WalkInput, Walker};
use atrium_rooms::RoomOccupancy;
use glam::{Vec2, Vec3};

use crate::frame_loop::FrameLoop;
use crate::render::FrameSink;
use crate::session::Session;

/// Horizontal distance at which a walk target counts as reached.
const ARRIVAL_DISTANCE: f32 = 0.01;
/// Frames without progress before a walk step is abandoned.
const STALL_FRAMES: u32 = 120;
/// Slack added to every wait so the swing has settled when it ends.
const SETTLE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TourStep {
    /// Walk to a floor point, given as (x, z).
    WalkTo(Vec2),
    /// Activate the nearest door or statue within reach.
    Interact,
    /// Stand still for a while.
    Wait(Duration),
}

/// Outcome of a headless run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourReport {
    pub frames: u64,
    pub finished: bool,
    pub occupancy: RoomOccupancy,
    pub puzzle_solved: bool,
}

#[derive(Clone, Debug)]
pub struct Tour {
    steps: Vec<TourStep>,
    cursor: usize,
    wait_until: Option<Duration>,
    best_distance: f32,
    stalled_frames: u32,
}

impl Tour {
    pub fn new(steps: Vec<TourStep>) -> Self {
        Self {
            steps,
            cursor: 0,
            wait_until: None,
            best_distance: f32::INFINITY,
            stalled_frames: 0,
        }
    }

    /// Hall, sunny room puzzle, back through the hall into the dark room.
    pub fn gallery(config: &Config) -> Self {
        use TourStep::{Interact, Wait, WalkTo};

        let door = Wait(config.doors.duration() + SETTLE);
        let turn = Wait(config.statues.duration() + SETTLE);
        let mut steps = vec![
            WalkTo(Vec2::new(10.5, 0.0)),
            Interact,
            door,
            WalkTo(Vec2::new(16.0, 0.0)),
        ];
        // Stand beside each statue and turn it until it faces its mark:
        // pot once, angel twice, scholar three times.
        for (spot, turns) in [
            (Vec2::new(28.5, 3.1), 1),
            (Vec2::new(28.5, -3.0), 2),
            (Vec2::new(31.5, 0.0), 3),
        ] {
            steps.push(WalkTo(spot));
            for _ in 0..turns {
                steps.extend([Interact, turn]);
            }
        }
        steps.extend([
            door,
            WalkTo(Vec2::new(10.0, 0.0)),
            WalkTo(Vec2::new(-10.5, 0.0)),
            Interact,
            door,
            WalkTo(Vec2::new(-16.0, 0.0)),
        ]);
        Self::new(steps)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    pub fn current(&self) -> Option<&TourStep> {
        self.steps.get(self.cursor)
    }

    /// Set up the walker's input for the frame about to run at `now`,
    /// performing any instantaneous steps on the way.
    pub fn drive(&mut self, session: &mut Session<Walker>, now: Duration) {
        while let Some(&step) = self.steps.get(self.cursor) {
            match step {
                TourStep::WalkTo(target) => {
                    if let Some(input) = self.steer(session, target) {
                        session.mover_mut().set_input(input);
                        return;
                    }
                }
                TourStep::Interact => match session.interact_nearest(now) {
                    Some(target) => tracing::debug!(?target, "tour interacted"),
                    None => tracing::warn!(step = self.cursor, "tour found nothing within reach"),
                },
                TourStep::Wait(duration) => {
                    let until = *self.wait_until.get_or_insert(now + duration);
                    if now < until {
                        session.mover_mut().set_input(WalkInput::IDLE);
                        return;
                    }
                }
            }
            self.next_step();
        }
        session.mover_mut().set_input(WalkInput::IDLE);
    }

    /// Input that turns toward `target` and walks at most the remaining
    /// distance. `None` once the target is reached or progress has stalled.
    fn steer(&mut self, session: &Session<Walker>, target: Vec2) -> Option<WalkInput> {
        let camera = session.camera();
        let walker = session.mover();
        let here = Vec2::new(camera.position.x, camera.position.z);
        let distance = here.distance(target);

        if distance <= ARRIVAL_DISTANCE {
            return None;
        }
        if distance < self.best_distance - ARRIVAL_DISTANCE * 0.1 {
            self.best_distance = distance;
            self.stalled_frames = 0;
        } else {
            self.stalled_frames += 1;
            if self.stalled_frames > STALL_FRAMES {
                tracing::warn!(?target, distance, "tour walk stalled, skipping");
                return None;
            }
        }

        let goal = Vec3::new(target.x, camera.position.y, target.y);
        let yaw = camera.yaw_towards(goal)?;
        let turn = wrap_angle(yaw - camera.yaw);

        Some(WalkInput {
            forward: (distance / walker.walk_speed.max(f32::EPSILON)).min(1.0),
            strafe: 0.0,
            turn: 0.0,
            // The walker subtracts look.x * sensitivity from yaw.
            look: Vec2::new(-turn / walker.mouse_sensitivity.max(f32::EPSILON), 0.0),
        })
    }

    fn next_step(&mut self) {
        self.cursor += 1;
        self.wait_until = None;
        self.best_distance = f32::INFINITY;
        self.stalled_frames = 0;
        if let Some(step) = self.current() {
            tracing::debug!(index = self.cursor, ?step, "tour step");
        }
    }
}

/// Wrap an angle into `[-PI, PI)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Drive `session` with `tour` on simulated time until the tour ends or
/// `max_frames` frames have run.
pub fn run_headless(
    session: &mut Session<Walker>,
    tour: &mut Tour,
    sink: &mut impl FrameSink,
    frame_interval: Duration,
    max_frames: u64,
) -> TourReport {
    let mut frame_loop = FrameLoop::new();
    let mut now = Duration::ZERO;

    while frame_loop.frame_count() < max_frames && !tour.is_finished() {
        now += frame_interval;
        tour.drive(session, now);
        frame_loop.tick_at(now, session, sink);
    }

    report(session, tour, frame_loop.frame_count())
}

/// Like [`run_headless`] but stamps frames with the wall clock and sleeps
/// `frame_interval` between them.
pub fn run_realtime(
    session: &mut Session<Walker>,
    tour: &mut Tour,
    sink: &mut impl FrameSink,
    frame_interval: Duration,
    max_frames: u64,
) -> TourReport {
    let mut frame_loop = FrameLoop::new();

    while frame_loop.frame_count() < max_frames && !tour.is_finished() {
        tour.drive(session, frame_loop.elapsed());
        frame_loop.tick(session, sink);
        std::thread::sleep(frame_interval);
    }

    report(session, tour, frame_loop.frame_count())
}

fn report(session: &Session<Walker>, tour: &Tour, frames: u64) -> TourReport {
    TourReport {
        frames,
        finished: tour.is_finished(),
        occupancy: session.occupancy(),
        puzzle_solved: session.tracker().has_required_rotations(),
    }
}

#[cfg(test)]
#[path = "tour_tests.rs"]
mod tests;
