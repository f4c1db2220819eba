//! The session owns every piece of gallery state for one run.

use std::time::Duration;

use atrium_config::Config;
use atrium_player::{CameraMover, FirstPersonCamera, Walker};
use atrium_rooms::layout::{self, SUN_POSITION};
use atrium_rooms::{
    DoorAction, DoorAnimator, DoorPhase, GalleryScene, Interactable, OrientationEvent, PuzzleError,
    PuzzleTransition, RoomOccupancy, RoomTransitionController, StatueId,
    StatueOrientationTracker,
};
use atrium_space::{CelestialSystem, PlanetGenerator, Sun};
use glam::Vec3;

use crate::render::FrameView;

/// Scene, camera, mover, room logic, puzzle and sky, created together at
/// startup and dropped together at shutdown.
pub struct Session<M: CameraMover = Walker> {
    scene: GalleryScene,
    camera: FirstPersonCamera,
    mover: M,
    controller: RoomTransitionController,
    tracker: StatueOrientationTracker,
    celestial: CelestialSystem,
    statue_turn: Duration,
    reach: f32,
    frames: u64,
}

impl Session<Walker> {
    /// Standard gallery with a walker configured from `config.player`.
    pub fn from_config(config: &Config) -> Self {
        let mut walker = Walker::default();
        walker.walk_speed = config.player.walk_speed;
        walker.turn_speed = config.player.turn_speed;
        walker.mouse_sensitivity = config.player.mouse_sensitivity;
        walker.body_radius = config.player.body_radius;
        walker.eye_height = config.player.eye_height;
        Self::with_mover(config, walker)
    }
}

impl<M: CameraMover> Session<M> {
    pub fn with_mover(config: &Config, mover: M) -> Self {
        let scene = layout::gallery();

        let mut tracker = StatueOrientationTracker::new();
        for statue in scene.statues() {
            tracker.register(statue.id(), statue.faces_required());
        }

        let sky = &config.celestial;
        let planets = PlanetGenerator::new(sky.seed, sky.planet_count)
            .with_orbit_radii(sky.min_orbit_radius, sky.max_orbit_radius)
            .with_max_step(sky.max_orbit_step)
            .generate();
        let celestial = CelestialSystem::new(Sun::new(SUN_POSITION, sky.sun_spin_per_frame), planets);

        let camera =
            FirstPersonCamera::at(layout::SPAWN + Vec3::new(0.0, config.player.eye_height, 0.0));

        tracing::info!(
            statues = tracker.tracked(),
            planets = celestial.planets.len(),
            door_ms = config.doors.animation_ms,
            "session created"
        );

        Self {
            scene,
            camera,
            mover,
            controller: RoomTransitionController::new(DoorAnimator::new(config.doors.duration())),
            tracker,
            celestial,
            statue_turn: config.statues.duration(),
            reach: config.player.reach,
            frames: 0,
        }
    }

    /// Run one frame at time `now`, in order: camera, statues, sky, rooms,
    /// doors.
    pub fn frame(&mut self, now: Duration) -> FrameView<'_> {
        let colliders = self.scene.active_colliders();
        self.mover.update_position(&mut self.camera, &colliders);

        let events: Vec<OrientationEvent> = self
            .scene
            .statues_mut()
            .iter_mut()
            .filter_map(|statue| statue.advance(now))
            .collect();
        for event in events {
            // Every statue in the scene was registered at startup.
            if let Err(err) = self.record_orientation_event(event.statue, event.correct, now) {
                tracing::warn!(%err, "dropped orientation event");
            }
        }

        self.celestial.advance();

        let rooms = self.controller.tick(self.camera.position, &mut self.scene, now);

        let animator = *self.controller.animator();
        for (_, door) in self.scene.doors_mut() {
            animator.advance(door, now);
        }

        let index = self.frames;
        self.frames += 1;
        FrameView {
            index,
            now,
            camera: &self.camera,
            scene: &self.scene,
            celestial: &self.celestial,
            rooms,
            occupancy: self.controller.occupancy(),
        }
    }

    /// Report a statue's orientation and react to any change of the puzzle's
    /// solved state before returning.
    pub fn record_orientation_event(
        &mut self,
        statue: StatueId,
        correct: bool,
        now: Duration,
    ) -> Result<PuzzleTransition, PuzzleError> {
        let transition = self.tracker.record_orientation_event(statue, correct)?;
        self.controller
            .on_puzzle_transition(transition, &mut self.scene, now);
        Ok(transition)
    }

    /// Activate `target`: doors toggle, statues start a quarter turn.
    /// Returns whether anything started moving.
    pub fn interact(&mut self, target: Interactable, now: Duration) -> bool {
        match target {
            Interactable::Door(id) => {
                let door = self.scene.door_mut(id);
                let action = match door.phase() {
                    DoorPhase::Closed | DoorPhase::Closing => DoorAction::Open,
                    DoorPhase::Open | DoorPhase::Opening => DoorAction::Close,
                };
                tracing::info!(door = ?id, ?action, "door activated");
                self.controller.animator().command(door, action, now)
            }
            Interactable::Statue(id) => match self.scene.statue_mut(id) {
                Some(statue) => statue.start_turn(now, self.statue_turn),
                None => {
                    tracing::warn!(statue = %id, "no such statue");
                    false
                }
            },
        }
    }

    /// Activate the closest door or statue within reach of the camera.
    pub fn interact_nearest(&mut self, now: Duration) -> Option<Interactable> {
        let target = self
            .scene
            .nearest_interactable(self.camera.position, self.reach)?;
        self.interact(target, now);
        Some(target)
    }

    pub fn scene(&self) -> &GalleryScene {
        &self.scene
    }

    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn tracker(&self) -> &StatueOrientationTracker {
        &self.tracker
    }

    pub fn occupancy(&self) -> RoomOccupancy {
        self.controller.occupancy()
    }

    pub fn celestial(&self) -> &CelestialSystem {
        &self.celestial
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_math::Aabb;
    use atrium_player::WalkInput;
    use atrium_rooms::DoorId;
    use atrium_rooms::layout::{ANGEL_STATUE, POT_STATUE, SCHOLAR_STATUE};

    const FRAME: Duration = Duration::from_millis(16);

    fn session() -> Session {
        Session::from_config(&Config::default())
    }

    /// Mover that records the colliders it was handed and teleports the
    /// camera to a fixed point.
    struct Teleport {
        to: Vec3,
        seen_colliders: usize,
    }

    impl CameraMover for Teleport {
        fn update_position(&mut self, camera: &mut FirstPersonCamera, colliders: &[Aabb]) {
            self.seen_colliders = colliders.len();
            camera.position = self.to;
        }
    }

    #[test]
    fn test_new_session_state() {
        let s = session();
        assert_eq!(s.frames(), 0);
        assert_eq!(s.camera().position, Vec3::new(0.0, 1.7, 5.0));
        assert_eq!(s.tracker().tracked(), 3);
        assert!(!s.tracker().has_required_rotations());
        assert_eq!(s.celestial().planets.len(), 10);
        assert_eq!(s.occupancy(), RoomOccupancy::default());
    }

    #[test]
    fn test_frame_moves_camera_before_room_check() {
        let mut s = Session::with_mover(
            &Config::default(),
            Teleport {
                to: Vec3::new(30.0, 1.7, 0.0),
                seen_colliders: 0,
            },
        );
        let view = s.frame(FRAME);
        assert!(view.rooms.in_sunny_room);
        assert!(view.occupancy.entered_sunny_room);
        assert_eq!(view.index, 0);
        assert!(s.mover().seen_colliders > 0);
    }

    #[test]
    fn test_frame_advances_sky_once_per_frame() {
        let mut s = session();
        for i in 1..=5u32 {
            s.frame(FRAME * i);
        }
        assert_eq!(s.celestial().frames(), 5);
        assert!((s.celestial().sun.spin - 0.005).abs() < 1e-6);
        assert_eq!(s.frames(), 5);
    }

    #[test]
    fn test_walker_input_moves_camera() {
        let mut s = session();
        s.mover_mut().set_input(WalkInput {
            forward: 1.0,
            ..WalkInput::IDLE
        });
        s.frame(FRAME);
        assert!((s.camera().position.z - 4.9).abs() < 1e-5);
    }

    #[test]
    fn test_interact_toggles_door() {
        let mut s = session();
        let door = Interactable::Door(DoorId::Front);
        assert!(s.interact(door, Duration::ZERO));
        assert_eq!(s.scene().door(DoorId::Front).phase(), DoorPhase::Opening);

        // Toggling mid-swing reverses it.
        s.frame(Duration::from_millis(300));
        assert!(s.interact(door, Duration::from_millis(300)));
        assert_eq!(s.scene().door(DoorId::Front).phase(), DoorPhase::Closing);
    }

    #[test]
    fn test_interact_nearest_respects_reach() {
        let mut s = session();
        assert_eq!(s.interact_nearest(Duration::ZERO), None);

        let mut s = Session::with_mover(
            &Config::default(),
            Teleport {
                to: Vec3::new(-10.5, 1.7, 0.0),
                seen_colliders: 0,
            },
        );
        s.frame(FRAME);
        assert_eq!(
            s.interact_nearest(FRAME),
            Some(Interactable::Door(DoorId::DarkRoom))
        );
        assert_eq!(s.scene().door(DoorId::DarkRoom).phase(), DoorPhase::Opening);
    }

    #[test]
    fn test_statue_turns_feed_the_puzzle() {
        let mut s = Session::with_mover(
            &Config::default(),
            Teleport {
                to: Vec3::new(30.0, 1.7, 0.0),
                seen_colliders: 0,
            },
        );
        let mut now = Duration::ZERO;
        for (statue, turns) in [(POT_STATUE, 1), (ANGEL_STATUE, 2), (SCHOLAR_STATUE, 3)] {
            for _ in 0..turns {
                assert!(s.interact(Interactable::Statue(statue), now));
                now += Duration::from_millis(1000);
                s.frame(now);
            }
        }
        assert!(s.tracker().has_required_rotations());
        assert_eq!(s.scene().door(DoorId::SunnyRoom).phase(), DoorPhase::Opening);
        assert_eq!(s.scene().lights.puzzle_solved.intensity, 1.0);

        s.frame(now + Duration::from_millis(1000));
        assert_eq!(s.scene().door(DoorId::SunnyRoom).phase(), DoorPhase::Open);
    }

    #[test]
    fn test_record_unknown_statue_is_error() {
        let mut s = session();
        let err = s
            .record_orientation_event(StatueId(77), true, Duration::ZERO)
            .unwrap_err();
        assert_eq!(err, PuzzleError::UnknownStatue(StatueId(77)));
    }

    #[test]
    fn test_direct_event_solves_puzzle() {
        let mut s = session();
        for id in [POT_STATUE, ANGEL_STATUE] {
            assert_eq!(
                s.record_orientation_event(id, true, Duration::ZERO),
                Ok(PuzzleTransition::Unchanged)
            );
        }
        assert_eq!(
            s.record_orientation_event(SCHOLAR_STATUE, true, Duration::ZERO),
            Ok(PuzzleTransition::Solved)
        );
        assert_eq!(s.scene().door(DoorId::SunnyRoom).phase(), DoorPhase::Opening);
    }
}
