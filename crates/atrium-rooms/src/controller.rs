//! Per-frame room logic: which room the camera is in, which lights burn, and
//! when the sunny room door swings.

use std::time::Duration;

use glam::Vec3;

use crate::door::{DoorAction, DoorAnimator};
use crate::puzzle::PuzzleTransition;
use crate::scene::{DoorId, GalleryScene};

/// One-way latches. Once set they stay set for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub entered_sunny_room: bool,
    pub entered_dark_room: bool,
}

/// What a single controller tick observed and did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomTick {
    pub in_sunny_room: bool,
    pub in_dark_room: bool,
    /// Command issued to the sunny room door this tick. The animator may have
    /// ignored it if the door was already heading there.
    pub sunny_door_command: Option<DoorAction>,
}

#[derive(Clone, Debug, Default)]
pub struct RoomTransitionController {
    occupancy: RoomOccupancy,
    animator: DoorAnimator,
}

impl RoomTransitionController {
    pub fn new(animator: DoorAnimator) -> Self {
        Self {
            occupancy: RoomOccupancy::default(),
            animator,
        }
    }

    pub fn occupancy(&self) -> RoomOccupancy {
        self.occupancy
    }

    /// The animator used for every door command this controller issues.
    pub fn animator(&self) -> &DoorAnimator {
        &self.animator
    }

    /// Run once per frame with the camera's current position.
    pub fn tick(&mut self, camera: Vec3, scene: &mut GalleryScene, now: Duration) -> RoomTick {
        let in_sunny_room = scene.sunny_room.contains_point(camera);
        let in_dark_room = scene.dark_room.contains_point(camera);
        let mut sunny_door_command = None;

        if in_sunny_room {
            if !self.occupancy.entered_sunny_room {
                tracing::info!("entered the sunny room");
                self.occupancy.entered_sunny_room = true;
            }
            if scene.lights.puzzle_solved.is_off() {
                scene.lights.set_ambient(1.0);
                self.animator
                    .command(scene.door_mut(DoorId::SunnyRoom), DoorAction::Close, now);
                sunny_door_command = Some(DoorAction::Close);
            }
        } else {
            scene.lights.set_ambient(0.0);
            scene.lights.puzzle_solved.set(0.0);
        }

        if self.occupancy.entered_sunny_room {
            scene.lights.dark_room_door.set(1.0);
        }

        if in_dark_room && !self.occupancy.entered_dark_room {
            tracing::info!("entered the dark room");
            self.occupancy.entered_dark_room = true;
        }

        tracing::trace!(in_sunny_room, in_dark_room, "room tick");
        RoomTick {
            in_sunny_room,
            in_dark_room,
            sunny_door_command,
        }
    }

    /// React to a change of the puzzle's solved state. Called synchronously
    /// by whatever recorded the orientation event.
    ///
    /// A regression darkens the puzzle light and closes the sunny room door,
    /// so the door is never left open for an unsolved puzzle.
    pub fn on_puzzle_transition(
        &mut self,
        transition: PuzzleTransition,
        scene: &mut GalleryScene,
        now: Duration,
    ) -> Option<DoorAction> {
        let action = match transition {
            PuzzleTransition::Solved => {
                tracing::info!("puzzle solved, opening the sunny room door");
                scene.lights.set_ambient(0.0);
                scene.lights.puzzle_solved.set(1.0);
                DoorAction::Open
            }
            PuzzleTransition::Regressed => {
                tracing::info!("puzzle no longer solved, closing the sunny room door");
                scene.lights.puzzle_solved.set(0.0);
                DoorAction::Close
            }
            PuzzleTransition::Unchanged => return None,
        };
        self.animator
            .command(scene.door_mut(DoorId::SunnyRoom), action, now);
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::DoorPhase;
    use crate::layout::gallery;

    const INSIDE_SUNNY: Vec3 = Vec3::new(30.0, 1.7, 0.0);
    const INSIDE_DARK: Vec3 = Vec3::new(-30.0, 1.7, 0.0);
    const HALL: Vec3 = Vec3::new(0.0, 1.7, 0.0);

    #[test]
    fn test_inside_sunny_with_puzzle_light_off_closes_door() {
        let mut scene = gallery();
        scene.lights.puzzle_solved.intensity = 0.0;
        scene.lights.set_ambient(0.0);
        let mut controller = RoomTransitionController::default();

        let tick = controller.tick(INSIDE_SUNNY, &mut scene, Duration::ZERO);

        assert!(tick.in_sunny_room);
        assert_eq!(tick.sunny_door_command, Some(DoorAction::Close));
        assert!(scene.lights.sunny_ambient.iter().all(|l| l.intensity == 1.0));
        assert!(controller.occupancy().entered_sunny_room);
    }

    #[test]
    fn test_inside_sunny_with_puzzle_light_on_leaves_door_alone() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();
        let tick = controller.tick(INSIDE_SUNNY, &mut scene, Duration::ZERO);
        assert_eq!(tick.sunny_door_command, None);
    }

    #[test]
    fn test_outside_turns_all_sunny_lights_off() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();
        let tick = controller.tick(HALL, &mut scene, Duration::ZERO);

        assert!(!tick.in_sunny_room);
        assert!(scene.lights.sunny_room().all(|l| l.intensity == 0.0));
        assert!(scene.lights.dark_room_door.is_off());
    }

    #[test]
    fn test_dark_room_before_sunny_room_keeps_indicator_off() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();
        controller.tick(HALL, &mut scene, Duration::ZERO);
        let tick = controller.tick(INSIDE_DARK, &mut scene, Duration::from_millis(16));

        assert!(tick.in_dark_room);
        assert!(scene.lights.dark_room_door.is_off());
        assert_eq!(
            controller.occupancy(),
            RoomOccupancy {
                entered_sunny_room: false,
                entered_dark_room: true,
            }
        );
    }

    #[test]
    fn test_latches_survive_leaving() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();
        controller.tick(INSIDE_SUNNY, &mut scene, Duration::ZERO);
        controller.tick(INSIDE_DARK, &mut scene, Duration::from_millis(16));
        controller.tick(HALL, &mut scene, Duration::from_millis(32));

        let occupancy = controller.occupancy();
        assert!(occupancy.entered_sunny_room);
        assert!(occupancy.entered_dark_room);
        assert_eq!(scene.lights.dark_room_door.intensity, 1.0);
    }

    #[test]
    fn test_solved_opens_door_and_swaps_lights() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();

        let action = controller.on_puzzle_transition(PuzzleTransition::Solved, &mut scene, Duration::ZERO);

        assert_eq!(action, Some(DoorAction::Open));
        assert_eq!(scene.door(DoorId::SunnyRoom).phase(), DoorPhase::Opening);
        assert_eq!(scene.lights.puzzle_solved.intensity, 1.0);
        assert!(scene.lights.sunny_ambient.iter().all(|l| l.is_off()));
    }

    #[test]
    fn test_regression_closes_door_and_darkens_puzzle_light() {
        let mut scene = gallery();
        let mut controller = RoomTransitionController::default();
        controller.on_puzzle_transition(PuzzleTransition::Solved, &mut scene, Duration::ZERO);

        let action = controller.on_puzzle_transition(
            PuzzleTransition::Regressed,
            &mut scene,
            Duration::from_millis(300),
        );

        assert_eq!(action, Some(DoorAction::Close));
        assert_eq!(scene.door(DoorId::SunnyRoom).phase(), DoorPhase::Closing);
        assert!(scene.lights.puzzle_solved.is_off());
    }

    #[test]
    fn test_unchanged_does_nothing() {
        let mut scene = gallery();
        let before = scene.lights.clone();
        let mut controller = RoomTransitionController::default();
        let action = controller.on_puzzle_transition(PuzzleTransition::Unchanged, &mut scene, Duration::ZERO);
        assert_eq!(action, None);
        assert_eq!(scene.lights, before);
        assert_eq!(scene.door(DoorId::SunnyRoom).phase(), DoorPhase::Closed);
    }
}
