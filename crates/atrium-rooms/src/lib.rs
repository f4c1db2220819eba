//! Gallery state: doors, statues, lights, room volumes, and the per-frame
//! room transition logic that ties them together.

pub mod controller;
pub mod door;
pub mod layout;
pub mod lights;
pub mod puzzle;
pub mod scene;
pub mod statue;


pub use controller::{RoomOccupancy, RoomTick, RoomTransitionController};
pub use door::{DoorAction, DoorAnimator, DoorGroup, DoorPhase, DoorTween, LeafAngles, Pivot};
pub use lights::{GalleryLights, Light};
pub use puzzle::{PuzzleError, PuzzleTransition, StatueOrientationTracker};
pub use scene::{DoorId, GalleryScene, Interactable};
pub use statue::{Heading, OrientationEvent, Statue, StatueId};
