//! First-person camera and the walker that moves it through the gallery.

pub mod first_person_camera;
pub mod walker;

pub use first_person_camera::FirstPersonCamera;
pub use walker::{CameraMover, WalkInput, Walker};
