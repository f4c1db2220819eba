//! The seam between the simulation and whatever draws it.

use std::time::Duration;

use atrium_player::FirstPersonCamera;
use atrium_rooms::{GalleryScene, RoomOccupancy, RoomTick};
use atrium_space::CelestialSystem;

/// Everything a renderer needs for one frame, borrowed from the session.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    /// Frames completed before this one.
    pub index: u64,
    /// Time since the loop started.
    pub now: Duration,
    pub camera: &'a FirstPersonCamera,
    pub scene: &'a GalleryScene,
    pub celestial: &'a CelestialSystem,
    /// What the room controller saw and did this frame.
    pub rooms: RoomTick,
    pub occupancy: RoomOccupancy,
}

/// Receives each finished frame.
pub trait FrameSink {
    fn submit(&mut self, frame: &FrameView<'_>);
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameView<'_>),
{
    fn submit(&mut self, frame: &FrameView<'_>) {
        self(frame)
    }
}

/// Headless sink: a trace line every frame and a summary every
/// `summary_interval` frames (0 disables summaries).
#[derive(Clone, Debug)]
pub struct TracingSink {
    summary_interval: u64,
}

impl TracingSink {
    pub fn new(summary_interval: u64) -> Self {
        Self { summary_interval }
    }
}

impl FrameSink for TracingSink {
    fn submit(&mut self, frame: &FrameView<'_>) {
        let eye = frame.camera.position;
        tracing::trace!(
            frame = frame.index,
            x = eye.x,
            z = eye.z,
            yaw = frame.camera.yaw,
            "frame"
        );

        if self.summary_interval == 0 || frame.index % self.summary_interval != 0 {
            return;
        }

        let lights = &frame.scene.lights;
        let doors: Vec<String> = frame
            .scene
            .doors()
            .map(|(id, door)| format!("{id:?}={:?}", door.phase()))
            .collect();
        tracing::debug!(
            frame = frame.index,
            t = %format!("{:.2}s", frame.now.as_secs_f32()),
            eye = %format!("({:.1}, {:.1}, {:.1})", eye.x, eye.y, eye.z),
            in_sunny = frame.rooms.in_sunny_room,
            in_dark = frame.rooms.in_dark_room,
            puzzle_light = lights.puzzle_solved.intensity,
            dark_door_light = lights.dark_room_door.intensity,
            doors = %doors.join(" "),
            sun_spin = frame.celestial.sun.spin,
            "frame summary"
        );
    }
}
