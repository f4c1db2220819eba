use glam::Vec3;

/// A named light source with a scalar intensity.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub name: &'static str,
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(name: &'static str, position: Vec3, intensity: f32) -> Self {
        Self {
            name,
            position,
            intensity,
        }
    }

    pub fn is_off(&self) -> bool {
        self.intensity == 0.0
    }

    /// Set the intensity, logging only when it actually changes.
    pub fn set(&mut self, intensity: f32) {
        if self.intensity != intensity {
            tracing::debug!(light = self.name, from = self.intensity, to = intensity, "light changed");
            self.intensity = intensity;
        }
    }
}

/// The lights the room logic drives.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryLights {
    /// The two white spots that light the sunny room while the puzzle is unsolved.
    pub sunny_ambient: [Light; 2],
    /// Red spot that signals a solved puzzle.
    pub puzzle_solved: Light,
    /// Spot over the dark room's entrance, lit once the sunny room was visited.
    pub dark_room_door: Light,
}

impl GalleryLights {
    /// The three lights owned by the sunny room.
    pub fn sunny_room(&self) -> impl Iterator<Item = &Light> {
        self.sunny_ambient.iter().chain(std::iter::once(&self.puzzle_solved))
    }

    pub fn set_ambient(&mut self, intensity: f32) {
        for light in &mut self.sunny_ambient {
            light.set(intensity);
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Light> {
        self.sunny_room().chain(std::iter::once(&self.dark_room_door))
    }
}
