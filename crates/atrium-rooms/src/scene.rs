//! The gallery scene: everything the room logic reads or mutates.

use atrium_math::Aabb;
use glam::{Vec2, Vec3};

use crate::door::DoorGroup;
use crate::lights::GalleryLights;
use crate::statue::{Statue, StatueId};

/// Half extents of the solid block a statue occupies.
const STATUE_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.9, 0.3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorId {
    /// Between the entrance hall and the dark room.
    DarkRoom,
    /// Between the entrance hall and the sunny room.
    SunnyRoom,
    /// The entrance hall's front door.
    Front,
}

impl DoorId {
    pub const ALL: [DoorId; 3] = [DoorId::DarkRoom, DoorId::SunnyRoom, DoorId::Front];
}

/// Something the player can activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interactable {
    Door(DoorId),
    Statue(StatueId),
}

#[derive(Clone, Debug)]
pub struct GalleryScene {
    pub lights: GalleryLights,
    /// Camera volume that counts as "in the sunny room".
    pub sunny_room: Aabb,
    /// Camera volume that counts as "in the dark room".
    pub dark_room: Aabb,
    dark_room_door: DoorGroup,
    sunny_room_door: DoorGroup,
    front_door: DoorGroup,
    walls: Vec<Aabb>,
    statues: Vec<Statue>,
}

impl GalleryScene {
    pub fn new(
        lights: GalleryLights,
        sunny_room: Aabb,
        dark_room: Aabb,
        [dark_room_door, sunny_room_door, front_door]: [DoorGroup; 3],
        walls: Vec<Aabb>,
        statues: Vec<Statue>,
    ) -> Self {
        Self {
            lights,
            sunny_room,
            dark_room,
            dark_room_door,
            sunny_room_door,
            front_door,
            walls,
            statues,
        }
    }

    pub fn door(&self, id: DoorId) -> &DoorGroup {
        match id {
            DoorId::DarkRoom => &self.dark_room_door,
            DoorId::SunnyRoom => &self.sunny_room_door,
            DoorId::Front => &self.front_door,
        }
    }

    pub fn door_mut(&mut self, id: DoorId) -> &mut DoorGroup {
        match id {
            DoorId::DarkRoom => &mut self.dark_room_door,
            DoorId::SunnyRoom => &mut self.sunny_room_door,
            DoorId::Front => &mut self.front_door,
        }
    }

    pub fn doors(&self) -> impl Iterator<Item = (DoorId, &DoorGroup)> {
        DoorId::ALL.into_iter().map(|id| (id, self.door(id)))
    }

    pub fn doors_mut(&mut self) -> [(DoorId, &mut DoorGroup); 3] {
        [
            (DoorId::DarkRoom, &mut self.dark_room_door),
            (DoorId::SunnyRoom, &mut self.sunny_room_door),
            (DoorId::Front, &mut self.front_door),
        ]
    }

    pub fn statues(&self) -> &[Statue] {
        &self.statues
    }

    pub fn statues_mut(&mut self) -> &mut [Statue] {
        &mut self.statues
    }

    pub fn statue(&self, id: StatueId) -> Option<&Statue> {
        self.statues.iter().find(|s| s.id() == id)
    }

    pub fn statue_mut(&mut self, id: StatueId) -> Option<&mut Statue> {
        self.statues.iter_mut().find(|s| s.id() == id)
    }

    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }

    /// Solid boxes for this frame: walls, statues, and every door that is
    /// not fully open.
    pub fn active_colliders(&self) -> Vec<Aabb> {
        let statues = self.statues.iter().map(|s| {
            Aabb::from_center_half_extents(
                s.position() + Vec3::new(0.0, STATUE_HALF_EXTENTS.y, 0.0),
                STATUE_HALF_EXTENTS,
            )
        });
        let doors = self
            .doors()
            .filter(|(_, door)| door.blocks_passage())
            .map(|(_, door)| door.collider());

        self.walls.iter().copied().chain(statues).chain(doors).collect()
    }

    /// The closest door or statue whose anchor lies within `reach` of
    /// `from`, measured on the floor plane.
    pub fn nearest_interactable(&self, from: Vec3, reach: f32) -> Option<Interactable> {
        let flat = |p: Vec3| Vec2::new(p.x, p.z);
        let origin = flat(from);

        let doors = self
            .doors()
            .map(|(id, door)| (Interactable::Door(id), flat(door.anchor())));
        let statues = self
            .statues
            .iter()
            .map(|s| (Interactable::Statue(s.id()), flat(s.position())));

        doors
            .chain(statues)
            .map(|(target, anchor)| (target, anchor.distance(origin)))
            .filter(|&(_, distance)| distance <= reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(target, _)| target)
    }
}
