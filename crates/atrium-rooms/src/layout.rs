//! The standard gallery: a square entrance hall with the dark room to the
//! west (-X), the sunny room to the east (+X) and the front door to the
//! north (-Z).

use atrium_math::Aabb;
use glam::Vec3;

use crate::door::DoorGroup;
use crate::lights::{GalleryLights, Light};
use crate::scene::GalleryScene;
use crate::statue::{Heading, Statue, StatueId};

/// Side length of the entrance hall floor.
pub const FLOOR_WIDTH: f32 = 25.0;
const HALF_FLOOR: f32 = FLOOR_WIDTH / 2.0;

/// Width of a single door leaf. Doorways are two leaves wide.
pub const DOOR_LEAF_WIDTH: f32 = 1.75;
pub const DOOR_HEIGHT: f32 = 2.5;
const DOOR_DEPTH: f32 = 0.2;
const DOOR_BASE: f32 = 0.13;
const DOORWAY_HEIGHT: f32 = DOOR_HEIGHT + 0.1;

const WALL_HEIGHT: f32 = 12.6;
const WALL_THICKNESS: f32 = 0.1;

/// X of the sunny room's far wall.
const SUNNY_FAR_WALL: f32 = 49.5;
/// X of the dark room's far wall.
const DARK_FAR_WALL: f32 = -50.0;

/// Floor point the player starts on.
pub const SPAWN: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Center of the dark room's planetarium.
pub const SUN_POSITION: Vec3 = Vec3::new(-31.0, 6.0, 0.0);

pub const POT_STATUE: StatueId = StatueId(0);
pub const ANGEL_STATUE: StatueId = StatueId(1);
pub const SCHOLAR_STATUE: StatueId = StatueId(2);

/// Build the standard gallery. Every door starts closed.
pub fn gallery() -> GalleryScene {
    let lights = GalleryLights {
        sunny_ambient: [
            Light::new("sunny_far_spot", Vec3::new(47.0, 14.6, 0.0), 1.0),
            Light::new("sunny_near_spot", Vec3::new(13.0, 14.6, 0.0), 1.0),
        ],
        puzzle_solved: Light::new("puzzle_solved", Vec3::new(47.0, 18.0, 0.0), 1.0),
        dark_room_door: Light::new("dark_room_door", Vec3::new(-11.0, 4.0, 0.0), 0.0),
    };

    let sunny_room = Aabb::new(
        Vec3::new(HALF_FLOOR + 0.1, 0.1, -HALF_FLOOR),
        Vec3::new(52.6, 12.6, HALF_FLOOR),
    );
    let dark_room = Aabb::new(
        Vec3::new(-53.0, 0.1, -HALF_FLOOR),
        Vec3::new(-13.0, 12.6, HALF_FLOOR),
    );

    let doors = [
        side_door("dark_room_door", -HALF_FLOOR),
        side_door("sunny_room_door", HALF_FLOOR),
        front_door(),
    ];

    let statues = vec![
        Statue::new(POT_STATUE, "pot", Vec3::new(30.0, 0.0, 3.1), Heading::North, Heading::East),
        Statue::new(ANGEL_STATUE, "angel", Vec3::new(30.0, 0.0, -3.0), Heading::North, Heading::South),
        Statue::new(SCHOLAR_STATUE, "scholar", Vec3::new(33.0, 0.0, 0.0), Heading::North, Heading::West),
    ];

    GalleryScene::new(lights, sunny_room, dark_room, doors, walls(), statues)
}

/// A door in a wall running along Z at `x`, centered on z = 0.
fn side_door(name: &str, x: f32) -> DoorGroup {
    DoorGroup::new(
        name,
        Vec3::new(x, DOOR_HEIGHT / 2.0, 0.0),
        Aabb::new(
            Vec3::new(x - DOOR_DEPTH / 2.0, DOOR_BASE, -DOOR_LEAF_WIDTH),
            Vec3::new(x + DOOR_DEPTH / 2.0, DOOR_BASE + DOOR_HEIGHT, DOOR_LEAF_WIDTH),
        ),
    )
}

fn front_door() -> DoorGroup {
    DoorGroup::new(
        "front_door",
        Vec3::new(0.0, DOOR_HEIGHT / 2.0, -HALF_FLOOR),
        Aabb::new(
            Vec3::new(-DOOR_LEAF_WIDTH, DOOR_BASE, -HALF_FLOOR - DOOR_DEPTH / 2.0),
            Vec3::new(DOOR_LEAF_WIDTH, DOOR_BASE + DOOR_HEIGHT, -HALF_FLOOR + DOOR_DEPTH / 2.0),
        ),
    )
}

fn walls() -> Vec<Aabb> {
    let mut walls = Vec::new();

    // Entrance hall.
    walls.extend(wall_along_x_with_doorway(-HALF_FLOOR, -HALF_FLOOR, HALF_FLOOR));
    walls.push(wall_along_x(HALF_FLOOR, -HALF_FLOOR, HALF_FLOOR));
    walls.extend(wall_along_z_with_doorway(-HALF_FLOOR, -HALF_FLOOR, HALF_FLOOR));
    walls.extend(wall_along_z_with_doorway(HALF_FLOOR, -HALF_FLOOR, HALF_FLOOR));

    // Sunny room.
    walls.push(wall_along_x(-HALF_FLOOR, HALF_FLOOR, SUNNY_FAR_WALL));
    walls.push(wall_along_x(HALF_FLOOR, HALF_FLOOR, SUNNY_FAR_WALL));
    walls.push(wall_along_z(SUNNY_FAR_WALL, -HALF_FLOOR, HALF_FLOOR));

    // Dark room.
    walls.push(wall_along_x(-HALF_FLOOR, DARK_FAR_WALL, -HALF_FLOOR));
    walls.push(wall_along_x(HALF_FLOOR, DARK_FAR_WALL, -HALF_FLOOR));
    walls.push(wall_along_z(DARK_FAR_WALL, -HALF_FLOOR, HALF_FLOOR));

    walls
}

/// Wall in the XY plane at `z`, spanning `x0..x1`.
fn wall_along_x(z: f32, x0: f32, x1: f32) -> Aabb {
    Aabb::new(
        Vec3::new(x0, 0.0, z - WALL_THICKNESS / 2.0),
        Vec3::new(x1, WALL_HEIGHT, z + WALL_THICKNESS / 2.0),
    )
}

/// Wall in the ZY plane at `x`, spanning `z0..z1`.
fn wall_along_z(x: f32, z0: f32, z1: f32) -> Aabb {
    Aabb::new(
        Vec3::new(x - WALL_THICKNESS / 2.0, 0.0, z0),
        Vec3::new(x + WALL_THICKNESS / 2.0, WALL_HEIGHT, z1),
    )
}

/// Wall at `z` with a doorway centered on x = 0: two side pieces and a lintel.
fn wall_along_x_with_doorway(z: f32, x0: f32, x1: f32) -> [Aabb; 3] {
    let lintel = wall_along_x(z, -DOOR_LEAF_WIDTH, DOOR_LEAF_WIDTH);
    [
        wall_along_x(z, x0, -DOOR_LEAF_WIDTH),
        wall_along_x(z, DOOR_LEAF_WIDTH, x1),
        Aabb::new(Vec3::new(lintel.min.x, DOORWAY_HEIGHT, lintel.min.z), lintel.max),
    ]
}

/// Wall at `x` with a doorway centered on z = 0.
fn wall_along_z_with_doorway(x: f32, z0: f32, z1: f32) -> [Aabb; 3] {
    let lintel = wall_along_z(x, -DOOR_LEAF_WIDTH, DOOR_LEAF_WIDTH);
    [
        wall_along_z(x, z0, -DOOR_LEAF_WIDTH),
        wall_along_z(x, DOOR_LEAF_WIDTH, z1),
        Aabb::new(Vec3::new(lintel.min.x, DOORWAY_HEIGHT, lintel.min.z), lintel.max),
    ]
}
