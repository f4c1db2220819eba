use glam::Vec3;

/// Axis-aligned box in scene space (meters).
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from two corners. Components are sorted so that
    /// min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Returns true if the point lies inside or on the boundary.
    ///
    /// Containment is inclusive on all six faces, so a camera standing
    /// exactly on a room's threshold already counts as inside.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Returns true if this box overlaps `other`
    /// (including touching edges/faces).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Returns the box moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// The overlapping region of two boxes, or `None` if they are disjoint.
    /// Touching boxes yield a flat region.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        self.intersects(other).then(|| Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_room() -> Aabb {
        Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 10.0))
    }

    #[test]
    fn test_contains_point_inside() {
        assert!(unit_room().contains_point(Vec3::new(5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contains_point_outside_each_axis() {
        let room = unit_room();
        assert!(!room.contains_point(Vec3::new(10.01, 5.0, 5.0)));
        assert!(!room.contains_point(Vec3::new(5.0, -0.01, 5.0)));
        assert!(!room.contains_point(Vec3::new(5.0, 5.0, 10.5)));
        assert!(!room.contains_point(Vec3::new(-1.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let room = unit_room();
        assert!(room.contains_point(Vec3::new(0.0, 0.0, 0.0))); // min corner
        assert!(room.contains_point(Vec3::new(10.0, 10.0, 10.0))); // max corner
        assert!(room.contains_point(Vec3::new(10.0, 5.0, 5.0))); // face
        assert!(room.contains_point(Vec3::new(5.0, 0.0, 10.0))); // edge
    }

    #[test]
    fn test_constructor_auto_sorts() {
        let aabb = Aabb::new(Vec3::new(10.0, -2.0, 3.0), Vec3::new(0.0, 4.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(0.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(10.0, 4.0, 3.0));
    }

    #[test]
    fn test_intersects_overlapping_and_disjoint() {
        let a = unit_room();
        let b = Aabb::new(Vec3::splat(5.0), Vec3::splat(15.0));
        let c = Aabb::new(Vec3::splat(20.0), Vec3::splat(30.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_intersects_touching() {
        let a = unit_room();
        let b = Aabb::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(20.0, 10.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_translated_moves_both_corners() {
        let moved = unit_room().translated(Vec3::new(-7.4, 0.1, -25.0));
        assert!((moved.min - Vec3::new(-7.4, 0.1, -25.0)).length() < 1e-5);
        assert!((moved.max - Vec3::new(2.6, 10.1, -15.0)).length() < 1e-5);
        assert_eq!(moved.size(), unit_room().size());
    }

    #[test]
    fn test_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::splat(10.0), Vec3::splat(5.0));
        assert_eq!(aabb.min, Vec3::splat(5.0));
        assert_eq!(aabb.max, Vec3::splat(15.0));
        assert_eq!(aabb.center(), Vec3::splat(10.0));
    }

    #[test]
    fn test_intersection_region() {
        let door = Aabb::new(Vec3::new(4.9, 0.0, 2.0), Vec3::new(5.1, 2.5, 8.0));
        let overlap = unit_room().intersection(&door).unwrap();
        assert_eq!(overlap, door);

        let body = Aabb::new(Vec3::new(4.7, 0.0, 1.0), Vec3::new(5.3, 1.7, 1.6));
        assert_eq!(body.intersection(&door), None);

        let body = body.translated(Vec3::new(0.0, 0.0, 1.2));
        let depth = body.intersection(&door).unwrap().size();
        assert!((depth.x - 0.2).abs() < 1e-5);
        assert!((depth.z - 0.6).abs() < 1e-5);
    }
}
