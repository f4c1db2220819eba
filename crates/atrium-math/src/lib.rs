//! Spatial primitives for Atrium: axis-aligned room volumes and collider boxes.

mod aabb;

pub use aabb::Aabb;
