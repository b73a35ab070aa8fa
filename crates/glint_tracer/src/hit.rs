//! Intersection record for ray-primitive hits.

use crate::Material;
use glint_math::Vec3;

/// Record of a ray-primitive intersection.
///
/// Returned by value from the intersection routines; the scene keeps the
/// closest candidate by copying the record, never by aliasing it.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Ray parameter at the hit (always > 0)
    pub t: f32,
    /// World-space point of intersection
    pub point: Vec3,
    /// Unit surface normal, oriented against the incoming ray
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Wall thickness of the primitive that was hit (0 for solid shapes),
    /// added to the bias when secondary rays are offset off the surface
    pub thickness: f32,
}

impl<'a> Intersection<'a> {
    /// Create a record, orienting the normal to face the incoming ray.
    ///
    /// Guarantees `normal.dot(ray_direction) <= 0` so shading and the
    /// secondary-ray offsets can assume a front-facing normal.
    pub fn new(
        t: f32,
        point: Vec3,
        outward_normal: Vec3,
        ray_direction: Vec3,
        material: &'a Material,
        thickness: f32,
    ) -> Self {
        let normal = if outward_normal.dot(ray_direction) > 0.0 {
            -outward_normal
        } else {
            outward_normal
        };

        Self {
            t,
            point,
            normal,
            material,
            thickness,
        }
    }
}
