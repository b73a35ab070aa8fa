//! Bounded parallelogram primitive.

use super::EPSILON;
use crate::{Intersection, Material};
use glint_math::{Ray, Vec3};
use std::sync::Arc;

/// A bounded plane patch.
///
/// Points on the patch are `center + s*u + t*v` with both parametric
/// coordinates in [-1, 1], so `u` and `v` are half-extents, not edges.
pub struct Plane {
    center: Vec3,
    normal: Vec3,
    u: Vec3,
    v: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane patch. `normal` is normalized here.
    pub fn new(center: Vec3, normal: Vec3, u: Vec3, v: Vec3, material: Arc<Material>) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            u,
            v,
            material,
        }
    }

    pub(crate) fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let denominator = ray.direction.dot(self.normal);
        if denominator.abs() < EPSILON {
            return None;
        }

        let t = (self.center - ray.origin).dot(self.normal) / denominator;
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);

        // Project the hit into the (u, v) basis with the 2x2
        // normal-equations solve; the spans need not be orthogonal.
        let w = point - self.center;
        let uu = self.u.dot(self.u);
        let uv = self.u.dot(self.v);
        let vv = self.v.dot(self.v);
        let wu = w.dot(self.u);
        let wv = w.dot(self.v);

        let determinant = uu * vv - uv * uv;
        let s_coord = (vv * wu - uv * wv) / determinant;
        let t_coord = (uu * wv - uv * wu) / determinant;

        if !(-1.0..=1.0).contains(&s_coord) || !(-1.0..=1.0).contains(&t_coord) {
            return None;
        }

        Some(Intersection::new(
            t,
            point,
            self.normal,
            ray.direction,
            &self.material,
            0.0,
        ))
    }
}
