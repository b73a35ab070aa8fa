//! Analytic geometric primitives.
//!
//! Each shape solves its ray intersection in closed form and reports the
//! nearest strictly-positive hit with a ray-facing normal. The set of
//! shapes is closed, so dispatch is a plain enum rather than a trait
//! object.

mod cuboid;
mod cylinder;
mod hemisphere;
mod plane;
mod sphere;

pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use hemisphere::Hemisphere;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::Intersection;
use glint_math::{Ray, Vec3};

/// Tolerance for near-zero denominators and near-parallel rays.
pub(crate) const EPSILON: f32 = 1e-6;

/// A scene primitive.
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Hemisphere(Hemisphere),
}

impl Primitive {
    /// Test the ray against this primitive.
    ///
    /// Returns the nearest intersection with `t > 0`, or `None`. The ray
    /// direction need not be normalized; `t` is in units of its length.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Plane(p) => p.intersect(ray),
            Primitive::Cuboid(c) => c.intersect(ray),
            Primitive::Cylinder(c) => c.intersect(ray),
            Primitive::Hemisphere(h) => h.intersect(ray),
        }
    }

    /// Wall thickness of the shape (0 for solid shapes).
    pub fn thickness(&self) -> f32 {
        match self {
            Primitive::Cylinder(c) => c.thickness(),
            Primitive::Hemisphere(h) => h.thickness(),
            _ => 0.0,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<Cuboid> for Primitive {
    fn from(c: Cuboid) -> Self {
        Primitive::Cuboid(c)
    }
}

impl From<Cylinder> for Primitive {
    fn from(c: Cylinder) -> Self {
        Primitive::Cylinder(c)
    }
}

impl From<Hemisphere> for Primitive {
    fn from(h: Hemisphere) -> Self {
        Primitive::Hemisphere(h)
    }
}

/// Keep the closer of two intersection candidates.
pub(crate) fn keep_closest<'a>(
    best: &mut Option<Intersection<'a>>,
    candidate: Option<Intersection<'a>>,
) {
    if let Some(hit) = candidate {
        if best.map_or(true, |b| hit.t < b.t) {
            *best = Some(hit);
        }
    }
}

/// Ray-disk intersection clipped to the annulus `[inner, outer]` around
/// `center` in the plane with unit normal `axis`.
///
/// With `thickness` at zero the disk is solid; otherwise hits closer to
/// the center than `inner` fall through the hole. Returns `(t, point)`.
pub(crate) fn intersect_disk(
    ray: &Ray,
    center: Vec3,
    axis: Vec3,
    inner: f32,
    outer: f32,
    thickness: f32,
) -> Option<(f32, Vec3)> {
    let denominator = ray.direction.dot(axis);
    if denominator.abs() < EPSILON {
        return None;
    }

    let t = (center - ray.origin).dot(axis) / denominator;
    if t <= 0.0 {
        return None;
    }

    let point = ray.at(t);
    let distance = (point - center).length();

    if distance > outer {
        return None;
    }
    if thickness > EPSILON && distance < inner {
        return None;
    }

    Some((t, point))
}
