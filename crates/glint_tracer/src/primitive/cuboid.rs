//! Oriented box primitive.

use super::EPSILON;
use crate::{Intersection, Material};
use glint_math::{Mat3, Ray, Vec3};
use std::sync::Arc;

/// Tolerance for matching the local hit point against a box face.
const FACE_EPSILON: f32 = 1e-3;

/// An oriented box, built from its 8 corners.
///
/// The corners are consumed at construction to derive the center and an
/// orthonormal right/up/forward rotation frame; intersection then runs a
/// slab test against the axis-aligned box in local space.
pub struct Cuboid {
    center: Vec3,
    /// Local-to-world rotation; columns are the right/up/forward axes.
    rotation: Mat3,
    half_extents: Vec3,
    material: Arc<Material>,
}

impl Cuboid {
    /// Create a new cuboid from its 8 corners and edge lengths.
    ///
    /// The frame is recovered from the first corner's edge neighbors. An
    /// edge length can equal a face diagonal (a 3-4-5 box), so matching by
    /// distance alone can select a diagonal corner; the edge neighbors are
    /// the unique mutually orthogonal triple with the given lengths.
    pub fn new(
        corners: [Vec3; 8],
        width: f32,
        height: f32,
        depth: f32,
        material: Arc<Material>,
    ) -> Self {
        let center = corners.iter().copied().sum::<Vec3>() / 8.0;

        let p0 = corners[0];
        let spans_edge = |v: Vec3, edge: f32| (v.length() - edge).abs() < FACE_EPSILON;
        let orthogonal =
            |a: Vec3, b: Vec3| a.dot(b).abs() < FACE_EPSILON * a.length() * b.length();

        let mut spans = (Vec3::ZERO, Vec3::ZERO);
        'search: for a in &corners[1..] {
            let right_span = *a - p0;
            if !spans_edge(right_span, width) {
                continue;
            }
            for b in &corners[1..] {
                let up_span = *b - p0;
                if !spans_edge(up_span, height) || !orthogonal(right_span, up_span) {
                    continue;
                }
                for c in &corners[1..] {
                    let forward_span = *c - p0;
                    if spans_edge(forward_span, depth)
                        && orthogonal(right_span, forward_span)
                        && orthogonal(up_span, forward_span)
                    {
                        spans = (right_span, up_span);
                        break 'search;
                    }
                }
            }
        }

        let right = spans.0.normalize_or_zero();
        let up = spans.1.normalize_or_zero();
        let forward = right.cross(up).normalize_or_zero();

        Self {
            center,
            rotation: Mat3::from_cols(right, up, forward),
            half_extents: Vec3::new(width, height, depth) / 2.0,
            material,
        }
    }

    pub(crate) fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        // The rotation is orthonormal, so its transpose inverts it.
        let inverse = self.rotation.transpose();
        let local_origin = inverse * (ray.origin - self.center);
        let local_direction = inverse * ray.direction;

        let box_min = -self.half_extents;
        let box_max = self.half_extents;

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = local_origin[axis];
            let direction = local_direction[axis];

            if direction.abs() > EPSILON {
                let mut t1 = (box_min[axis] - origin) / direction;
                let mut t2 = (box_max[axis] - origin) / direction;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                t_min = t_min.max(t1);
                t_max = t_max.min(t2);

                if t_min > t_max {
                    return None;
                }
            } else if origin < box_min[axis] || origin > box_max[axis] {
                // Parallel to this slab and outside it.
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }

        let t = if t_min >= 0.0 { t_min } else { t_max };
        if t <= 0.0 {
            return None;
        }

        let local_point = local_origin + t * local_direction;
        let local_normal = Self::face_normal(local_point, box_min, box_max);

        let point = self.rotation * local_point + self.center;
        let outward_normal = (self.rotation * local_normal).normalize_or_zero();

        Some(Intersection::new(
            t,
            point,
            outward_normal,
            ray.direction,
            &self.material,
            0.0,
        ))
    }

    /// Match the local hit point against the six faces.
    fn face_normal(local_point: Vec3, box_min: Vec3, box_max: Vec3) -> Vec3 {
        if (local_point.x - box_min.x).abs() < FACE_EPSILON {
            Vec3::NEG_X
        } else if (local_point.x - box_max.x).abs() < FACE_EPSILON {
            Vec3::X
        } else if (local_point.y - box_min.y).abs() < FACE_EPSILON {
            Vec3::NEG_Y
        } else if (local_point.y - box_max.y).abs() < FACE_EPSILON {
            Vec3::Y
        } else if (local_point.z - box_min.z).abs() < FACE_EPSILON {
            Vec3::NEG_Z
        } else if (local_point.z - box_max.z).abs() < FACE_EPSILON {
            Vec3::Z
        } else {
            Vec3::ZERO
        }
    }
}
