//! Capped cylinder primitive, optionally hollow.

use super::{intersect_disk, keep_closest, EPSILON};
use crate::{Intersection, Material};
use glint_math::{solve_quadratic, Ray, Vec3};
use std::sync::Arc;

/// A finite cylinder between two cap planes.
///
/// With a nonzero wall thickness the shape is a tube: the inner wall is
/// intersected too and the caps become annuli. Thickness zero gives a
/// solid cylinder with full disk caps.
pub struct Cylinder {
    base: Vec3,
    axis: Vec3,
    height: f32,
    outer_radius: f32,
    inner_radius: f32,
    thickness: f32,
    material: Arc<Material>,
}

impl Cylinder {
    /// Create a new cylinder from its base and top cap centers.
    pub fn new(
        base: Vec3,
        top: Vec3,
        outer_radius: f32,
        thickness: f32,
        material: Arc<Material>,
    ) -> Self {
        Self {
            base,
            axis: (top - base).normalize(),
            height: (top - base).length(),
            outer_radius,
            inner_radius: outer_radius - thickness,
            thickness,
            material,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub(crate) fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut best = None;

        keep_closest(&mut best, self.intersect_wall(ray, self.outer_radius, true));
        if self.thickness > 0.0 {
            keep_closest(&mut best, self.intersect_wall(ray, self.inner_radius, false));
        }
        keep_closest(&mut best, self.intersect_cap(ray, true));
        keep_closest(&mut best, self.intersect_cap(ray, false));

        best
    }

    /// Intersect the infinite wall of the given radius, clipped to the
    /// axial span [0, height]. Inner-wall normals point toward the axis.
    fn intersect_wall(&self, ray: &Ray, radius: f32, is_outer: bool) -> Option<Intersection<'_>> {
        // Split the ray into components parallel and perpendicular to the
        // axis; the perpendicular part carries the 2-D circle equation.
        let dir_parallel = ray.direction.dot(self.axis) * self.axis;
        let dir_perpendicular = ray.direction - dir_parallel;

        let local_origin = ray.origin - self.base;
        let origin_parallel = local_origin.dot(self.axis) * self.axis;
        let origin_perpendicular = local_origin - origin_parallel;

        let a = dir_perpendicular.dot(dir_perpendicular);
        if a < EPSILON {
            // Ray nearly parallel to the axis; only the caps can hit.
            return None;
        }

        let b = 2.0 * origin_perpendicular.dot(dir_perpendicular);
        let c = origin_perpendicular.dot(origin_perpendicular) - radius * radius;

        let (t0, t1) = solve_quadratic(a, b, c)?;

        for t in [t0, t1] {
            if t <= 0.0 {
                continue;
            }

            let point = ray.at(t);
            let projection = (point - self.base).dot(self.axis);
            if projection < 0.0 || projection > self.height {
                continue;
            }

            let to_hit = point - self.base;
            let mut normal = (to_hit - to_hit.dot(self.axis) * self.axis).normalize();
            if !is_outer {
                normal = -normal;
            }

            return Some(Intersection::new(
                t,
                point,
                normal,
                ray.direction,
                &self.material,
                self.thickness,
            ));
        }

        None
    }

    /// Intersect the top or bottom cap disk, clipped to the annulus when
    /// the wall has thickness.
    fn intersect_cap(&self, ray: &Ray, is_top: bool) -> Option<Intersection<'_>> {
        let center = if is_top {
            self.base + self.axis * self.height
        } else {
            self.base
        };

        let (t, point) = intersect_disk(
            ray,
            center,
            self.axis,
            self.inner_radius,
            self.outer_radius,
            self.thickness,
        )?;

        let outward_normal = if is_top { self.axis } else { -self.axis };

        Some(Intersection::new(
            t,
            point,
            outward_normal,
            ray.direction,
            &self.material,
            self.thickness,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn upright(outer_radius: f32, thickness: f32) -> Cylinder {
        Cylinder::new(
            Vec3::ZERO,
            Vec3::new(0.0, 4.0, 0.0),
            outer_radius,
            thickness,
            Arc::new(Material::matte(Color::ONE)),
        )
    }

    #[test]
    fn test_wall_hit() {
        let cylinder = upright(1.0, 0.0);
        let ray = Ray::new(Vec3::new(5.0, 2.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));

        let hit = cylinder.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_wall_clipped_to_height() {
        let cylinder = upright(1.0, 0.0);
        let ray = Ray::new(Vec3::new(5.0, 10.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(cylinder.intersect(&ray).is_none());
    }

    #[test]
    fn test_solid_cap_hit() {
        let cylinder = upright(1.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = cylinder.intersect(&ray).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_tube_lets_axial_ray_through_hole() {
        // A hollow tube has annular caps; a ray down the axis passes
        // through the hole and exits without hitting anything.
        let tube = upright(1.0, 0.25);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(tube.intersect(&ray).is_none());
    }

    #[test]
    fn test_tube_inner_wall_normal_points_inward() {
        // From inside the bore, the nearest surface is the inner wall and
        // its normal faces back toward the axis.
        let tube = upright(1.0, 0.25);
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::X);

        let hit = tube.intersect(&ray).unwrap();
        assert!((hit.t - 0.75).abs() < 1e-4);
        assert!((hit.normal + Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_cap_annulus_rim_hit() {
        let tube = upright(1.0, 0.25);
        let ray = Ray::new(Vec3::new(0.875, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = tube.intersect(&ray).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_axial_ray_outside_radius_misses() {
        let cylinder = upright(1.0, 0.0);
        let ray = Ray::new(Vec3::new(2.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(cylinder.intersect(&ray).is_none());
    }
}
