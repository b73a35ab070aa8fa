//! Hemispherical shell primitive.

use super::{intersect_disk, keep_closest};
use crate::{Intersection, Material};
use glint_math::{solve_quadratic, Ray, Vec3};
use std::sync::Arc;

/// Half of a sphere, clipped by the plane through its center.
///
/// `normal` orients the dome: only hits with `(hit - center) · normal >= 0`
/// are kept. The flat opening is a disk in the clipping plane, an annulus
/// when the shell has thickness.
pub struct Hemisphere {
    center: Vec3,
    normal: Vec3,
    outer_radius: f32,
    inner_radius: f32,
    thickness: f32,
    material: Arc<Material>,
}

impl Hemisphere {
    /// Create a new hemisphere. `normal` is normalized here.
    pub fn new(
        center: Vec3,
        normal: Vec3,
        outer_radius: f32,
        thickness: f32,
        material: Arc<Material>,
    ) -> Self {
        Self {
            center,
            normal: normal.normalize(),
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

        keep_closest(&mut best, self.intersect_shell(ray, self.outer_radius, true));
        if self.thickness > 0.0 {
            keep_closest(&mut best, self.intersect_shell(ray, self.inner_radius, false));
        }
        keep_closest(&mut best, self.intersect_opening(ray));

        best
    }

    /// Sphere solve, keeping only roots on the dome side of the clipping
    /// plane. Inner-shell normals point back toward the center.
    fn intersect_shell(&self, ray: &Ray, radius: f32, is_outer: bool) -> Option<Intersection<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - radius * radius;

        let (t0, t1) = solve_quadratic(a, b, c)?;

        for t in [t0, t1] {
            if t <= 0.0 {
                continue;
            }

            let point = ray.at(t);
            if (point - self.center).dot(self.normal) < 0.0 {
                continue;
            }

            let mut normal = (point - self.center).normalize();
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

    /// The flat circular opening in the clipping plane.
    fn intersect_opening(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let (t, point) = intersect_disk(
            ray,
            self.center,
            self.normal,
            self.inner_radius,
            self.outer_radius,
            self.thickness,
        )?;

        Some(Intersection::new(
            t,
            point,
            self.normal,
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

    /// Dome of radius 2 opening downward (normal +Y keeps the upper half).
    fn dome(thickness: f32) -> Hemisphere {
        Hemisphere::new(
            Vec3::ZERO,
            Vec3::Y,
            2.0,
            thickness,
            Arc::new(Material::matte(Color::ONE)),
        )
    }

    #[test]
    fn test_dome_hit_from_above() {
        let hemisphere = dome(0.0);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = hemisphere.intersect(&ray).unwrap();
        assert!((hit.t - 8.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_lower_half_is_clipped() {
        // Horizontal ray aimed below the clipping plane passes through
        // where the removed half would have been.
        let hemisphere = dome(0.0);
        let ray = Ray::new(Vec3::new(-10.0, -1.0, 0.0), Vec3::X);
        assert!(hemisphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_opening_disk_hit() {
        // From below, the first surface on the axis is the flat opening.
        let hemisphere = dome(0.0);
        let ray = Ray::new(Vec3::new(0.0, -10.0, 0.0), Vec3::Y);

        let hit = hemisphere.intersect(&ray).unwrap();
        assert!((hit.t - 10.0).abs() < 1e-4);
        // Flipped to face the upward ray.
        assert!((hit.normal + Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_shell_opening_is_annular() {
        // A thick shell's opening has a hole; an axial ray from below
        // continues to the inner shell surface instead.
        let shell = dome(0.5);
        let ray = Ray::new(Vec3::new(0.0, -10.0, 0.0), Vec3::Y);

        let hit = shell.intersect(&ray).unwrap();
        // Inner shell at radius 1.5 above the center.
        assert!((hit.t - 11.5).abs() < 1e-4);
        assert!((hit.normal + Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_inner_shell_normal_points_inward() {
        let shell = dome(0.5);
        // Start inside the bowl, fire upward: nearest is the inner shell.
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::Y);

        let hit = shell.intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-4);
        assert!((hit.normal + Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let hemisphere = dome(0.0);
        let ray = Ray::new(Vec3::new(10.0, 10.0, 0.0), Vec3::Y);
        assert!(hemisphere.intersect(&ray).is_none());
    }
}
