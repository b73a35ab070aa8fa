//! Sphere primitive.

use crate::{Intersection, Material};
use glint_math::{solve_quadratic, Ray, Vec3};
use std::sync::Arc;

/// A solid sphere.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub(crate) fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let (t0, t1) = solve_quadratic(a, b, c)?;

        // Smallest strictly-positive root.
        let t = if t0 > 0.0 {
            t0
        } else if t1 > 0.0 {
            t1
        } else {
            return None;
        };

        let point = ray.at(t);
        let outward_normal = (point - self.center).normalize();

        Some(Intersection::new(
            t,
            point,
            outward_normal,
            ray.direction,
            &self.material,
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn white_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Arc::new(Material::matte(Color::ONE)))
    }

    #[test]
    fn test_hit_along_center_line() {
        // Ray fired from outside along the line through the center enters
        // at t = distance - radius.
        let sphere = white_sphere(Vec3::new(0.0, 0.0, -10.0), 5.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-4);
        assert!((hit.point - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_exit_root_along_center_line() {
        // The far root sits at t = distance + radius.
        let oc = Vec3::ZERO - Vec3::new(0.0, 0.0, -10.0);
        let dir = Vec3::new(0.0, 0.0, -1.0);
        let (t0, t1) =
            solve_quadratic(1.0, 2.0 * oc.dot(dir), oc.length_squared() - 25.0).unwrap();
        assert!((t0 - 5.0).abs() < 1e-4);
        assert!((t1 - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = white_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-4);
        // Normal flipped to face the ray coming from inside.
        assert!((hit.normal + Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let sphere = white_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = white_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }
}
