//! Perspective camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera mapping pixel coordinates to world-space rays.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_tan_fov: f32,
    aspect_ratio: f32,
    width: f32,
    height: f32,
}

impl Camera {
    /// Create a camera looking from `look_from` toward `look_at`.
    ///
    /// `vfov` is the vertical field of view in degrees; `width`/`height`
    /// are the output resolution the pixel mapping is defined over.
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        world_up: Vec3,
        vfov: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let forward = (look_at - look_from).normalize();
        let right = forward.cross(world_up).normalize();
        let up = right.cross(forward).normalize();

        Self {
            origin: look_from,
            forward,
            right,
            up,
            half_tan_fov: (vfov.to_radians() / 2.0).tan(),
            aspect_ratio: width as f32 / height as f32,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Create a camera orbiting `look_at` on a sphere of `radius`.
    ///
    /// `latitude`/`longitude` are in radians; latitude 0 sits on the
    /// equator and longitude 0 looks down the +Z axis toward the target.
    pub fn orbiting(
        look_at: Vec3,
        world_up: Vec3,
        vfov: f32,
        latitude: f32,
        longitude: f32,
        radius: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let direction = Vec3::new(
            latitude.cos() * longitude.sin(),
            latitude.sin(),
            latitude.cos() * longitude.cos(),
        );
        Self::new(
            look_at + radius * direction,
            look_at,
            world_up,
            vfov,
            width,
            height,
        )
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner; the returned direction is
    /// normalized.
    pub fn ray_at_pixel(&self, x: u32, y: u32) -> Ray {
        let x_offset =
            (2.0 * (x as f32 + 0.5) / self.width - 1.0) * self.aspect_ratio * self.half_tan_fov;
        let y_offset = (1.0 - 2.0 * (y as f32 + 0.5) / self.height) * self.half_tan_fov;

        let direction =
            (self.forward + x_offset * self.right + y_offset * self.up).normalize();

        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            100,
            100,
        );

        // The mean of the four center pixels lies on the view axis.
        let ray = camera.ray_at_pixel(50, 50);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert!(ray.direction.z < -0.99);
    }

    #[test]
    fn test_left_pixel_bends_left() {
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            100,
            100,
        );

        let left = camera.ray_at_pixel(0, 50);
        let right = camera.ray_at_pixel(99, 50);
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);

        let top = camera.ray_at_pixel(50, 0);
        let bottom = camera.ray_at_pixel(50, 99);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_directions_are_normalized() {
        let camera = Camera::new(
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            45.0,
            640,
            480,
        );

        for (x, y) in [(0, 0), (320, 240), (639, 479)] {
            let ray = camera.ray_at_pixel(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_orbiting_keeps_distance_and_aim() {
        let look_at = Vec3::new(0.0, 25.0, -150.0);
        let camera = Camera::orbiting(look_at, Vec3::Y, 45.0, 0.2, 0.5, 200.0, 640, 480);

        assert!(((camera.origin - look_at).length() - 200.0).abs() < 1e-2);

        // Center ray points back toward the orbit target.
        let ray = camera.ray_at_pixel(320, 240);
        let to_target = (look_at - camera.origin).normalize();
        assert!(ray.direction.dot(to_target) > 0.999);
    }
}
