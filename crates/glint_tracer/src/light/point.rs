//! Point light source.

use super::{blinn_phong, Attenuation, ShadingMode};
use crate::{Color, Intersection};
use glint_math::Vec3;

/// An omnidirectional light at a fixed position with distance falloff.
pub struct PointLight {
    position: Vec3,
    attenuation: Attenuation,
    intensity: f32,
    color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3, attenuation: Attenuation, intensity: f32, color: Color) -> Self {
        Self {
            position,
            attenuation,
            intensity,
            color,
        }
    }

    pub(crate) fn shadow_ray_direction(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }

    pub(crate) fn shade(
        &self,
        ray_direction: Vec3,
        hit: &Intersection,
        mode: ShadingMode,
    ) -> (Color, Color) {
        let to_light = self.position - hit.point;
        let distance = to_light.length();
        let light_direction = to_light / distance;

        let attenuated = self.attenuation.attenuate(self.intensity, distance);

        blinn_phong(light_direction, attenuated, self.color, ray_direction, hit, mode)
    }
}
