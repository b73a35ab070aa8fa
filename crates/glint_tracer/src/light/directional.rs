//! Directional light source.

use super::{blinn_phong, ShadingMode};
use crate::{Color, Intersection};
use glint_math::Vec3;

/// A light infinitely far away shining along a fixed world direction.
///
/// Attenuation degenerates to the constant term, so the contribution is
/// distance-independent.
pub struct DirectionalLight {
    /// Unit vector from any surface point toward the light.
    to_light: Vec3,
    intensity: f32,
    color: Color,
}

impl DirectionalLight {
    /// Create a new directional light. `direction` is the direction the
    /// light travels (it is normalized and negated internally).
    pub fn new(direction: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            to_light: -direction.normalize(),
            intensity,
            color,
        }
    }

    pub(crate) fn shadow_ray_direction(&self) -> Vec3 {
        self.to_light
    }

    pub(crate) fn shade(
        &self,
        ray_direction: Vec3,
        hit: &Intersection,
        mode: ShadingMode,
    ) -> (Color, Color) {
        blinn_phong(
            self.to_light,
            self.intensity,
            self.color,
            ray_direction,
            hit,
            mode,
        )
    }
}
