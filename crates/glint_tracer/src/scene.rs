//! Scene container and the recursive ray-cast algorithm.

use crate::{Color, Intersection, Light, Primitive, RectAreaLight, ShadingMode};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Maximum recursion depth for reflection/transmission rays. Exceeding it
/// truncates to the background color, which is the sole termination
/// guarantee of the recursion.
pub const MAX_DEPTH: u32 = 4;

/// Radiance returned for rays that miss everything or exhaust the depth.
pub const BACKGROUND: Color = Vec3::ZERO;

/// Fraction of direct light removed at an occluded shading point.
pub const SHADOW_INTENSITY: f32 = 1.0;

/// Fixed bias added when offsetting secondary-ray origins off a surface,
/// on top of the primitive's own wall thickness.
pub const SURFACE_OFFSET: f32 = 5.5e-3;

/// Stochastic samples averaged per area light per shading point.
pub const AREA_LIGHT_SAMPLES: u32 = 4;

/// A static scene: primitives, lights, and one ambient color.
///
/// Built once and read-only during rendering; all per-ray state lives on
/// the `ray_cast` call stack, so shared references can traverse it from
/// many threads at once.
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    area_lights: Vec<RectAreaLight>,
    ambient: Color,
}

impl Scene {
    /// Create an empty scene with the given ambient color.
    pub fn new(ambient: Color) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            area_lights: Vec::new(),
            ambient,
        }
    }

    /// Add a primitive. Insertion order is preserved.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a point or directional light.
    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    /// Add a rectangular area light.
    pub fn add_area_light(&mut self, light: RectAreaLight) {
        self.area_lights.push(light);
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len() + self.area_lights.len()
    }

    /// Nearest intersection along the ray.
    ///
    /// Tests every primitive unconditionally (no spatial index) and keeps
    /// the globally minimal positive `t`, copying candidate records by
    /// value.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut best: Option<Intersection> = None;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray) {
                if best.map_or(true, |b| hit.t < b.t) {
                    best = Some(hit);
                }
            }
        }

        best
    }

    /// Whether anything blocks the ray.
    ///
    /// Short-circuits on the first hit found; not distance-bounded, so any
    /// object in front of the origin occludes regardless of how far away
    /// the light is.
    pub fn occluded(&self, ray: &Ray) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect(ray).is_some())
    }

    /// Trace a ray and return its radiance.
    ///
    /// Recursive Whitted-style evaluation: ambient plus per-light
    /// shadowed Blinn-Phong terms, then reflection and transmission rays
    /// weighted by the material and traced at `depth + 1`.
    pub fn ray_cast(
        &self,
        ray: &Ray,
        depth: u32,
        mode: ShadingMode,
        rng: &mut dyn RngCore,
    ) -> Color {
        if depth > MAX_DEPTH {
            return BACKGROUND;
        }

        let Some(hit) = self.nearest_hit(ray) else {
            return BACKGROUND;
        };

        // Secondary rays leave from just off the surface so they cannot
        // immediately re-hit it (shadow acne); hollow shapes push the
        // origin out past their wall.
        let offset = SURFACE_OFFSET + hit.thickness;
        let shadow_origin = hit.point + hit.normal * offset;

        let mut illuminance = self.ambient * hit.material.ambient;

        for light in &self.lights {
            let shadow_direction = light.shadow_ray_direction(shadow_origin);
            let (mut diffuse, mut specular) = light.shade(ray.direction, &hit, mode);

            if self.occluded(&Ray::new(shadow_origin, shadow_direction)) {
                diffuse *= 1.0 - SHADOW_INTENSITY;
                specular *= 1.0 - SHADOW_INTENSITY;
            }

            illuminance += diffuse + specular;
        }

        for light in &self.area_lights {
            let mut accumulated = Color::ZERO;

            for _ in 0..AREA_LIGHT_SAMPLES {
                let sampled_point = light.sample_point(rng);
                let shadow_direction = light.shadow_ray_direction(shadow_origin, sampled_point);
                let (mut diffuse, mut specular) =
                    light.shade(ray.direction, &hit, sampled_point, mode);

                if self.occluded(&Ray::new(shadow_origin, shadow_direction)) {
                    diffuse *= 1.0 - SHADOW_INTENSITY;
                    specular *= 1.0 - SHADOW_INTENSITY;
                }

                accumulated += diffuse + specular;
            }

            illuminance += accumulated / AREA_LIGHT_SAMPLES as f32;
        }

        let material = hit.material;

        if material.reflectivity > 0.0 {
            let reflected = reflect(ray.direction, hit.normal);
            let reflection_ray = Ray::new(hit.point + hit.normal * offset, reflected);
            illuminance +=
                material.reflectivity * self.ray_cast(&reflection_ray, depth + 1, mode, rng);
        }

        if material.transparency > 0.0 {
            let eta = 1.0 / material.refractive_index;
            let cos_incident = -ray.direction.dot(hit.normal);
            let k = 1.0 - eta * eta * (1.0 - cos_incident * cos_incident);

            if k > 0.0 {
                let refracted =
                    eta * ray.direction + (eta * cos_incident - k.sqrt()) * hit.normal;
                let refraction_ray = Ray::new(hit.point - hit.normal * offset, refracted);
                illuminance +=
                    material.transparency * self.ray_cast(&refraction_ray, depth + 1, mode, rng);
            } else {
                // Total internal reflection: reflect instead, still
                // weighted by the transparency coefficient.
                let reflected = reflect(ray.direction, hit.normal);
                let fallback_ray = Ray::new(hit.point + hit.normal * offset, reflected);
                illuminance +=
                    material.transparency * self.ray_cast(&fallback_ray, depth + 1, mode, rng);
            }
        }

        illuminance
    }
}

/// Mirror `direction` about the unit normal `normal`.
fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}
