//! Light sources and the Blinn-Phong shading model.

mod directional;
mod point;
mod rect_area;

pub use directional::DirectionalLight;
pub use point::PointLight;
pub use rect_area::RectAreaLight;

use crate::{Color, Intersection};
use glint_math::Vec3;

/// Distance falloff of a light: constant + linear·d + quadratic·d².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// No falloff; intensity is distance-independent.
    pub const NONE: Attenuation = Attenuation {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Intensity remaining after falloff over `distance`.
    pub fn attenuate(&self, intensity: f32, distance: f32) -> f32 {
        intensity / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

/// How diffuse and specular terms are combined per shading point.
///
/// Selected per render pass by the caller; the two modes are mutually
/// exclusive and no light carries mode state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Smooth Blinn-Phong shading.
    BlinnPhong,
    /// Diffuse and specular terms floor-quantized into discrete bands.
    Cel,
}

/// Diffuse band count for cel shading.
const CEL_DIFFUSE_BANDS: u32 = 3;
/// Specular band count for cel shading.
const CEL_SPECULAR_BANDS: u32 = 2;

/// A point or directional light source.
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
}

impl Light {
    /// Unit direction of a shadow ray from `point` toward the light.
    pub fn shadow_ray_direction(&self, point: Vec3) -> Vec3 {
        match self {
            Light::Point(l) => l.shadow_ray_direction(point),
            Light::Directional(l) => l.shadow_ray_direction(),
        }
    }

    /// Diffuse and specular contribution at the hit point.
    pub fn shade(
        &self,
        ray_direction: Vec3,
        hit: &Intersection,
        mode: ShadingMode,
    ) -> (Color, Color) {
        match self {
            Light::Point(l) => l.shade(ray_direction, hit, mode),
            Light::Directional(l) => l.shade(ray_direction, hit, mode),
        }
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

/// Floor-quantize `value` into `levels` equal bands.
fn quantize(value: f32, levels: u32) -> f32 {
    let step = 1.0 / levels as f32;
    (value / step).floor() * step
}

/// Shared Blinn-Phong evaluation for all light variants.
///
/// `light_direction` points from the hit toward the light and must be
/// normalized; `attenuated` is the light's intensity after distance
/// falloff.
pub(crate) fn blinn_phong(
    light_direction: Vec3,
    attenuated: f32,
    light_color: Color,
    ray_direction: Vec3,
    hit: &Intersection,
    mode: ShadingMode,
) -> (Color, Color) {
    let material = hit.material;

    let lambertian = hit.normal.dot(light_direction).max(0.0);

    let half_vector = (light_direction - ray_direction).normalize();
    let highlight = hit
        .normal
        .dot(half_vector)
        .max(0.0)
        .powf(material.shininess);

    let (diffuse_term, specular_term) = match mode {
        ShadingMode::BlinnPhong => (lambertian, highlight),
        ShadingMode::Cel => (
            quantize(lambertian, CEL_DIFFUSE_BANDS),
            quantize(highlight, CEL_SPECULAR_BANDS),
        ),
    };

    let diffuse = attenuated * diffuse_term * (material.diffuse * light_color);
    let specular = attenuated * specular_term * (material.specular * light_color);

    (diffuse, specular)
}
