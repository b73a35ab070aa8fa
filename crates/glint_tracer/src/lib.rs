//! Glint - Whitted-style CPU ray tracing
//!
//! A recursive ray tracer over analytic primitives: per-pixel primary
//! rays, nearest-hit queries against a flat scene, Blinn-Phong direct
//! lighting with shadows, and bounded-depth reflection/refraction.

mod camera;
mod hit;
mod light;
mod material;
mod primitive;
mod renderer;
mod scene;
mod tonemap;

pub use camera::Camera;
pub use hit::Intersection;
pub use light::{
    Attenuation, DirectionalLight, Light, PointLight, RectAreaLight, ShadingMode,
};
pub use material::{Color, Material};
pub use primitive::{Cuboid, Cylinder, Hemisphere, Plane, Primitive, Sphere};
pub use renderer::{render, ExportError, FrameBuffer, RenderConfig};
pub use scene::{
    Scene, AREA_LIGHT_SAMPLES, BACKGROUND, MAX_DEPTH, SHADOW_INTENSITY, SURFACE_OFFSET,
};
pub use tonemap::{fast_gamma, gamma, reinhard, uncharted2, ToneMapper};

/// Re-export Ray and common math types from glint_math
pub use glint_math::{Ray, Vec3};

use rand::RngCore;

/// Uniform f32 in [0, 1) drawn from a type-erased random source.
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}
