//! Tone mapping of linear radiance to display range.
//!
//! Applied by the render dispatcher after ray casting; the core returns
//! unbounded linear RGB.

use crate::Color;
use glint_math::Vec3;

// Uncharted 2 filmic curve constants.
const A: f32 = 0.15;
const B: f32 = 0.50;
const C: f32 = 0.10;
const D: f32 = 0.20;
const E: f32 = 0.02;
const F: f32 = 0.30;
/// White point: the brightest radiance expected in a scene.
const W: f32 = 11.2;

/// Tone curve selected per render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneMapper {
    /// Pass linear radiance through unchanged.
    Linear,
    /// Reinhard operator `c / (1 + c)`.
    Reinhard,
    /// Uncharted 2 filmic curve, normalized to its white point.
    Uncharted2,
}

impl ToneMapper {
    /// Map linear radiance into [0, 1] per the selected curve.
    pub fn apply(&self, color: Color) -> Color {
        match self {
            ToneMapper::Linear => color,
            ToneMapper::Reinhard => reinhard(color),
            ToneMapper::Uncharted2 => uncharted2(color),
        }
    }
}

/// Reinhard operator: `c / (1 + c)` per component.
pub fn reinhard(color: Color) -> Color {
    color / (Vec3::ONE + color)
}

/// Power-curve gamma correction.
pub fn gamma(color: Color, gamma: f32) -> Color {
    let inverse = 1.0 / gamma;
    Vec3::new(
        color.x.powf(inverse),
        color.y.powf(inverse),
        color.z.powf(inverse),
    )
}

/// Fast gamma-2 approximation using a square root per component.
pub fn fast_gamma(color: Color) -> Color {
    Vec3::new(color.x.sqrt(), color.y.sqrt(), color.z.sqrt())
}

fn filmic_curve(x: f32) -> f32 {
    ((x * (A * x + C * B) + D * E) / (x * (A * x + B) + D * F)) - E / F
}

/// Uncharted 2 filmic tone mapping, scaled so the white point maps to 1.
pub fn uncharted2(color: Color) -> Color {
    let scale = 1.0 / filmic_curve(W);
    Vec3::new(
        filmic_curve(color.x),
        filmic_curve(color.y),
        filmic_curve(color.z),
    ) * scale
}
