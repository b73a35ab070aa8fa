//! Surface reflectance description.

use glint_math::Vec3;

/// Color type alias (linear RGB; components may exceed 1.0 before tone mapping)
pub type Color = Vec3;

/// Immutable description of how a surface responds to light.
///
/// Built once at scene-construction time and shared by reference across
/// every primitive that uses it. Reflectivity and transparency both
/// contribute additively; they are not required to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse coefficient (RGB gain on the Lambertian term)
    pub diffuse: Color,
    /// Specular coefficient (RGB gain on the Blinn-Phong highlight)
    pub specular: Color,
    /// Ambient coefficient (RGB gain on the scene ambient color)
    pub ambient: Color,
    /// Specular exponent (shininess, > 0)
    pub shininess: f32,
    /// Fraction of incoming light that reflects, in [0, 1]
    pub reflectivity: f32,
    /// Fraction of incoming light that transmits, in [0, 1]
    pub transparency: f32,
    /// Index of refraction relative to vacuum/air (= 1.0)
    pub refractive_index: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(
        diffuse: Color,
        specular: Color,
        ambient: Color,
        shininess: f32,
        reflectivity: f32,
        transparency: f32,
        refractive_index: f32,
    ) -> Self {
        Self {
            diffuse,
            specular,
            ambient,
            shininess,
            reflectivity: reflectivity.clamp(0.0, 1.0),
            transparency: transparency.clamp(0.0, 1.0),
            refractive_index,
        }
    }

    /// A plain diffuse material with no highlight, reflection, or transmission.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse, Color::ZERO, diffuse * 0.1, 1.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_clamps_weights() {
        let m = Material::new(
            Color::ONE,
            Color::ONE,
            Color::ZERO,
            32.0,
            1.5,
            -0.25,
            1.5,
        );
        assert_eq!(m.reflectivity, 1.0);
        assert_eq!(m.transparency, 0.0);
    }

    #[test]
    fn test_matte_has_no_secondary_terms() {
        let m = Material::matte(Color::new(0.8, 0.2, 0.2));
        assert_eq!(m.reflectivity, 0.0);
        assert_eq!(m.transparency, 0.0);
        assert_eq!(m.specular, Color::ZERO);
    }
}
