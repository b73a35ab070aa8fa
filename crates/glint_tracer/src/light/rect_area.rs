//! Rectangular area light source.

use super::{blinn_phong, Attenuation, ShadingMode};
use crate::{gen_f32, Color, Intersection};
use glint_math::Vec3;
use rand::RngCore;

/// A parallelogram-shaped area light.
///
/// Each evaluation samples one uniformly random point on the surface and
/// then shades like a point light placed there; averaging several samples
/// per shading point produces penumbrae. The random source is injected by
/// the caller, so tests can seed it.
pub struct RectAreaLight {
    corner: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    attenuation: Attenuation,
    intensity: f32,
    color: Color,
}

impl RectAreaLight {
    /// Create a new area light from three corners of the parallelogram:
    /// `corner2` and `corner3` are the ends of the two edges leaving
    /// `corner1`.
    pub fn new(
        corner1: Vec3,
        corner2: Vec3,
        corner3: Vec3,
        attenuation: Attenuation,
        intensity: f32,
        color: Color,
    ) -> Self {
        Self {
            corner: corner1,
            edge1: corner2 - corner1,
            edge2: corner3 - corner1,
            attenuation,
            intensity,
            color,
        }
    }

    /// Sample a uniformly random point on the light surface.
    pub fn sample_point(&self, rng: &mut dyn RngCore) -> Vec3 {
        let u = gen_f32(rng);
        let v = gen_f32(rng);
        self.corner + u * self.edge1 + v * self.edge2
    }

    /// Unit direction of a shadow ray from `point` toward the sampled
    /// light position.
    pub fn shadow_ray_direction(&self, point: Vec3, sampled_point: Vec3) -> Vec3 {
        (sampled_point - point).normalize()
    }

    /// Diffuse and specular contribution with the light treated as a
    /// point source at `sampled_point`.
    pub fn shade(
        &self,
        ray_direction: Vec3,
        hit: &Intersection,
        sampled_point: Vec3,
        mode: ShadingMode,
    ) -> (Color, Color) {
        let to_light = sampled_point - hit.point;
        let distance = to_light.length();
        let light_direction = to_light / distance;

        let attenuated = self.attenuation.attenuate(self.intensity, distance);

        blinn_phong(light_direction, attenuated, self.color, ray_direction, hit, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn overhead_panel() -> RectAreaLight {
        // 2x2 panel centered on (0, 10, 0).
        RectAreaLight::new(
            Vec3::new(-1.0, 10.0, -1.0),
            Vec3::new(1.0, 10.0, -1.0),
            Vec3::new(-1.0, 10.0, 1.0),
            Attenuation::NONE,
            1.0,
            Color::ONE,
        )
    }

    #[test]
    fn test_samples_stay_on_surface() {
        let light = overhead_panel();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let p = light.sample_point(&mut rng);
            assert_eq!(p.y, 10.0);
            assert!((-1.0..=1.0).contains(&p.x));
            assert!((-1.0..=1.0).contains(&p.z));
        }
    }

    #[test]
    fn test_sample_mean_converges_to_centroid() {
        let light = overhead_panel();
        let mut rng = StdRng::seed_from_u64(42);

        let n = 20_000;
        let mean = (0..n)
            .map(|_| light.sample_point(&mut rng))
            .sum::<Vec3>()
            / n as f32;

        let centroid = Vec3::new(0.0, 10.0, 0.0);
        assert!(
            (mean - centroid).length() < 0.02,
            "sample mean {mean:?} should approach the centroid"
        );
    }

    #[test]
    fn test_averaged_shading_matches_centroid_contribution() {
        // Shading a point directly under the panel center, averaged over
        // many samples, converges to the contribution of a point light at
        // the centroid (statistical property of the uniform sampling).
        let light = overhead_panel();
        let material = Material::matte(Color::ONE);
        let ray_direction = Vec3::new(0.0, -1.0, 0.0);
        let hit = Intersection::new(1.0, Vec3::ZERO, Vec3::Y, ray_direction, &material, 0.0);

        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mut mean_diffuse = Color::ZERO;
        for _ in 0..n {
            let sample = light.sample_point(&mut rng);
            let (diffuse, _) = light.shade(ray_direction, &hit, sample, ShadingMode::BlinnPhong);
            mean_diffuse += diffuse;
        }
        mean_diffuse /= n as f32;

        let centroid = Vec3::new(0.0, 10.0, 0.0);
        let (centroid_diffuse, _) =
            light.shade(ray_direction, &hit, centroid, ShadingMode::BlinnPhong);

        assert!(
            (mean_diffuse - centroid_diffuse).length() < 0.01,
            "mean {mean_diffuse:?} vs centroid {centroid_diffuse:?}"
        );
    }
}
