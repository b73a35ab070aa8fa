use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// Rays represent the half-line `origin + t * direction` for t >= 0.
/// The direction is not required to be normalized; intersection code
/// parameterizes distances in units of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
