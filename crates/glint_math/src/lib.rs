// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod quadratic;
mod ray;
pub use quadratic::solve_quadratic;
pub use ray::Ray;
