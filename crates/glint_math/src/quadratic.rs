/// Solve `a*t^2 + b*t + c = 0` for real roots.
///
/// Returns the roots in ascending order, or `None` when the discriminant
/// is negative. Uses the numerically stable formulation that picks the
/// sign of `q` from `b` to avoid catastrophic cancellation when the roots
/// differ greatly in magnitude.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - sqrt_d)
    } else {
        -0.5 * (b + sqrt_d)
    };

    let t0 = q / a;
    let t1 = c / q;

    if t0 <= t1 {
        Some((t0, t1))
    } else {
        Some((t1, t0))
    }
}
