//! Scalar helpers shared by the control and telemetry models.

/// Linear interpolation from `a` to `b`. `t` is clamped to [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Recovers the interpolation parameter of `value` between `a` and `b`.
///
/// Unclamped: values outside the endpoints map outside [0, 1]. A degenerate
/// span (`a == b`) yields 0.
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    (value - a) / span
}

/// Sign with `sign(0.0) == sign(-0.0) == 1.0`.
pub fn sign(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { -1.0 }
}

/// Clamp into [-1, 1], mapping NaN and infinities to 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Zero for non-finite samples, identity otherwise.
pub fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
