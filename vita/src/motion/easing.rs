/// Cubic ease-out: fast start, soft landing.
pub(crate) fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Ease-out with a small overshoot past `1.0` before settling.
pub(crate) fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;

    let t = t.clamp(0.0, 1.0) - 1.0;
    1.0 + C3 * t.powi(3) + C1 * t.powi(2)
}
