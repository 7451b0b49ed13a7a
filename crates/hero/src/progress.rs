//! Integrates signed input deltas into the bounded expansion progress value.

/// Fully collapsed progress.
pub const PROGRESS_MIN: f64 = 0.0;
/// Fully expanded progress.
pub const PROGRESS_MAX: f64 = 1.0;

/// Advances `current` by `raw_delta` scaled with a direction-dependent gain,
/// clamped hard to `[0, 1]`. No overshoot, no bounce.
///
/// Positive deltas use `gain_expanding`, negative deltas `gain_collapsing`.
/// Zero deltas are idempotent, and non-finite deltas are treated as a no-op
/// clamp rather than a fault.
pub fn accumulate(
    current: f64,
    raw_delta: f64,
    gain_expanding: f64,
    gain_collapsing: f64,
) -> f64 {
    if !current.is_finite() {
        return PROGRESS_MIN;
    }
    if !raw_delta.is_finite() || raw_delta == 0.0 {
        return clamp01(current);
    }

    let gain = if raw_delta > 0.0 {
        gain_expanding
    } else {
        gain_collapsing
    };

    clamp01(current + raw_delta * gain)
}

fn clamp01(value: f64) -> f64 {
    value.clamp(PROGRESS_MIN, PROGRESS_MAX)
}
