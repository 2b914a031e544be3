/// Highest repetition count for which the Brzycki formula is defined.
pub const MAX_REPS: u32 = 36;

/// Rounds to the nearest half unit, the smallest plate increment.
#[must_use]
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

#[must_use]
pub fn clamp_reps(reps: u32) -> u32 {
    reps.clamp(1, MAX_REPS)
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Maps a result that overflowed to the `0` sentinel.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
