//! Scalar helpers exposed to sketches.

use rand::Rng;

/// Linearly remaps `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// With `clamp`, the result is limited to `[min(out_lo, out_hi), max(out_lo, out_hi)]`
/// whichever way the output range points, and an undefined mapping (zero-width
/// input range hit exactly) yields `out_lo`. Without `clamp` a zero-width input
/// range yields a non-finite result rather than an error.
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32, clamp: bool) -> f32 {
    let t = (value - in_lo) / (in_hi - in_lo);
    let mapped = out_lo + t * (out_hi - out_lo);

    if !clamp {
        return mapped;
    }

    let mapped = if mapped.is_nan() { out_lo } else { mapped };
    // `f32::clamp` panics on NaN bounds; `max`/`min` ignore a NaN operand.
    mapped.max(out_lo.min(out_hi)).min(out_lo.max(out_hi))
}

/// Uniform sample in `[low, high]` from the thread-local generator.
///
/// Not seeded; use [`random_uniform_with`] when reproducibility matters.
#[inline]
pub fn random_uniform(low: f32, high: f32) -> f32 {
    random_uniform_with(&mut rand::thread_rng(), low, high)
}

/// Uniform sample in `[low, high]` drawn from `rng`.
///
/// Reversed bounds are swapped. An empty or non-finite range returns `low`.
pub fn random_uniform_with<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
        return low;
    }
    rng.gen_range(lo..=hi)
}
