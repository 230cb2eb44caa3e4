//! Pixel statistics primitives.
//!
//! Note: `percentile` may reorder the input slice.

/// Arithmetic mean over finite samples, skipping NaN and infinities.
/// Returns `None` when no finite sample exists.
pub fn finite_mean(values: &[f32]) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum += v as f64;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Linear-interpolated percentile of a finite sample set.
/// `p` is expressed in percent (0..=100).
pub fn percentile(values: &mut [f32], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = values.len();
    if n == 1 {
        return Some(values[0] as f64);
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    let a = values[lo] as f64;
    let b = values[hi] as f64;
    Some(a + (b - a) * frac)
}
