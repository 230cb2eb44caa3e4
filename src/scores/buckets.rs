use crate::params::IntensityThresholds;

/// Intensity ordinal 0-3 from the p95 intensity measure.
pub fn score_intensity(measure: Option<f64>, thr: &IntensityThresholds) -> u8 {
    bucket(measure, [thr.none, thr.weak, thr.moder])
}

/// Distribution ordinal 0-3 from the positive-area fraction.
pub fn score_distribution(pos_frac: Option<f64>, bins: [f64; 3]) -> u8 {
    bucket(pos_frac, bins)
}

// An undefined measure (empty tissue mask) buckets to 0. Letting NaN fall
// through the comparison chain would land on 3 and report an empty core as
// maximal.
fn bucket(value: Option<f64>, cuts: [f64; 3]) -> u8 {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return 0,
    };
    if v < cuts[0] {
        0
    } else if v < cuts[1] {
        1
    } else if v < cuts[2] {
        2
    } else {
        3
    }
}
