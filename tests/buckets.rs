use corescore::params::IntensityThresholds;
use corescore::scores::buckets::{score_distribution, score_intensity};

fn thresholds() -> IntensityThresholds {
    IntensityThresholds {
        none: 0.1,
        weak: 0.3,
        moder: 0.5,
    }
}

const BINS: [f64; 3] = [0.1, 0.3, 0.5];

#[test]
fn intensity_step_function() {
    let thr = thresholds();
    assert_eq!(score_intensity(Some(0.05), &thr), 0);
    assert_eq!(score_intensity(Some(0.15), &thr), 1);
    assert_eq!(score_intensity(Some(0.35), &thr), 2);
    assert_eq!(score_intensity(Some(0.6), &thr), 3);
}

#[test]
fn intensity_boundaries_round_up() {
    let thr = thresholds();
    assert_eq!(score_intensity(Some(0.1), &thr), 1);
    assert_eq!(score_intensity(Some(0.3), &thr), 2);
    assert_eq!(score_intensity(Some(0.5), &thr), 3);
}

#[test]
fn distribution_step_function() {
    assert_eq!(score_distribution(Some(0.05), BINS), 0);
    assert_eq!(score_distribution(Some(0.15), BINS), 1);
    assert_eq!(score_distribution(Some(0.35), BINS), 2);
    assert_eq!(score_distribution(Some(0.6), BINS), 3);
}

#[test]
fn intensity_monotonic_in_measure() {
    let thr = thresholds();
    let mut last = 0;
    for i in 0..100 {
        let measure = i as f64 / 100.0;
        let score = score_intensity(Some(measure), &thr);
        assert!(score >= last);
        last = score;
    }
}

#[test]
fn undefined_buckets_to_zero() {
    let thr = thresholds();
    assert_eq!(score_intensity(None, &thr), 0);
    assert_eq!(score_distribution(None, BINS), 0);
    assert_eq!(score_intensity(Some(f64::NAN), &thr), 0);
    assert_eq!(score_distribution(Some(f64::NAN), BINS), 0);
}

#[test]
fn composite_product_table() {
    let thr = thresholds();
    // Measures chosen to land on each ordinal in turn.
    let measures = [0.05, 0.15, 0.35, 0.6];
    let allowed = [0u8, 1, 2, 3, 4, 6, 9];
    for (i, m_i) in measures.iter().enumerate() {
        for (d, m_d) in measures.iter().enumerate() {
            let intensity = score_intensity(Some(*m_i), &thr);
            let distribution = score_distribution(Some(*m_d), BINS);
            assert_eq!(intensity as usize, i);
            assert_eq!(distribution as usize, d);
            let composite = intensity * distribution;
            assert!(allowed.contains(&composite));
            assert!(composite != 5 && composite != 7 && composite != 8);
        }
    }
}
