use anyhow::Result;

use crate::discover::CaseFiles;
use crate::io::plane::{self, ChannelRole};
use crate::math::stats;
use crate::params::Params;
use crate::scores::buckets::{score_distribution, score_intensity};
use crate::scores::{CaseScore, tissue_type};

/// Normalized marker values at or below this floor are exact-zero border
/// or background pixels, not real low signal.
const TISSUE_FLOOR: f32 = 0.005;

const MISSING_RED: &str = "Missing red channel";
const LOW_TISSUE_NOTE: &str = "Low DAPI + low red; likely no tissue / edge.";

/// Score one case from its discovered files.
///
/// A missing red file degrades to an error record; a decode failure
/// propagates and aborts the run.
pub fn score_case(case_id: &str, files: &CaseFiles, params: &Params) -> Result<CaseScore> {
    let tissue = tissue_type(case_id);
    let has_composite = files.composite.is_some();

    let Some(red_path) = files.red.as_ref() else {
        return Ok(CaseScore {
            case_id: case_id.to_string(),
            tissue_type: tissue,
            mean_red: None,
            positive_fraction: None,
            mean_blue: None,
            intensity_p95: None,
            intensity: None,
            distribution: None,
            composite: None,
            note: String::new(),
            has_composite,
            error: Some(MISSING_RED.to_string()),
        });
    };

    let red = plane::load_plane(red_path, ChannelRole::Red)?;
    let blue = match files.blue.as_ref() {
        Some(path) => Some(plane::load_plane(path, ChannelRole::Blue)?),
        None => None,
    };

    let mut mask: Vec<f32> = red
        .values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > TISSUE_FLOOR)
        .collect();

    // The mean intentionally runs over all defined pixels, not just the
    // mask: pixels between zero and the floor still count toward it.
    let (mean_red, positive_fraction, intensity_p95) = if mask.is_empty() {
        (None, None, None)
    } else {
        let mean_red = stats::finite_mean(&red.values);
        let positives = mask
            .iter()
            .filter(|v| f64::from(**v) > params.red_positive_threshold)
            .count();
        let positive_fraction = positives as f64 / mask.len() as f64;
        let intensity_p95 = stats::percentile(&mut mask, 95.0);
        (mean_red, Some(positive_fraction), intensity_p95)
    };

    let mean_blue = blue.as_ref().and_then(|b| stats::finite_mean(&b.values));

    let intensity = score_intensity(intensity_p95, &params.intensity_thresholds);
    let distribution = score_distribution(positive_fraction, params.distribution_bins);
    let composite = intensity * distribution;

    let note = match (blue.as_ref(), mean_blue, positive_fraction) {
        (Some(_), Some(mb), Some(pf))
            if mb < params.blue_mean_tissue_min && pf < params.red_positive_fraction_min =>
        {
            LOW_TISSUE_NOTE.to_string()
        }
        _ => String::new(),
    };

    Ok(CaseScore {
        case_id: case_id.to_string(),
        tissue_type: tissue,
        mean_red,
        positive_fraction,
        mean_blue,
        intensity_p95,
        intensity: Some(intensity),
        distribution: Some(distribution),
        composite: Some(composite),
        note,
        has_composite,
        error: None,
    })
}
