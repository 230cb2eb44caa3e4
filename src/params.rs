use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::discover::Modality;

/// Ascending intensity cut points: below `none` scores 0, below `weak`
/// scores 1, below `moder` scores 2, else 3.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IntensityThresholds {
    pub none: f64,
    pub weak: f64,
    pub moder: f64,
}

#[derive(Debug, Deserialize)]
struct RawParams {
    case_regex: String,
    modality_aliases: serde_yaml::Mapping,
    intensity_thresholds: IntensityThresholds,
    red_positive_fraction_threshold: f64,
    distribution_bins: Vec<f64>,
    blue_mean_tissue_min: f64,
    red_positive_fraction_min: f64,
    #[serde(default)]
    exclude_cases: Vec<String>,
}

/// Validated scoring configuration, passed by reference into discovery and
/// scoring. Alias order follows the parameter file (first match wins).
#[derive(Debug, Clone)]
pub struct Params {
    pub case_regex: Regex,
    pub modality_aliases: Vec<(Modality, Vec<String>)>,
    pub intensity_thresholds: IntensityThresholds,
    pub red_positive_threshold: f64,
    pub distribution_bins: [f64; 3],
    pub blue_mean_tissue_min: f64,
    pub red_positive_fraction_min: f64,
    pub exclude_cases: Vec<String>,
}

pub fn load_params(path: &Path) -> Result<Params> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file {}", path.display()))?;
    let raw: RawParams = serde_yaml::from_str(&content)
        .with_context(|| format!("malformed parameter file {}", path.display()))?;
    validate(raw)
}

fn validate(raw: RawParams) -> Result<Params> {
    let case_regex = RegexBuilder::new(&raw.case_regex)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("invalid case_regex '{}'", raw.case_regex))?;
    if case_regex.captures_len() < 2 {
        bail!(
            "case_regex '{}' must contain one capturing group",
            raw.case_regex
        );
    }

    let mut modality_aliases: Vec<(Modality, Vec<String>)> = Vec::new();
    for (key, value) in &raw.modality_aliases {
        let key = key
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("modality_aliases keys must be strings"))?;
        let modality = Modality::from_key(key)
            .ok_or_else(|| anyhow::anyhow!("unknown modality '{}' in modality_aliases", key))?;
        if modality_aliases.iter().any(|(m, _)| *m == modality) {
            bail!("duplicate modality '{}' in modality_aliases", key);
        }
        let seq = value
            .as_sequence()
            .ok_or_else(|| anyhow::anyhow!("aliases for modality '{}' must be a list", key))?;
        let mut aliases = Vec::with_capacity(seq.len());
        for item in seq {
            let alias = item.as_str().ok_or_else(|| {
                anyhow::anyhow!("aliases for modality '{}' must be strings", key)
            })?;
            let alias = alias.trim().to_lowercase();
            if alias.is_empty() {
                bail!("empty alias for modality '{}'", key);
            }
            aliases.push(alias);
        }
        if aliases.is_empty() {
            bail!("modality '{}' lists no aliases", key);
        }
        modality_aliases.push((modality, aliases));
    }
    if modality_aliases.is_empty() {
        bail!("modality_aliases must not be empty");
    }

    let thr = raw.intensity_thresholds;
    if !(thr.none < thr.weak && thr.weak < thr.moder) {
        bail!("intensity_thresholds must be ascending (none < weak < moder)");
    }

    if raw.distribution_bins.len() != 3 {
        bail!(
            "distribution_bins must contain exactly 3 values, got {}",
            raw.distribution_bins.len()
        );
    }
    let bins = [
        raw.distribution_bins[0],
        raw.distribution_bins[1],
        raw.distribution_bins[2],
    ];
    if !(bins[0] < bins[1] && bins[1] < bins[2]) {
        bail!("distribution_bins must be ascending");
    }

    let exclude_cases = raw
        .exclude_cases
        .iter()
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(Params {
        case_regex,
        modality_aliases,
        intensity_thresholds: thr,
        red_positive_threshold: raw.red_positive_fraction_threshold,
        distribution_bins: bins,
        blue_mean_tissue_min: raw.blue_mean_tissue_min,
        red_positive_fraction_min: raw.red_positive_fraction_min,
        exclude_cases,
    })
}
