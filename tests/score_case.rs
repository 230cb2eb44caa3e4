use std::fs;
use std::path::PathBuf;

use corescore::discover::CaseFiles;
use corescore::params::{Params, load_params};
use corescore::scores::case::score_case;
use corescore::scores::{TissueType, sort_key, tissue_type};
use image::{GrayImage, Luma};
use tempfile::TempDir;

const PARAMS: &str = r#"
case_regex: '([A-H]\d+)'
modality_aliases:
  red: [red]
  blue: [blue]
  composite: [merge]
intensity_thresholds:
  none: 0.1
  weak: 0.3
  moder: 0.5
red_positive_fraction_threshold: 0.15
distribution_bins: [0.1, 0.3, 0.5]
blue_mean_tissue_min: 0.05
red_positive_fraction_min: 0.01
"#;

fn params(tmp: &TempDir) -> Params {
    let path = tmp.path().join("params.yaml");
    fs::write(&path, PARAMS).unwrap();
    load_params(&path).unwrap()
}

fn save_gray(tmp: &TempDir, name: &str, value: u8) -> PathBuf {
    let path = tmp.path().join(name);
    GrayImage::from_pixel(8, 8, Luma([value])).save(&path).unwrap();
    path
}

#[test]
fn missing_red_channel_degrades_to_error_record() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let files = CaseFiles {
        red: None,
        blue: Some(save_gray(&tmp, "A1 blue.png", 200)),
        composite: None,
    };

    let score = score_case("A1", &files, &params).unwrap();
    assert_eq!(score.error.as_deref(), Some("Missing red channel"));
    assert_eq!(score.tissue_type, TissueType::Tnbc);
    assert!(score.intensity.is_none());
    assert!(score.distribution.is_none());
    assert!(score.composite.is_none());
    assert!(score.mean_red.is_none());
}

#[test]
fn black_red_white_blue_scores_zero_without_note() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let files = CaseFiles {
        red: Some(save_gray(&tmp, "A1 red.png", 0)),
        blue: Some(save_gray(&tmp, "A1 blue.png", 255)),
        composite: None,
    };

    let score = score_case("A1", &files, &params).unwrap();
    assert!(score.error.is_none());
    assert_eq!(score.intensity, Some(0));
    assert_eq!(score.distribution, Some(0));
    assert_eq!(score.composite, Some(0));
    // Empty tissue mask: every derived statistic is absent.
    assert!(score.mean_red.is_none());
    assert!(score.positive_fraction.is_none());
    assert!(score.intensity_p95.is_none());
    // Counterstain mean is above its minimum, so no advisory note.
    assert!((score.mean_blue.unwrap() - 1.0).abs() < 1e-6);
    assert!(score.note.is_empty());
}

#[test]
fn bright_half_core_scores_maximal() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let path = tmp.path().join("A2 red.png");
    GrayImage::from_fn(8, 8, |x, _| if x < 4 { Luma([204]) } else { Luma([0]) })
        .save(&path)
        .unwrap();
    let files = CaseFiles {
        red: Some(path),
        blue: None,
        composite: None,
    };

    let score = score_case("A2", &files, &params).unwrap();
    // Mask holds the 32 bright pixels; the mean still runs over all 64.
    assert!((score.mean_red.unwrap() - 0.4).abs() < 1e-3);
    assert!((score.positive_fraction.unwrap() - 1.0).abs() < 1e-9);
    assert!((score.intensity_p95.unwrap() - 0.8).abs() < 1e-3);
    assert_eq!(score.intensity, Some(3));
    assert_eq!(score.distribution, Some(3));
    assert_eq!(score.composite, Some(9));
    // No counterstain file: its mean is absent and no note can fire.
    assert!(score.mean_blue.is_none());
    assert!(score.note.is_empty());
}

#[test]
fn low_blue_and_low_red_attach_advisory_note() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let files = CaseFiles {
        red: Some(save_gray(&tmp, "A3 red.png", 10)),
        blue: Some(save_gray(&tmp, "A3 blue.png", 0)),
        composite: None,
    };

    let score = score_case("A3", &files, &params).unwrap();
    assert_eq!(score.note, "Low DAPI + low red; likely no tissue / edge.");
    assert_eq!(score.intensity, Some(0));
    assert_eq!(score.distribution, Some(0));
}

#[test]
fn empty_mask_never_fires_note_even_with_low_blue() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let files = CaseFiles {
        red: Some(save_gray(&tmp, "A4 red.png", 0)),
        blue: Some(save_gray(&tmp, "A4 blue.png", 0)),
        composite: None,
    };

    let score = score_case("A4", &files, &params).unwrap();
    // Counterstain mean is below its minimum, but the positive fraction
    // is absent (empty mask), so the note stays off.
    assert!(score.mean_blue.unwrap() < 0.05);
    assert!(score.positive_fraction.is_none());
    assert!(score.note.is_empty());
    assert_eq!(score.composite, Some(0));
}

#[test]
fn composite_preview_sets_flag_only() {
    let tmp = TempDir::new().unwrap();
    let params = params(&tmp);
    let files = CaseFiles {
        red: Some(save_gray(&tmp, "A1 red.png", 0)),
        blue: None,
        composite: Some(save_gray(&tmp, "A1 dapi.png", 42)),
    };

    let score = score_case("A1", &files, &params).unwrap();
    assert!(score.has_composite);
    assert!(score.error.is_none());
}

#[test]
fn tissue_type_rows_one_to_four_are_tnbc() {
    assert_eq!(tissue_type("A1"), TissueType::Tnbc);
    assert_eq!(tissue_type("A4"), TissueType::Tnbc);
    assert_eq!(tissue_type("A5"), TissueType::Benign);
    assert_eq!(tissue_type("A10"), TissueType::Benign);
    assert_eq!(tissue_type("B7"), TissueType::Benign);
}

#[test]
fn tissue_type_without_numeric_suffix_is_benign() {
    assert_eq!(tissue_type("A"), TissueType::Benign);
    assert_eq!(tissue_type("AX"), TissueType::Benign);
}

#[test]
fn cases_sort_by_row_number_then_letter() {
    let mut ids = vec!["B2", "A10", "A2", "A1"];
    ids.sort_by_key(|id| sort_key(id));
    assert_eq!(ids, vec!["A1", "A2", "B2", "A10"]);
}
