pub mod buckets;
pub mod case;

/// Fixed TMA layout convention: numeric rows 1-4 hold tumor cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TissueType {
    Tnbc,
    Benign,
}

impl TissueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tnbc => "TNBC",
            Self::Benign => "Benign",
        }
    }
}

/// Immutable scoring result for one case. Error records carry only the
/// identifier, tissue type, and the error reason.
#[derive(Debug, Clone)]
pub struct CaseScore {
    pub case_id: String,
    pub tissue_type: TissueType,
    pub mean_red: Option<f64>,
    pub positive_fraction: Option<f64>,
    pub mean_blue: Option<f64>,
    pub intensity_p95: Option<f64>,
    pub intensity: Option<u8>,
    pub distribution: Option<u8>,
    pub composite: Option<u8>,
    pub note: String,
    pub has_composite: bool,
    pub error: Option<String>,
}

/// Classify a case by the numeric suffix after the leading row letter.
pub fn tissue_type(case_id: &str) -> TissueType {
    let row = case_id.get(1..).and_then(|s| s.parse::<u32>().ok());
    match row {
        Some(r) if (1..=4).contains(&r) => TissueType::Tnbc,
        _ => TissueType::Benign,
    }
}

/// Deterministic batch ordering: ascending numeric portion, tie-broken by
/// the leading letter. Ids with a non-numeric suffix sort last.
pub fn sort_key(case_id: &str) -> (u32, char) {
    let row = case_id
        .get(1..)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(u32::MAX);
    let letter = case_id.chars().next().unwrap_or('\u{0}');
    (row, letter)
}
