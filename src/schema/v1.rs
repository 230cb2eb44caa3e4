use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub input_dir: String,
    pub cases: u64,
    pub excluded: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerCaseRecord {
    pub case: String,
    pub tissue_type: String,
    pub mean_red: Option<f64>,
    pub positive_fraction: Option<f64>,
    pub mean_blue: Option<f64>,
    pub intensity_p95: Option<f64>,
    pub intensity: Option<u8>,
    pub distribution: Option<u8>,
    pub composite: Option<u8>,
    pub notes: String,
    pub has_composite: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreScoreV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub cases: Vec<PerCaseRecord>,
}

impl CoreScoreV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "corescore".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                input_dir: String::new(),
                cases: 0,
                excluded: 0,
            },
            cases: Vec::new(),
        }
    }
}
