use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::discover::CaseFiles;
use crate::params::Params;
use crate::schema::v1::CoreScoreV1;
use crate::scores::CaseScore;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub tsv_path: PathBuf,
    pub json_path: PathBuf,
    pub descriptions_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub params: Params,
    pub exclude_file: Option<PathBuf>,
    pub write_json: bool,
    pub excluded: BTreeSet<String>,
    pub cases: BTreeMap<String, CaseFiles>,
    pub scores: Vec<CaseScore>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: CoreScoreV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        params: Params,
        exclude_file: Option<PathBuf>,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let tsv_path = out_dir.join("corescore.tsv");
        let json_path = out_dir.join("corescore.json");
        let descriptions_path = out_dir.join("descriptions.txt");
        let report = CoreScoreV1::empty(tool_version);
        Self {
            input,
            params,
            exclude_file,
            write_json,
            excluded: BTreeSet::new(),
            cases: BTreeMap::new(),
            scores: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                tsv_path,
                json_path,
                descriptions_path,
            },
            report,
        }
    }
}
