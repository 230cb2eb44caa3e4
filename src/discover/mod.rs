use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::params::Params;

const IMAGE_EXTENSIONS: [&str; 5] = ["tif", "tiff", "png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Red,
    Blue,
    Composite,
}

impl Modality {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "red" | "marker" => Some(Self::Red),
            "blue" | "counterstain" => Some(Self::Blue),
            "composite" | "merge" => Some(Self::Composite),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Composite => "composite",
        }
    }
}

/// Files discovered for one case, at most one per modality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFiles {
    pub red: Option<PathBuf>,
    pub blue: Option<PathBuf>,
    pub composite: Option<PathBuf>,
}

impl CaseFiles {
    // Last write wins; duplicate assignment is the documented resolution
    // policy for folders holding re-exports of the same core.
    pub fn assign(&mut self, modality: Modality, path: PathBuf) {
        match modality {
            Modality::Red => self.red = Some(path),
            Modality::Blue => self.blue = Some(path),
            Modality::Composite => self.composite = Some(path),
        }
    }
}

/// Scan a folder and group image files into cases.
///
/// The case id comes from the first capture group of the configured
/// pattern applied to the filename stem (upper-cased); the modality from
/// the first matching whole-word alias, in the order the parameter file
/// lists modalities. Files with no id match, an excluded id, or no
/// modality match are skipped. Entries are visited in lexicographic
/// filename order, so duplicate case+modality assignments resolve
/// deterministically.
pub fn discover_cases(
    dir: &Path,
    params: &Params,
    excluded: &BTreeSet<String>,
) -> Result<BTreeMap<String, CaseFiles>> {
    let matchers = build_alias_matchers(params)?;
    let dapi_fallback = Regex::new(r"\bdapi\b")?;

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read input folder {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();

    let mut cases: BTreeMap<String, CaseFiles> = BTreeMap::new();
    for path in entries {
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(caps) = params.case_regex.captures(stem) else {
            debug!(file = %path.display(), "no case id match, skipped");
            continue;
        };
        let Some(id) = caps.get(1) else {
            continue;
        };
        let case_id = id.as_str().to_ascii_uppercase();
        if excluded.contains(&case_id) {
            debug!(case = %case_id, file = %path.display(), "excluded case, skipped");
            continue;
        }
        let Some(modality) = detect_modality(stem, &matchers, &dapi_fallback) else {
            debug!(file = %path.display(), "no modality match, skipped");
            continue;
        };
        cases.entry(case_id).or_default().assign(modality, path);
    }

    Ok(cases)
}

fn detect_modality(
    stem: &str,
    matchers: &[(Modality, Vec<Regex>)],
    dapi_fallback: &Regex,
) -> Option<Modality> {
    let low = stem.to_lowercase();
    for (modality, patterns) in matchers {
        for pattern in patterns {
            if pattern.is_match(&low) {
                return Some(*modality);
            }
        }
    }
    // Many labs save merged previews as "... dapi.tif".
    if dapi_fallback.is_match(&low) {
        return Some(Modality::Composite);
    }
    None
}

fn build_alias_matchers(params: &Params) -> Result<Vec<(Modality, Vec<Regex>)>> {
    let mut matchers = Vec::with_capacity(params.modality_aliases.len());
    for (modality, aliases) in &params.modality_aliases {
        let mut patterns = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(alias)))
                .with_context(|| format!("invalid modality alias '{}'", alias))?;
            patterns.push(pattern);
        }
        matchers.push((*modality, patterns));
    }
    Ok(matchers)
}
