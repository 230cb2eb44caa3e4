use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{CoreScoreV1, InputMeta, PerCaseRecord};
use crate::scores::CaseScore;

pub fn build_report(ctx: &Ctx) -> CoreScoreV1 {
    CoreScoreV1 {
        tool: "corescore".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta: InputMeta {
            input_dir: ctx.input.display().to_string(),
            cases: ctx.scores.len() as u64,
            excluded: ctx.excluded.len() as u64,
        },
        cases: ctx.scores.iter().map(per_case_record).collect(),
    }
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ctx.report)?;
    Ok(())
}

fn per_case_record(score: &CaseScore) -> PerCaseRecord {
    PerCaseRecord {
        case: score.case_id.clone(),
        tissue_type: score.tissue_type.as_str().to_string(),
        mean_red: score.mean_red.map(round4),
        positive_fraction: score.positive_fraction.map(round4),
        mean_blue: score.mean_blue.map(round4),
        intensity_p95: score.intensity_p95.map(round4),
        intensity: score.intensity,
        distribution: score.distribution,
        composite: score.composite,
        notes: score.note.clone(),
        has_composite: score.has_composite,
        error: score.error.clone(),
    }
}

// Presentation rounding only; comparisons upstream use full precision.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
