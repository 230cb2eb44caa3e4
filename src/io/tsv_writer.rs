use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "case\ttissue_type\tmean_red\tpositive_fraction\tmean_blue\tintensity_p95\tintensity\tdistribution\tcomposite\tnotes\thas_composite\terror"
    )?;
    for score in &ctx.scores {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            score.case_id,
            score.tissue_type.as_str(),
            fmt_f64(score.mean_red),
            fmt_f64(score.positive_fraction),
            fmt_f64(score.mean_blue),
            fmt_f64(score.intensity_p95),
            fmt_u8(score.intensity),
            fmt_u8(score.distribution),
            fmt_u8(score.composite),
            score.note,
            score.has_composite,
            score.error.as_deref().unwrap_or("")
        )?;
    }

    Ok(())
}

fn fmt_f64(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_default()
}

fn fmt_u8(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
