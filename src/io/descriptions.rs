use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn intensity_text(intensity: u8) -> &'static str {
    match intensity {
        0 => "no staining",
        1 => "weak staining",
        2 => "moderate staining",
        _ => "strong staining",
    }
}

pub fn distribution_text(distribution: u8) -> &'static str {
    match distribution {
        0 => "no positive area",
        1 => "focal staining (<10% of tissue)",
        2 => "regional staining (10-50% of tissue)",
        _ => "diffuse staining (>50% of tissue)",
    }
}

/// Write the per-case free-text description blocks.
pub fn write_descriptions(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    for score in &ctx.scores {
        if let Some(error) = &score.error {
            writeln!(
                w,
                "Case {} ({})\n* Error: {}\n",
                score.case_id,
                score.tissue_type.as_str(),
                error
            )?;
            continue;
        }
        let intensity = score.intensity.unwrap_or(0);
        let distribution = score.distribution.unwrap_or(0);
        let composite = score.composite.unwrap_or(0);
        writeln!(
            w,
            "Case {} ({})\n* Observation: Tissue core with {}, showing {}.\n* Intensity: {}.\n* Distribution: {}.\n* Composite Score: {}.\n",
            score.case_id,
            score.tissue_type.as_str(),
            intensity_text(intensity),
            distribution_text(distribution),
            intensity,
            distribution,
            composite
        )?;
    }

    Ok(())
}
