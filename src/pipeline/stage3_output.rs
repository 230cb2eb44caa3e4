use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{descriptions, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage3Output;

impl Stage3Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Output {
    fn name(&self) -> &'static str {
        "stage3_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx);
        ctx.report = report;

        tsv_writer::write_tsv(&ctx.output.tsv_path, ctx)?;
        descriptions::write_descriptions(&ctx.output.descriptions_path, ctx)?;
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }

        info!("stage3_output_ready");
        Ok(())
    }
}
