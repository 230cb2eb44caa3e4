use std::collections::BTreeSet;

use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::discover;
use crate::io::exclude;
use crate::pipeline::Stage;

pub struct Stage1Discover;

impl Stage1Discover {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Discover {
    fn name(&self) -> &'static str {
        "stage1_discover"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut excluded: BTreeSet<String> = ctx.params.exclude_cases.iter().cloned().collect();
        if let Some(path) = &ctx.exclude_file {
            if path.exists() {
                let extra = exclude::read_exclusions(path)?;
                info!(
                    exclude_file = %path.display(),
                    ids = extra.len(),
                    "exclusion_list_loaded"
                );
                excluded.extend(extra);
            }
        }

        let cases = discover::discover_cases(&ctx.input, &ctx.params, &excluded)?;
        if cases.is_empty() {
            bail!(
                "no cases found in {}; check naming (e.g. 'A1 red.tif', 'A1 blue.tif')",
                ctx.input.display()
            );
        }

        info!(
            cases = cases.len(),
            excluded = excluded.len(),
            "discovery_complete"
        );

        ctx.excluded = excluded;
        ctx.cases = cases;
        Ok(())
    }
}
