use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::case::score_case;
use crate::scores::sort_key;

pub struct Stage2Score;

impl Stage2Score {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Score {
    fn name(&self) -> &'static str {
        "stage2_score"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut ordered: Vec<&String> = ctx.cases.keys().collect();
        ordered.sort_by_key(|id| sort_key(id));

        let mut results = Vec::with_capacity(ordered.len());
        for case_id in ordered {
            let files = &ctx.cases[case_id];
            let score = score_case(case_id, files, &ctx.params)?;
            match &score.error {
                Some(error) => {
                    warn!(case = %case_id, error = %error, "case_error");
                    ctx.warnings.push(format!("{}: {}", case_id, error));
                }
                None => info!(
                    case = %case_id,
                    intensity = score.intensity.unwrap_or(0) as u64,
                    distribution = score.distribution.unwrap_or(0) as u64,
                    composite = score.composite.unwrap_or(0) as u64,
                    "case_scored"
                ),
            }
            results.push(score);
        }

        ctx.scores = results;
        Ok(())
    }
}
