use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use corescore::cli::{Cli, Commands};
use corescore::ctx::Ctx;
use corescore::io;
use corescore::params;
use corescore::pipeline::Pipeline;
use corescore::pipeline::stage0_scaffold::Stage0Scaffold;
use corescore::pipeline::stage1_discover::Stage1Discover;
use corescore::pipeline::stage2_score::Stage2Score;
use corescore::pipeline::stage3_output::Stage3Output;
use corescore::scores;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let params = params::load_params(&args.params)?;
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                params,
                args.exclude,
                args.json,
                env!("CARGO_PKG_VERSION"),
            );

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Discover::new()),
                Box::new(Stage2Score::new()),
                Box::new(Stage3Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx);
        }
        Commands::Validate(args) => {
            let params = params::load_params(&args.params)?;
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                params,
                args.exclude,
                false,
                env!("CARGO_PKG_VERSION"),
            );

            let pipeline = Pipeline::new(vec![Box::new(Stage1Discover::new())]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) {
    let summary = io::summary::format_summary(ctx);
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn print_validate_summary(ctx: &Ctx) {
    println!("corescore validate ok");
    println!("cases: {}", ctx.cases.len());

    let mut ordered: Vec<&String> = ctx.cases.keys().collect();
    ordered.sort_by_key(|id| scores::sort_key(id));
    for case_id in ordered {
        let files = &ctx.cases[case_id];
        println!(
            "{}\tred={}\tblue={}\tcomposite={}",
            case_id,
            mark(files.red.is_some()),
            mark(files.blue.is_some()),
            mark(files.composite.is_some())
        );
    }
}

fn mark(present: bool) -> &'static str {
    if present { "yes" } else { "no" }
}
