use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "corescore", version, about = "Per-core scorer for red biomarker + DAPI images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, short = 'i', help = "Folder with per-core images")]
    pub input: PathBuf,

    #[arg(
        long,
        short = 'p',
        default_value = "params.yaml",
        help = "YAML parameter file"
    )]
    pub params: PathBuf,

    #[arg(long, help = "Output folder for scores and reports")]
    pub out: PathBuf,

    #[arg(long, help = "Optional text file with case IDs to exclude (one per line)")]
    pub exclude: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Also write a JSON report")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, short = 'i', help = "Folder with per-core images")]
    pub input: PathBuf,

    #[arg(
        long,
        short = 'p',
        default_value = "params.yaml",
        help = "YAML parameter file"
    )]
    pub params: PathBuf,

    #[arg(long, help = "Optional text file with case IDs to exclude (one per line)")]
    pub exclude: Option<PathBuf>,
}
