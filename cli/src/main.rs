use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Batch ranked search over a fixed document collection", long_about = None)]
struct Args {
    /// Engine configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
    /// Search requests file
    #[arg(long, default_value = "requests.json")]
    requests: PathBuf,
    /// Output file for ranked answers
    #[arg(long, default_value = "answers.json")]
    answers: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    sift_cli::run(&args.config, &args.requests, &args.answers)
}
