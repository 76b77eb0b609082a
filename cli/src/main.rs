//! Gym Membership CLI - price and confirm a subscription.
//!
//! Usage:
//!   gym-membership
//!   gym-membership --plan Basic --feature "Diet Plan" --members 2
//!   gym-membership --catalog ./catalog.json --plan Family --members 4 --yes
//!
//! Exits with status 0 when the subscription is confirmed, 1 otherwise.

mod app;
mod cli;
mod display;
mod prompt;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = app::load_catalog(cli.catalog.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let outcome = app::run(&cli, &catalog, &mut input, &mut out)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
