//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "gym-membership")]
#[command(version)]
#[command(about = "Price and confirm a gym membership subscription", long_about = None)]
pub struct Cli {
    /// Catalog JSON file (uses the built-in catalog when omitted)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Membership plan (prompted for when omitted)
    #[arg(short, long)]
    pub plan: Option<String>,

    /// Additional feature, repeat for several (prompted for when no plan is given)
    #[arg(short, long = "feature")]
    pub features: Vec<String>,

    /// Number of members signing up (prompted for when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub members: Option<u32>,

    /// Confirm the subscription without asking
    #[arg(short, long, default_value = "false")]
    pub yes: bool,
}
