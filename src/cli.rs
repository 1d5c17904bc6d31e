use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anticipa", version, about = "Coffee plot weather advisories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the forecast and print the advisory (default)
    Advise {
        /// Override the plot latitude
        #[arg(long)]
        lat: Option<f64>,

        /// Override the plot longitude
        #[arg(long)]
        lon: Option<f64>,

        /// Emit the advisory as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Evaluate a single rule by id instead of the full advisory
        #[arg(long)]
        rule: Option<String>,
    },
    /// Run interactive setup
    Init,
    /// Validate config and test the weather provider connection
    Check,
}
