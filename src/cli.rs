//! Command-line argument parsing for the scenario runner

use clap::Parser;
use std::path::PathBuf;

/// Replay a panel scenario and print the resulting stack
#[derive(Parser, Debug)]
#[command(name = "panelstack", version, about = "Replay panel stacking scenarios")]
pub struct CliArgs {
    /// Scenario YAML file
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Stacking config file (defaults to ~/.config/panelstack/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the final registry as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the stack after every step
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the effective stacking config to the user config file
    #[arg(long)]
    pub save_config: bool,
}
