use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manylicenses")]
#[command(about = "Check dependency licenses from a `yarn licenses list --json` stream against an approved list")]
#[command(version)]
#[command(after_help = "Exit status: 0 on success, 1 on unapproved licenses or unreadable input, 2 on unrecognized options.")]
pub struct Cli {
    /// Print the license counts on success
    #[arg(long)]
    pub counts: bool,

    /// Print a CSV line for every package that is not excluded
    #[arg(long)]
    pub csv: bool,

    /// Approved SPDX identifiers
    #[arg(long, value_name = "ID", value_delimiter = ',', action = ArgAction::Append)]
    pub approve: Vec<String>,

    /// Package names to skip
    #[arg(long, value_name = "NAME", value_delimiter = ',', action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Package name prefixes to skip
    #[arg(long, value_name = "PREFIX", value_delimiter = ',', action = ArgAction::Append)]
    pub exclude_prefix: Vec<String>,

    /// Do not fail on unapproved licenses
    #[arg(long)]
    pub no_verify: bool,

    /// Read the inventory from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding package.json and node_modules (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
