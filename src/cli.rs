//! CLI definition using clap.

use clap::Parser;
use std::path::PathBuf;

/// Armory - an interactive, categorized launcher for security tools
#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog file to use instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Skip the authentication gate (demo sessions)
    #[arg(long)]
    pub no_auth: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
