use std::path::PathBuf;

use clap::Parser;

/// snapdesk: replay a window-manager script and print the resulting layout.
#[derive(Parser, Debug)]
#[command(name = "snapdesk", version, about)]
pub struct Args {
    /// JSON script of pointer and lifecycle steps.
    pub script: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "snapdesk=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the report on a single line.
    #[arg(long)]
    pub compact: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
