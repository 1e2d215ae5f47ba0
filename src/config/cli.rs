use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "json-hierarchy")]
#[command(about = "Round-trips a person and their modes of transportation through JSON")]
pub struct CliConfig {
    /// Decode this JSON document instead of the built-in sample person
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Spaces per level in the encoded JSON
    #[arg(long)]
    pub json_indent: Option<usize>,

    /// Spaces per level in the printed hierarchy
    #[arg(long)]
    pub tree_indent: Option<usize>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
