use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "bureaulog")]
#[command(about = "Check bureau agent lifecycles in server logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log files, read as one stream in the given order ("-" or none for stdin)
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Print every agent's path and match while checking")]
    pub verbose: bool,

    #[arg(short, long, help = "Print created/started/failed/orphaned totals")]
    pub summary: bool,

    #[arg(long)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Disable colored diagnostics")]
    pub no_color: bool,

    #[arg(long, help = "Logger name the bureau registry writes under")]
    pub logger: Option<String>,

    #[arg(long, help = "Configuration file (default: BUREAULOG_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<LogLevel>,
}
