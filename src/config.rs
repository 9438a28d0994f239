//! Command-line configuration

use clap::Parser;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TRACE_LOG_NAME: &str = "quotty_trace.jsonl";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quotty", version, about = "A random quote widget for the terminal")]
pub struct AppConfig {
    /// Seed the quote picker for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON trace log
    #[arg(long)]
    pub logs: bool,

    /// Disable all logging (overrides --logs)
    #[arg(long)]
    pub no_logs: bool,

    /// Trace log location (defaults to the temp directory)
    #[arg(long, env = "QUOTTY_TRACE_LOG", value_name = "PATH")]
    pub trace_log: Option<PathBuf>,
}

impl AppConfig {
    #[inline]
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }

    pub fn trace_log_path(&self) -> PathBuf {
        self.trace_log
            .clone()
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_TRACE_LOG_NAME))
    }
}
