//! Optional JSON trace log.
//!
//! The terminal belongs to the TUI, so events go to a file and only when
//! `--logs` is given.

use crate::config::AppConfig;
use std::fs::OpenOptions;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn init_tracing_once(config: &AppConfig, once: &OnceLock<()>) {
    if !config.logging_enabled() {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = config.trace_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_max_level(tracing::Level::DEBUG)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Install the global subscriber if logging is enabled. Safe to call twice.
pub fn init_tracing(config: &AppConfig) {
    init_tracing_once(config, &TRACING_INIT);
}
