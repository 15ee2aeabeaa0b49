//! Structured trace log, separate from the plain-text debug log.

use crate::config::AppConfig;
use std::env;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

const TRACE_LOG_ENV: &str = "PANELHOST_TRACE_LOG";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn tracing_log_path() -> PathBuf {
    env::var(TRACE_LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("panelhost_trace.jsonl"))
}

fn open_trace_log() -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(tracing_log_path())
        .ok()
}

/// Install a JSON-lines tracing subscriber when logging is enabled. Safe to
/// call more than once; only the first call wins.
pub fn init_tracing(config: &AppConfig) {
    if !config.logs || config.no_logs {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let Some(file) = open_trace_log() else {
            return;
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
