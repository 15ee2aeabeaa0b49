//! Command-line parsing and the panel's display settings.

mod defaults;
mod validation;

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub use defaults::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH};

/// CLI options for the panelhost front-end.
#[derive(Debug, Parser, Clone)]
#[command(about = "Readiness-gated panel front-end for a host process", author, version)]
pub struct AppConfig {
    /// Show the panel once with default settings and exit (no host channel)
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Initial window width in pixels
    #[arg(long = "window-width", default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub window_width: u32,

    /// Initial window height in pixels
    #[arg(long = "window-height", default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub window_height: u32,

    /// Initial window title
    #[arg(long = "window-title", default_value = DEFAULT_WINDOW_TITLE)]
    pub window_title: String,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "PANELHOST_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "PANELHOST_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging raw host message lines (debug log only)
    #[arg(
        long = "log-content",
        env = "PANELHOST_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,
}

impl AppConfig {
    /// Initial display settings derived from the CLI values.
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            window_size: (self.window_width, self.window_height),
            window_title: self.window_title.clone(),
            extra: BTreeMap::new(),
        }
    }
}

/// Effective visual settings for the panel window.
///
/// Lives for the whole process run; a `show` command may carry a
/// [`DisplayPatch`] that is merged in field-wise. Options outside the
/// recognized set ride along in `extra` without validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub window_size: (u32, u32),
    pub window_title: String,
    pub extra: BTreeMap<String, Value>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            window_size: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl DisplaySettings {
    /// Merge a client-supplied patch. Fields absent from the patch keep
    /// their prior values; extension options merge key-wise.
    pub fn apply(&mut self, patch: DisplayPatch) {
        if let Some(size) = patch.window_size {
            self.window_size = size;
        }
        if let Some(title) = patch.window_title {
            self.window_title = title;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }

    /// Human-readable dump of the effective settings, for diagnostics only.
    pub fn summary(&self) -> String {
        let mut lines = vec!["Settings:".to_string()];
        lines.push(format!(
            "  WindowSize = {}x{}",
            self.window_size.0, self.window_size.1
        ));
        lines.push(format!("  WindowTitle = {}", self.window_title));
        for (key, value) in &self.extra {
            lines.push(format!("  {key} = {value}"));
        }
        lines.join("\n")
    }
}

/// Partial display settings as they arrive on the wire (`args[0]` of a
/// `show` command). Every recognized field is optional; unrecognized keys
/// are collected into `extra` and passed through to the settings store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayPatch {
    #[serde(rename = "WindowSize")]
    pub window_size: Option<(u32, u32)>,
    #[serde(rename = "WindowTitle")]
    pub window_title: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
