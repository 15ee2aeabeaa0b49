//! Front-end process that presents a graphical panel on behalf of a host
//! process.
//!
//! The host drives the panel over a line-oriented channel: one JSON envelope
//! per line, each naming one of a closed set of commands (show, hide, quit).
//! A dedicated listener thread decodes envelopes and hands them to the
//! orchestration loop over a channel; the orchestration loop is the only
//! thread that touches the window, the client registry, or the display
//! settings.

pub mod config;
pub mod ipc;
pub mod panel;
pub mod registry;
pub mod telemetry;

mod app;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
    ControlFlow, PanelApp,
};
