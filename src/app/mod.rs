//! Composition root: wires the listener channel, the registry, and the
//! orchestrator together, plus the file logging used across the crate.

mod logging;
mod state;


pub use logging::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub use state::{ControlFlow, PanelApp};
