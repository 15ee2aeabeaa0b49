//! Default values shared between the CLI surface and the settings store.

pub const DEFAULT_WINDOW_WIDTH: u32 = 430;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_WINDOW_TITLE: &str = "panelhost";

/// Largest window edge we accept from the CLI or a client patch check.
pub(super) const MAX_WINDOW_EDGE: u32 = 16_384;
