//! Line-oriented command channel from the host process.
//!
//! Architecture:
//! - Listener thread: blocking line reads, decodes one JSON envelope per
//!   line, maps it onto the closed command set
//! - Orchestration loop: consumes decoded commands from a channel and is the
//!   only thread allowed to mutate window, registry, or settings state
//!
//! Protocol (one object per line):
//! `{"payload": {"name": "<show|hide|quit>", "args": [ ... ]}}`
//!
//! Malformed lines and unknown command names are logged and dropped; the
//! listener never exits because of a bad message.

mod listener;
mod protocol;

#[cfg(test)]
mod tests;

pub use listener::spawn_listener;
pub use protocol::{decode_line, DecodeError, Dispatch, Envelope, PanelCommand, Payload};
