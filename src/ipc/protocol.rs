//! Wire envelope shape and the closed command set.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One decoded line of channel input.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub payload: Payload,
}

/// Command name plus its positional arguments. `args` may be empty and its
/// values are opaque at this layer.
#[derive(Debug, Deserialize)]
pub struct Payload {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// The closed set of commands the host may dispatch. Anything outside this
/// set is rejected at the decode boundary, never at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Show,
    Hide,
    Quit,
}

impl PanelCommand {
    /// Wire names are exact; there is no case folding on the channel.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "show" => Some(PanelCommand::Show),
            "hide" => Some(PanelCommand::Hide),
            "quit" => Some(PanelCommand::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelCommand::Show => "show",
            PanelCommand::Hide => "hide",
            PanelCommand::Quit => "quit",
        }
    }
}

/// The unit handed from the listener thread to the orchestration loop.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub command: PanelCommand,
    pub args: Vec<Value>,
}

/// Per-message decode failure. Both variants are recovered locally by the
/// listener loop.
#[derive(Debug)]
pub enum DecodeError {
    /// Line was not a well-formed envelope (bad JSON, missing `name`, ...).
    Malformed(serde_json::Error),
    /// Envelope was fine but named a command outside the dispatch table.
    Unknown(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed(err) => write!(f, "Invalid envelope: {err}"),
            DecodeError::Unknown(name) => write!(f, "'{name}' was unavailable."),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode one line of channel input into a dispatchable command.
pub fn decode_line(line: &str) -> Result<Dispatch, DecodeError> {
    let envelope: Envelope = serde_json::from_str(line).map_err(DecodeError::Malformed)?;
    let payload = envelope.payload;
    match PanelCommand::from_name(&payload.name) {
        Some(command) => Ok(Dispatch {
            command,
            args: payload.args,
        }),
        None => Err(DecodeError::Unknown(payload.name)),
    }
}
