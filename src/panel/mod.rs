//! Window and controller capabilities plus the show/hide orchestration that
//! sits on top of them.
//!
//! The rendering engine and the processing state machine are external
//! collaborators; this module only defines the capability traits the
//! orchestrator needs and ships headless stand-ins for standalone runs.

mod controller;
mod orchestrator;
mod window;


pub use controller::{is_settled, Controller, IdleController, ReadySignal};
pub use orchestrator::{CloseDecision, ShowOrchestrator, ShowOutcome, READY_WAIT};
pub use window::{HeadlessWindow, PanelWindow};
