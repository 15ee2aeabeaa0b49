use crate::config::{DisplayPatch, DisplaySettings};
use crate::ipc::{Dispatch, PanelCommand};
use crate::log_debug;
use crate::panel::{CloseDecision, Controller, PanelWindow, ShowOrchestrator, ShowOutcome};
use crate::registry::{Client, ClientRegistry};
use anyhow::Result;
use crossbeam_channel::Receiver;

/// Whether the orchestration loop keeps running after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Composition root for the panel front-end.
///
/// Owns the orchestrator and the client registry and runs the orchestration
/// loop. All mutation happens through `&mut self`, so as long as one thread
/// owns the `PanelApp` the single-writer invariant on window, registry, and
/// settings state holds without locks.
pub struct PanelApp<W, C> {
    orchestrator: ShowOrchestrator<W, C>,
    registry: ClientRegistry,
}

impl<W: PanelWindow, C: Controller> PanelApp<W, C> {
    pub fn new(window: W, controller: C, settings: DisplaySettings) -> Self {
        Self {
            orchestrator: ShowOrchestrator::new(window, controller, settings),
            registry: ClientRegistry::new(),
        }
    }

    /// Record a peer on connection accept and make it the current client.
    pub fn register_client(&mut self, port: u16) {
        self.registry.register(port);
    }

    /// Drop a peer's registry entry; fails when the port is unknown.
    pub fn deregister_client(&mut self, port: u16) -> Result<Client> {
        self.registry.deregister(port)
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    pub fn orchestrator(&self) -> &ShowOrchestrator<W, C> {
        &self.orchestrator
    }

    pub fn show(&mut self, patch: Option<DisplayPatch>) -> ShowOutcome {
        self.orchestrator.show(patch)
    }

    pub fn hide(&mut self) {
        self.orchestrator.hide();
    }

    /// Close-policy entry point for an embedding window loop.
    pub fn handle_close_request(&mut self, override_active: bool) -> CloseDecision {
        self.orchestrator.should_close(override_active)
    }

    /// Execute one decoded host command on the orchestration thread.
    pub fn dispatch(&mut self, dispatch: Dispatch) -> ControlFlow {
        match dispatch.command {
            PanelCommand::Show => {
                let patch = match dispatch.args.into_iter().next() {
                    Some(value) => match serde_json::from_value::<DisplayPatch>(value) {
                        Ok(patch) => Some(patch),
                        Err(err) => {
                            // The envelope itself was valid; a bad settings
                            // argument degrades to a plain show.
                            log_debug(&format!("Ignoring malformed display settings: {err}"));
                            None
                        }
                    },
                    None => None,
                };
                self.orchestrator.show(patch);
                ControlFlow::Continue
            }
            PanelCommand::Hide => {
                self.orchestrator.hide();
                ControlFlow::Continue
            }
            PanelCommand::Quit => {
                log_debug("Quit requested by host");
                ControlFlow::Quit
            }
        }
    }

    /// The orchestration loop: consume dispatches in arrival order until the
    /// host sends `quit` or the listener side goes away.
    pub fn run(&mut self, rx: &Receiver<Dispatch>) {
        for dispatch in rx.iter() {
            if self.dispatch(dispatch) == ControlFlow::Quit {
                return;
            }
        }
        log_debug("Dispatch channel disconnected, exiting");
    }
}
