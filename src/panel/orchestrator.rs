use crate::config::{DisplayPatch, DisplaySettings};
use crate::log_debug;
use std::time::{Duration, Instant};

use super::controller::{is_settled, Controller};
use super::window::PanelWindow;

/// Upper bound on the wait for the controller's ready notification during a
/// show. The gate never aborts the show; it only bounds the wait.
pub const READY_WAIT: Duration = Duration::from_millis(1_000);

/// Verdict on an external close request (user gesture, not a `quit`
/// command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Accepted,
    Refused,
}

/// What happened during a show; `ready_timed_out` surfaces the non-fatal
/// readiness warning.
#[derive(Debug, Clone, Copy)]
pub struct ShowOutcome {
    pub ready_timed_out: bool,
}

/// Readiness-gated, settings-aware show/hide logic. Owns the window handle,
/// the controller capability, and the persistent display settings; lives on
/// the orchestration thread and is the only mutator of window-visible state.
pub struct ShowOrchestrator<W, C> {
    window: W,
    controller: C,
    settings: DisplaySettings,
    ready_wait: Duration,
}

impl<W: PanelWindow, C: Controller> ShowOrchestrator<W, C> {
    pub fn new(window: W, controller: C, settings: DisplaySettings) -> Self {
        Self {
            window,
            controller,
            settings,
            ready_wait: READY_WAIT,
        }
    }

    /// Override the readiness-gate timeout.
    pub fn with_ready_wait(mut self, ready_wait: Duration) -> Self {
        self.ready_wait = ready_wait;
        self
    }

    /// Display the panel, optionally applying client-side settings first.
    pub fn show(&mut self, patch: Option<DisplayPatch>) -> ShowOutcome {
        if let Some(patch) = patch {
            self.settings.apply(patch);
            let (width, height) = self.settings.window_size;
            self.window.resize(width, height);
            self.window.set_title(&self.settings.window_title);
        }

        log_debug(&self.settings.summary());

        self.window.activate();
        self.window.show_normal();

        if cfg!(windows) {
            // A window shown after being hidden can reappear behind other
            // windows on Windows; bouncing the stay-on-top flag forces it to
            // the front.
            self.window.set_stay_on_top(true);
            self.window.set_stay_on_top(false);
        }

        // Give the state machine enough time to boot up.
        let mut ready_timed_out = false;
        if !is_settled(&self.controller.states()) {
            let started = Instant::now();
            if !self.controller.wait_ready(self.ready_wait) {
                ready_timed_out = true;
                tracing::warn!("could not enter ready state");
                log_debug("Warning: Could not enter ready state");
            }
            log_debug(&format!(
                "Awaited state machine for {:.2} ms",
                started.elapsed().as_secs_f64() * 1000.0
            ));
        }

        self.controller.request_show();
        self.controller.reset();

        ShowOutcome { ready_timed_out }
    }

    /// Hide the panel. The process stays alive and a later `show` restores
    /// the same settings.
    pub fn hide(&mut self) {
        self.window.hide();
    }

    /// Close-policy decision table, in order: override gesture wins, then a
    /// settled state machine, otherwise the close is refused.
    pub fn should_close(&self, override_active: bool) -> CloseDecision {
        if override_active {
            log_debug("Force close accepted");
            return CloseDecision::Accepted;
        }
        if is_settled(&self.controller.states()) {
            return CloseDecision::Accepted;
        }
        log_debug("Not ready, hold the override key to force an exit");
        CloseDecision::Refused
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }
}
