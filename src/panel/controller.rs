use crate::log_debug;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Capability exposed by the external processing state machine.
///
/// The orchestrator only ever tests membership of the state set; it never
/// enumerates the states itself.
pub trait Controller {
    /// Names of the states the state machine currently occupies.
    fn states(&self) -> Vec<String>;
    /// Block for up to `timeout` waiting for the one-shot ready
    /// notification. Returns false when the wait timed out.
    fn wait_ready(&self, timeout: Duration) -> bool;
    /// Reset the state machine for the next run.
    fn reset(&self);
    /// Raised by the orchestrator so the controller can perform its own
    /// show-side effects.
    fn request_show(&self);
}

/// True when the state machine is safe to interrupt.
pub fn is_settled(states: &[String]) -> bool {
    states.iter().any(|s| s == "ready" || s == "finished")
}

/// One-shot ready notification with a bounded wait.
///
/// `notify` may be called from any thread; a successful `wait` consumes the
/// flag so the next show gates again.
#[derive(Debug, Clone, Default)]
pub struct ReadySignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self) {
        let (flag, cvar) = &*self.inner;
        let mut ready = flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *ready = true;
        cvar.notify_all();
    }

    pub fn wait(&self, timeout: Duration) -> bool {
        let (flag, cvar) = &*self.inner;
        let deadline = Instant::now() + timeout;
        let mut ready = flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        while !*ready {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _result) = cvar
                .wait_timeout(ready, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            ready = guard;
        }
        *ready = false;
        true
    }
}

/// Controller stand-in for standalone runs: always settled, never gates.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleController;

impl Controller for IdleController {
    fn states(&self) -> Vec<String> {
        vec!["ready".to_string()]
    }

    fn wait_ready(&self, _timeout: Duration) -> bool {
        true
    }

    fn reset(&self) {
        log_debug("Controller reset");
    }

    fn request_show(&self) {
        log_debug("Controller show requested");
    }
}
