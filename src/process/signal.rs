use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ProcessError;

/// Keeps SIGINT from killing the shell while a foreground child runs.
///
/// The handler only records the interrupt. Installed handlers are reset by
/// `exec`, so children still get the default action and die on Ctrl-C.
#[derive(Clone)]
pub struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
}

impl InterruptGuard {
    pub fn install() -> Result<Self, ProcessError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = interrupted.clone();

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| ProcessError::SignalError(e.to_string()))?;

        Ok(Self { interrupted })
    }

    /// Whether SIGINT arrived since the last call.
    pub fn take(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}
