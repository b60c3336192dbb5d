use std::sync::{Mutex, PoisonError};

use log::warn;

/// Where the user currently "is", plus the hook the dispatcher uses to force
/// a move. Keeps the 401 interceptor decoupled from any rendering mechanism.
pub trait Navigator: Send + Sync {
    /// Current screen path.
    fn location(&self) -> String;

    /// Force navigation to another screen.
    fn navigate(&self, path: &str);
}

/// Navigator for one-shot terminal commands: tracks the screen the running
/// command represents and logs forced moves.
pub struct TerminalNavigator {
    location: Mutex<String>,
}

impl TerminalNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            location: Mutex::new(initial.to_string()),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn location(&self) -> String {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn navigate(&self, path: &str) {
        warn!("Redirecting to {path}");
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
    }
}
