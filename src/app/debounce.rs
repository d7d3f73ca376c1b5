// Search debounce: at most one pending timer; every keystroke replaces it.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// Input was blank; nothing is pending and results should be hidden.
    Cleared,
    /// A search will fire once the window elapses without further input.
    Scheduled,
}

pub struct SearchDebounce {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    tx: UnboundedSender<Action>,
}

impl SearchDebounce {
    pub fn new(delay: Duration, tx: UnboundedSender<Action>) -> Self {
        Self {
            delay,
            pending: None,
            tx,
        }
    }

    /// Feed the current input text. Cancels whatever was pending.
    pub fn input(&mut self, raw: &str) -> DebounceOutcome {
        self.cancel();

        let query = raw.trim();
        if query.is_empty() {
            return DebounceOutcome::Cleared;
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        let query = query.to_string();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send(Action::RunSearch { query }).ok();
        }));
        DebounceOutcome::Scheduled
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SearchDebounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
