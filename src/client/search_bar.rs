//! Debounced search input.

use std::time::Duration;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::sleep,
};

/// Quiet period a keystroke must survive before its value is emitted.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Search input with trailing-edge debounce.
///
/// Every keystroke replaces the pending timer task, so only the last value
/// within a quiet period reaches the query channel. There is no bypass:
/// submitting the form is a no-op, and queries only ever fire through the
/// debounced path.
pub struct SearchBar {
    value: String,
    queries: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchBar {
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (queries, receiver) = mpsc::unbounded_channel();

        (
            Self {
                value: String::new(),
                queries,
                pending: None,
            },
            receiver,
        )
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Record a keystroke. Cancels any pending emission and schedules a
    /// fresh one for [`DEBOUNCE_DELAY`] from now.
    pub fn input(&mut self, text: impl Into<String>) {
        self.value = text.into();

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let queries = self.queries.clone();
        let value = self.value.clone();

        self.pending = Some(tokio::spawn(async move {
            sleep(DEBOUNCE_DELAY).await;
            let _ = queries.send(value);
        }));
    }

    /// Form submission does not short-circuit the debounce.
    pub fn submit(&self) {}
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
