//! Error deduplicator: suppresses repeated identical failure notifications.
//!
//! Only the most recently notified failure text is remembered. A successful cycle
//! does not clear it, so the same failure reappearing after a recovery stays muted
//! until a different failure is seen.

/// Prefix of every failure notification.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Build the operator-facing text for a failed cycle.
pub fn failure_message(error: &impl std::fmt::Display) -> String {
    format!("{FAILURE_PREFIX}: {error}")
}

/// In-memory holder of the last notified failure text.
#[derive(Debug, Default)]
pub struct ErrorDeduplicator {
    last_error: String,
}

impl ErrorDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `message` differs from the last notified failure, and if so remember it.
    ///
    /// Returns `true` if the notification should be sent.
    /// Returns `false` if it repeats the previous failure and must be suppressed.
    pub fn check_and_set(&mut self, message: &str) -> bool {
        if message == self.last_error {
            tracing::debug!(text = message, "Failure notification suppressed, same as previous");
            return false;
        }
        self.last_error = message.to_string();
        true
    }

    pub fn last_error(&self) -> &str {
        &self.last_error
    }
}
