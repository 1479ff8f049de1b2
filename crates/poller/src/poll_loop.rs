use std::time::Duration;

use chrono::Utc;

use homework_common::error::BotError;
use homework_common::types::{PollCursor, current_date};
use homework_engine::{ErrorDeduplicator, failure_message, format_status, validate};
use homework_notifier::{Notifier, deliver};

use crate::source::HomeworkSource;

/// Label for whether the previous cycle succeeded. Both states sleep the same interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling,
    ErrorBackoff,
}

impl std::fmt::Display for PollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollState::Polling => write!(f, "polling"),
            PollState::ErrorBackoff => write!(f, "error_backoff"),
        }
    }
}

/// What a single cycle ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was formatted and handed to the notifier.
    Notified(String),
    /// The API reported no new statuses.
    NoUpdates,
    /// The cycle failed and the failure text was handed to the notifier.
    ErrorNotified(String),
    /// The cycle failed with the same text as the last notified failure.
    ErrorSuppressed(String),
}

/// Poll loop controller: fetch → validate → format → notify → sleep, forever.
///
/// Owns the poll cursor and the last notified failure; nothing else reads them.
pub struct PollLoop<S, N> {
    source: S,
    notifier: N,
    retry_time: Duration,
    cursor: PollCursor,
    dedup: ErrorDeduplicator,
    state: PollState,
}

impl<S, N> PollLoop<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    /// Create a controller whose first fetch window starts now.
    pub fn new(source: S, notifier: N, retry_time: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_time,
            cursor: Utc::now().timestamp(),
            dedup: ErrorDeduplicator::new(),
            state: PollState::Polling,
        }
    }

    /// Start the first fetch window at `cursor` instead of now.
    pub fn with_cursor(mut self, cursor: PollCursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn last_error(&self) -> &str {
        self.dedup.last_error()
    }

    /// Run cycles forever, sleeping the fixed retry interval after each one
    /// whatever its outcome.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            retry_secs = self.retry_time.as_secs(),
            "Poll loop started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_time).await;
        }
    }

    /// Run one cycle without the trailing sleep. Never fails: every error is
    /// turned into a (possibly suppressed) failure notification.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => {
                self.transition(PollState::Polling);
                outcome
            }
            Err(e) => {
                self.transition(PollState::ErrorBackoff);
                self.report_failure(&e).await
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, BotError> {
        let response = self.source.fetch(self.cursor).await?;

        if let Some(next) = current_date(&response) {
            self.cursor = next;
        }

        let homeworks = validate(&response)?;

        // Only the first entry is inspected each cycle.
        let Some(homework) = homeworks.first() else {
            tracing::debug!(cursor = self.cursor, "No new status");
            return Ok(CycleOutcome::NoUpdates);
        };

        let message = format_status(homework)?;
        deliver(&self.notifier, &message).await;
        Ok(CycleOutcome::Notified(message))
    }

    async fn report_failure(&mut self, error: &BotError) -> CycleOutcome {
        let message = failure_message(error);
        tracing::error!(error = %error, "Poll cycle failed");

        if self.dedup.check_and_set(&message) {
            deliver(&self.notifier, &message).await;
            CycleOutcome::ErrorNotified(message)
        } else {
            CycleOutcome::ErrorSuppressed(message)
        }
    }

    fn transition(&mut self, next: PollState) {
        if self.state != next {
            tracing::info!(from = %self.state, to = %next, "Poll state changed");
            self.state = next;
        }
    }
}
