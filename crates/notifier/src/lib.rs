//! Notification delivery.
//!
//! The poll loop only depends on the [`Notifier`] trait. [`TelegramNotifier`]
//! delivers through the Telegram Bot API `sendMessage` method.
//!
//! Delivery is best effort: one attempt per message, no retries. [`deliver`]
//! logs a failed attempt and swallows it so the caller never sees it.

pub mod telegram;

use async_trait::async_trait;

use homework_common::error::BotError;

pub use telegram::TelegramNotifier;

/// A destination that accepts plain-text messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), BotError>;
}

/// Send `text` once, logging the outcome. Delivery failures are never propagated.
///
/// Returns whether the message was accepted by the destination.
pub async fn deliver(notifier: &dyn Notifier, text: &str) -> bool {
    match notifier.send(text).await {
        Ok(()) => {
            tracing::info!(text, "Message sent");
            true
        }
        Err(e) => {
            tracing::error!(text, error = %e, "Message delivery failed");
            false
        }
    }
}
