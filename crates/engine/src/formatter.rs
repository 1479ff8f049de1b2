//! Status formatter: turns one homework entry into the notification text.

use std::borrow::Cow;

use serde_json::Value;

use homework_common::error::BotError;
use homework_common::types::{HomeworkEntry, json_type_name};

use crate::catalog::verdict_for;

/// Format a raw homework entry.
///
/// The status is checked before the name, so an entry missing both reports `MissingStatus`.
/// A status that is not a string can never be in the catalog and is reported as
/// `UnknownStatus` with its JSON text. A name that is not a string is rendered as JSON.
pub fn format_status(entry: &Value) -> Result<String, BotError> {
    let Some(entry) = HomeworkEntry::from_value(entry) else {
        return Err(BotError::MalformedResponse(format!(
            "запись о работе должна быть dict, получен {}",
            json_type_name(entry)
        )));
    };

    let Some(status) = entry.status else {
        tracing::error!("Homework entry has no status");
        return Err(BotError::MissingStatus);
    };
    let status = json_text(status);

    let name = match entry.homework_name.map(json_text) {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::error!(status = %status, "Homework entry has no name");
            return Err(BotError::MissingName);
        }
    };

    let verdict = verdict_for(&status).inspect_err(|_| {
        tracing::error!(status = %status, homework = %name, "Unknown homework status");
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

/// Strings as-is, anything else as its JSON text.
fn json_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
