//! Response validator: checks the shape of a decoded API answer and extracts
//! the list of homework entries.
//!
//! Rules are applied in a fixed order. An empty `homeworks` list short-circuits
//! before the response is confirmed to be a mapping; on a non-mapping input
//! `homeworks` can never be found, so that ordering only matters for mappings.

use serde_json::Value;

use homework_common::error::BotError;
use homework_common::types::{HOMEWORKS_KEY, json_type_name};

/// Validate a raw response and return its homework entries, possibly empty.
///
/// Entries are returned unmodified; their individual fields are checked by the formatter.
pub fn validate(response: &Value) -> Result<Vec<Value>, BotError> {
    if let Some(Value::Array(homeworks)) = response.get(HOMEWORKS_KEY)
        && homeworks.is_empty()
    {
        return Ok(Vec::new());
    }

    let Value::Object(fields) = response else {
        let message = format!("ожидался dict, получен {}", json_type_name(response));
        tracing::error!(actual = json_type_name(response), "Response is not a mapping");
        return Err(BotError::MalformedResponse(message));
    };

    let Some(homeworks) = fields.get(HOMEWORKS_KEY) else {
        tracing::error!(key = HOMEWORKS_KEY, "Response is missing a required key");
        return Err(BotError::MissingField(HOMEWORKS_KEY));
    };

    match homeworks {
        Value::Array(entries) => Ok(entries.clone()),
        other => {
            tracing::error!(
                actual = json_type_name(other),
                "Homeworks value is not a list"
            );
            Err(BotError::MalformedResponse(format!(
                "значение {HOMEWORKS_KEY} должно быть list, получен {}",
                json_type_name(other)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_homeworks_is_nothing_new() {
        let entries = validate(&json!({"homeworks": [], "current_date": 1})).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_homeworks_without_current_date() {
        assert!(validate(&json!({"homeworks": []})).unwrap().is_empty());
    }

    #[test]
    fn test_returns_entries_unmodified() {
        let entry = json!({"homework_name": "hw1", "status": "approved", "id": 7});
        let entries = validate(&json!({"homeworks": [entry.clone()], "current_date": 1})).unwrap();
        assert_eq!(entries, vec![entry]);
    }

    #[test]
    fn test_non_mapping_names_type() {
        for (input, type_name) in [
            (json!([1, 2]), "list"),
            (json!("text"), "string"),
            (json!(42), "number"),
            (json!(null), "null"),
        ] {
            match validate(&input) {
                Err(BotError::MalformedResponse(message)) => {
                    assert!(message.contains(type_name), "{message}")
                }
                other => panic!("expected MalformedResponse, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_homeworks_key() {
        assert!(matches!(
            validate(&json!({"current_date": 1})),
            Err(BotError::MissingField("homeworks"))
        ));
        assert!(matches!(
            validate(&json!({})),
            Err(BotError::MissingField("homeworks"))
        ));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        for value in [json!({}), json!("hw"), json!(1), json!(null)] {
            assert!(matches!(
                validate(&json!({"homeworks": value})),
                Err(BotError::MalformedResponse(_))
            ));
        }
    }
}
