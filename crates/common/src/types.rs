use serde_json::{Map, Value};

/// Seconds since the Unix epoch marking the lower bound of the next fetch window.
pub type PollCursor = i64;

/// Field of the API response holding the list of homework entries.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Field of the API response holding the server-side timestamp of the answer.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Borrowed view of one submission record returned by the review API.
///
/// Absent and `null` fields are both `None`. Values are kept as raw JSON so the
/// formatter decides how a field of an unexpected type is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeworkEntry<'a> {
    pub homework_name: Option<&'a Value>,
    pub status: Option<&'a Value>,
}

impl<'a> HomeworkEntry<'a> {
    /// View `value` as a homework entry. Returns `None` if it is not a mapping.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self {
            homework_name: non_null(fields, "homework_name"),
            status: non_null(fields, "status"),
        })
    }
}

fn non_null<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

/// Human-readable name of a JSON value's type, used in malformed-response errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Extract `current_date` from a raw response, if it is present and an integer.
pub fn current_date(response: &Value) -> Option<PollCursor> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}
