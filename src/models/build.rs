use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::errors::{json_kind, AppError, Result};

/// A read-only view over one entry of the builds list.
///
/// Only `buildNumber` and `id` are looked at; any other field is ignored and
/// either of the two may be absent.
#[derive(Debug, Clone, Copy)]
pub struct BuildRecord<'a> {
    pub index: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> BuildRecord<'a> {
    pub const BUILD_NUMBER: &'static str = "buildNumber";
    pub const ID: &'static str = "id";

    /// Text of an absent or `null` field.
    pub const MISSING: &'static str = "None";

    pub fn from_value(index: usize, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { index, fields }),
            other => Err(AppError::RecordNotObject {
                index,
                found: json_kind(other),
            }),
        }
    }

    pub fn build_number(&self) -> Cow<'a, str> {
        self.field_text(Self::BUILD_NUMBER)
    }

    pub fn id(&self) -> Cow<'a, str> {
        self.field_text(Self::ID)
    }

    pub fn matches(&self, target: &str) -> bool {
        self.build_number() == target
    }

    fn field_text(&self, name: &str) -> Cow<'a, str> {
        match self.fields.get(name) {
            Some(value) => as_text(value),
            None => Cow::Borrowed(Self::MISSING),
        }
    }
}

// Strings are taken verbatim; null and booleans use the script-style spellings
fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(BuildRecord::MISSING),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_build_number_matches() {
        let value = json!({ "buildNumber": "53", "id": "abc123" });
        let record = BuildRecord::from_value(0, &value).unwrap();
        assert!(record.matches("53"));
        assert_eq!(record.id(), "abc123");
    }

    #[test]
    fn numeric_build_number_compared_as_text() {
        let value = json!({ "buildNumber": 53, "id": 9 });
        let record = BuildRecord::from_value(0, &value).unwrap();
        assert_eq!(record.build_number(), "53");
        assert!(record.matches("53"));
        assert!(!record.matches("53.0"));
        assert_eq!(record.id(), "9");
    }

    #[test]
    fn missing_and_null_fields_read_as_none() {
        let value = json!({ "buildNumber": null, "platform": "android" });
        let record = BuildRecord::from_value(3, &value).unwrap();
        assert_eq!(record.index, 3);
        assert_eq!(record.build_number(), "None");
        assert_eq!(record.id(), "None");
        assert!(!record.matches("53"));
        assert!(!record.matches(""));
        assert!(record.matches("None"));
    }

    #[test]
    fn booleans_are_capitalised() {
        let value = json!({ "buildNumber": true, "id": false });
        let record = BuildRecord::from_value(0, &value).unwrap();
        assert!(record.matches("True"));
        assert!(!record.matches("true"));
        assert_eq!(record.id(), "False");
    }

    #[test]
    fn non_object_is_rejected_with_index() {
        let value = json!(["53", "abc123"]);
        let err = BuildRecord::from_value(4, &value).unwrap_err();
        assert!(matches!(
            err,
            AppError::RecordNotObject {
                index: 4,
                found: "an array"
            }
        ));
    }
}
