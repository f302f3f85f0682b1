// Entry model and request validation
// An entry is one ledger line: a title, a monetary value, and a direction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ENTRY TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in
    Income,

    /// Money going out
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(EntryType::Income),
            "expense" => Some(EntryType::Expense),
            _ => None,
        }
    }
}

// ============================================================================
// ENTRY ENTITY
// ============================================================================

/// A persisted ledger entry. `id` is generated by the store on creation and
/// never changes; the other three fields are mutable in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// A decoded, well-shaped candidate entry, ready to bind as SQL parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub value: f64,
    pub entry_type: EntryType,
}

// ============================================================================
// REQUEST PAYLOAD
// ============================================================================

/// Raw request body for POST and PATCH. The fields arrive with no guaranteed
/// type (`value` may be a numeric string), so each one is held as raw JSON
/// until the decode step runs. Missing fields decode as null.
#[derive(Debug, Default, Deserialize)]
pub struct EntryPayload {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub value: Value,
    #[serde(default, rename = "type")]
    pub entry_type: Value,
}

impl EntryPayload {
    fn title_str(&self) -> Option<&str> {
        self.title.as_str()
    }

    /// Numbers pass through; numeric strings are coerced.
    fn value_f64(&self) -> Option<f64> {
        match &self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    fn type_enum(&self) -> Option<EntryType> {
        self.entry_type.as_str().and_then(EntryType::parse)
    }
}

// ============================================================================
// DECODE + VALIDATE
// ============================================================================

/// Validate a candidate entry for creation.
///
/// Every rule is evaluated independently and all failures are collected, in
/// field order: title, then value, then type. A field that fails to decode
/// reports its shape error instead of the rule.
pub fn validate(payload: &EntryPayload) -> Result<NewEntry, Vec<String>> {
    let mut errors = Vec::new();

    let title = match payload.title_str() {
        Some(title) => {
            if title.chars().count() < 5 {
                errors.push("Title is too short".to_string());
            }
            Some(title.to_string())
        }
        None => {
            errors.push("Title must be a string".to_string());
            None
        }
    };

    let value = match payload.value_f64() {
        Some(value) => {
            if value < 0.0 {
                errors.push("Value must be positive".to_string());
            }
            Some(value)
        }
        None => {
            errors.push("Value must be a number".to_string());
            None
        }
    };

    let entry_type = payload.type_enum();
    if entry_type.is_none() {
        errors.push("Invalid type - please use expense or income".to_string());
    }

    match (title, value, entry_type) {
        (Some(title), Some(value), Some(entry_type)) if errors.is_empty() => Ok(NewEntry {
            title,
            value,
            entry_type,
        }),
        _ => Err(errors),
    }
}

/// Decode the payload for an update. Updates bypass the creation rules (a
/// short title or negative value is written as-is), but the fields still
/// have to carry SQL-bindable types.
pub fn decode(payload: &EntryPayload) -> Result<NewEntry, Vec<String>> {
    let mut errors = Vec::new();

    let title = payload.title_str().map(str::to_string);
    if title.is_none() {
        errors.push("Title must be a string".to_string());
    }

    let value = payload.value_f64();
    if value.is_none() {
        errors.push("Value must be a number".to_string());
    }

    let entry_type = payload.type_enum();
    if entry_type.is_none() {
        errors.push("Invalid type - please use expense or income".to_string());
    }

    match (title, value, entry_type) {
        (Some(title), Some(value), Some(entry_type)) => Ok(NewEntry {
            title,
            value,
            entry_type,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(title: Value, value: Value, entry_type: Value) -> EntryPayload {
        EntryPayload {
            title,
            value,
            entry_type,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_entry() {
        let p = payload(json!("Groceries"), json!(42.5), json!("expense"));

        let new_entry = validate(&p).unwrap();
        assert_eq!(new_entry.title, "Groceries");
        assert_eq!(new_entry.value, 42.5);
        assert_eq!(new_entry.entry_type, EntryType::Expense);
    }

    #[test]
    fn test_validate_collects_all_failures_in_order() {
        let p = payload(json!("abc"), json!(-1), json!("other"));

        let errors = validate(&p).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Title is too short",
                "Value must be positive",
                "Invalid type - please use expense or income",
            ]
        );
    }

    #[test]
    fn test_validate_reports_only_the_failing_rule() {
        // "Pay" is 3 characters; value and type are valid
        let p = payload(json!("Pay"), json!(100), json!("income"));

        let errors = validate(&p).unwrap_err();
        assert_eq!(errors, vec!["Title is too short"]);
    }

    #[test]
    fn test_validate_rejects_malformed_shapes() {
        let p = payload(json!(7), json!("not a number"), json!("income"));

        let errors = validate(&p).unwrap_err();
        assert_eq!(errors, vec!["Title must be a string", "Value must be a number"]);
    }

    #[test]
    fn test_validate_coerces_numeric_string_value() {
        let p = payload(json!("Salary deposit"), json!("2000"), json!("income"));

        let new_entry = validate(&p).unwrap();
        assert_eq!(new_entry.value, 2000.0);
    }

    #[test]
    fn test_validate_rejects_negative_numeric_string() {
        let p = payload(json!("Groceries"), json!("-3.5"), json!("expense"));

        let errors = validate(&p).unwrap_err();
        assert_eq!(errors, vec!["Value must be positive"]);
    }

    #[test]
    fn test_validate_missing_fields_report_shape_errors() {
        let p = EntryPayload::default();

        let errors = validate(&p).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Title must be a string",
                "Value must be a number",
                "Invalid type - please use expense or income",
            ]
        );
    }

    #[test]
    fn test_validate_non_string_type_fails_type_rule() {
        let p = payload(json!("Groceries"), json!(10), json!(42));

        let errors = validate(&p).unwrap_err();
        assert_eq!(errors, vec!["Invalid type - please use expense or income"]);
    }

    #[test]
    fn test_validate_zero_value_is_allowed() {
        let p = payload(json!("Nothing much"), json!(0), json!("expense"));

        assert!(validate(&p).is_ok());
    }

    #[test]
    fn test_decode_skips_creation_rules() {
        // One-character title and negative value decode fine for updates
        let p = payload(json!("x"), json!(-50), json!("expense"));

        let new_entry = decode(&p).unwrap();
        assert_eq!(new_entry.title, "x");
        assert_eq!(new_entry.value, -50.0);
    }

    #[test]
    fn test_decode_still_rejects_unknown_type() {
        let p = payload(json!("Groceries"), json!(10), json!("transfer"));

        let errors = decode(&p).unwrap_err();
        assert_eq!(errors, vec!["Invalid type - please use expense or income"]);
    }

    #[test]
    fn test_entry_serializes_with_external_field_names() {
        let entry = Entry {
            id: 7,
            title: "Groceries".to_string(),
            value: 42.5,
            entry_type: EntryType::Expense,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            json!({ "id": 7, "title": "Groceries", "value": 42.5, "type": "expense" })
        );
    }
}
