//! Request field validation and normalization
//!
//! Each parser inspects one raw JSON field and produces one of three
//! outcomes: absent (key not in the request), provided with a normalized
//! value, or rejected with a fixed message. No parser consults another
//! field. "Absent" and "explicit null" stay distinguishable: handlers pass
//! `body.get(key)`, so a missing key arrives as `None` and a JSON null as
//! `Some(Value::Null)`.
//!
//! Create maps Absent to the field's default; update maps Absent to
//! "leave the stored value untouched".

use serde_json::Value;

use crate::model::{Difficulty, Status};

const STATUS_MSG: &str = "status must be one of PLANNED, IN_PROGRESS, DONE";
const DIFFICULTY_MSG: &str = "difficulty must be one of EASY, MEDIUM, HARD";
const TAGS_MSG: &str = "tags must be an array of strings or comma-separated string";

/// Outcome of parsing a field that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    /// Key was not present in the request
    Absent,
    /// Key was present; normalized value (which may be an explicit None)
    Value(T),
}

impl<T> Parsed<T> {
    /// Provided value, or the given default when absent (create semantics)
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Parsed::Absent => default,
            Parsed::Value(v) => v,
        }
    }

    /// None when absent, Some(value) when provided (update semantics)
    pub fn into_option(self) -> Option<T> {
        match self {
            Parsed::Absent => None,
            Parsed::Value(v) => Some(v),
        }
    }
}

/// Title is mandatory on create and update, so it has no absent state:
/// missing, non-string, and empty-after-trim all reject the same way.
pub fn title(input: Option<&Value>) -> Result<String, String> {
    match input {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err("title is required".to_string()),
    }
}

/// Free-text description. Null and empty-after-trim both normalize to
/// an explicit clear.
pub fn description(input: Option<&Value>) -> Result<Parsed<Option<String>>, String> {
    match input {
        None => Ok(Parsed::Absent),
        Some(Value::Null) => Ok(Parsed::Value(None)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(Parsed::Value(None))
            } else {
                Ok(Parsed::Value(Some(trimmed.to_string())))
            }
        }
        Some(_) => Err("description must be a string".to_string()),
    }
}

/// Status has no explicit-clear form: null is a non-string and rejects.
pub fn status(input: Option<&Value>) -> Result<Parsed<Status>, String> {
    match input {
        None => Ok(Parsed::Absent),
        Some(Value::String(s)) => Status::parse(s)
            .map(Parsed::Value)
            .ok_or_else(|| STATUS_MSG.to_string()),
        Some(_) => Err(STATUS_MSG.to_string()),
    }
}

pub fn difficulty(input: Option<&Value>) -> Result<Parsed<Option<Difficulty>>, String> {
    match input {
        None => Ok(Parsed::Absent),
        Some(Value::Null) => Ok(Parsed::Value(None)),
        Some(Value::String(s)) => Difficulty::parse(s)
            .map(|d| Parsed::Value(Some(d)))
            .ok_or_else(|| DIFFICULTY_MSG.to_string()),
        Some(_) => Err(DIFFICULTY_MSG.to_string()),
    }
}

/// Tags accept either an array of strings or a plain comma-separated
/// string; both canonicalize identically. Each tag is trimmed, empties
/// are dropped, and survivors are comma-joined for storage. No survivors
/// (or explicit null) normalizes to "no tags".
pub fn tags(input: Option<&Value>) -> Result<Parsed<Option<String>>, String> {
    match input {
        None => Ok(Parsed::Absent),
        Some(Value::Null) => Ok(Parsed::Value(None)),
        Some(Value::Array(items)) => {
            let mut cleaned: Vec<&str> = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => {
                        let trimmed = s.trim();
                        if !trimmed.is_empty() {
                            cleaned.push(trimmed);
                        }
                    }
                    _ => return Err(TAGS_MSG.to_string()),
                }
            }
            Ok(Parsed::Value(join_cleaned(&cleaned)))
        }
        Some(Value::String(s)) => {
            let cleaned: Vec<&str> = s
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            Ok(Parsed::Value(join_cleaned(&cleaned)))
        }
        Some(_) => Err(TAGS_MSG.to_string()),
    }
}

fn join_cleaned(cleaned: &[&str]) -> Option<String> {
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(value: Value) -> Option<Value> {
        Some(value)
    }

    #[test]
    fn title_rejects_missing_nonstring_and_blank() {
        assert_eq!(title(None), Err("title is required".to_string()));
        assert_eq!(title(v(json!(null)).as_ref()), Err("title is required".to_string()));
        assert_eq!(title(v(json!(42)).as_ref()), Err("title is required".to_string()));
        assert_eq!(title(v(json!("   ")).as_ref()), Err("title is required".to_string()));
    }

    #[test]
    fn title_trims_valid_input() {
        assert_eq!(title(v(json!("  Day 1  ")).as_ref()), Ok("Day 1".to_string()));
    }

    #[test]
    fn description_three_way_outcomes() {
        assert_eq!(description(None), Ok(Parsed::Absent));
        assert_eq!(description(v(json!(null)).as_ref()), Ok(Parsed::Value(None)));
        assert_eq!(
            description(v(json!("  notes ")).as_ref()),
            Ok(Parsed::Value(Some("notes".to_string())))
        );
        // Whitespace-only collapses to an explicit clear
        assert_eq!(description(v(json!("   ")).as_ref()), Ok(Parsed::Value(None)));
        assert!(description(v(json!(["x"])).as_ref()).is_err());
    }

    #[test]
    fn status_normalizes_case_and_rejects_outside_set() {
        assert_eq!(status(None), Ok(Parsed::Absent));
        assert_eq!(
            status(v(json!("in_progress")).as_ref()),
            Ok(Parsed::Value(Status::InProgress))
        );
        assert_eq!(
            status(v(json!("UNKNOWN")).as_ref()),
            Err(STATUS_MSG.to_string())
        );
        // Null is not a valid way to clear status
        assert_eq!(status(v(json!(null)).as_ref()), Err(STATUS_MSG.to_string()));
        assert_eq!(status(v(json!(3)).as_ref()), Err(STATUS_MSG.to_string()));
    }

    #[test]
    fn difficulty_allows_explicit_null() {
        assert_eq!(difficulty(None), Ok(Parsed::Absent));
        assert_eq!(difficulty(v(json!(null)).as_ref()), Ok(Parsed::Value(None)));
        assert_eq!(
            difficulty(v(json!("hard")).as_ref()),
            Ok(Parsed::Value(Some(Difficulty::Hard)))
        );
        assert_eq!(
            difficulty(v(json!("BRUTAL")).as_ref()),
            Err(DIFFICULTY_MSG.to_string())
        );
    }

    #[test]
    fn tags_array_canonicalizes() {
        assert_eq!(
            tags(v(json!(["  prisma ", "sqlite", ""])).as_ref()),
            Ok(Parsed::Value(Some("prisma,sqlite".to_string())))
        );
        // All-blank input collapses to "no tags"
        assert_eq!(
            tags(v(json!(["", "  "])).as_ref()),
            Ok(Parsed::Value(None))
        );
    }

    #[test]
    fn tags_string_is_equivalent_to_array() {
        assert_eq!(
            tags(v(json!(" prisma , sqlite ,")).as_ref()),
            Ok(Parsed::Value(Some("prisma,sqlite".to_string())))
        );
    }

    #[test]
    fn tags_rejects_mixed_types() {
        assert_eq!(tags(v(json!(["a", 2])).as_ref()), Err(TAGS_MSG.to_string()));
        assert_eq!(tags(v(json!(42)).as_ref()), Err(TAGS_MSG.to_string()));
        assert_eq!(tags(None), Ok(Parsed::Absent));
        assert_eq!(tags(v(json!(null)).as_ref()), Ok(Parsed::Value(None)));
    }
}
