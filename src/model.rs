//! Entry data model
//!
//! The stored record, its enumerated fields, and the outbound JSON shape.
//! Tags are persisted as a single comma-joined TEXT column and served as a
//! list; the helpers here own that encoding.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Entry workflow status. Stored as its canonical uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Planned,
    InProgress,
    Done,
}

impl Status {
    /// Parse a status name, case-insensitively. Returns None for
    /// anything outside the fixed set.
    pub fn parse(input: &str) -> Option<Status> {
        match input.to_uppercase().as_str() {
            "PLANNED" => Some(Status::Planned),
            "IN_PROGRESS" => Some(Status::InProgress),
            "DONE" => Some(Status::Done),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Planned => "PLANNED",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }
}

/// Entry difficulty rating. Optional in stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name, case-insensitively.
    pub fn parse(input: &str) -> Option<Difficulty> {
        match input.to_uppercase().as_str() {
            "EASY" => Some(Difficulty::Easy),
            "MEDIUM" => Some(Difficulty::Medium),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Stored entry row. Enum columns hold canonical uppercase names
/// (enforced by the validation layer before any write).
#[derive(Debug, Clone, FromRow)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub difficulty: Option<String>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outbound JSON shape for an entry.
///
/// Uses camelCase keys and serves tags as a list, matching what the
/// browser client expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let tags = split_tags(entry.tags.as_deref());
        EntryResponse {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            status: entry.status,
            difficulty: entry.difficulty,
            tags,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Split a stored tag string into its list form.
///
/// NULL (or a string with no surviving pieces) becomes an empty list;
/// each piece is trimmed and empties are dropped, so any stored value
/// round-trips cleanly.
pub fn split_tags(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(Status::parse("planned"), Some(Status::Planned));
        assert_eq!(Status::parse("In_Progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("DONE"), Some(Status::Done));
        assert_eq!(Status::parse("UNKNOWN"), None);
    }

    #[test]
    fn status_default_is_planned() {
        assert_eq!(Status::default(), Status::Planned);
    }

    #[test]
    fn difficulty_parse_rejects_outside_set() {
        assert_eq!(Difficulty::parse("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("IMPOSSIBLE"), None);
    }

    #[test]
    fn split_tags_handles_null_and_blanks() {
        assert_eq!(split_tags(None), Vec::<String>::new());
        assert_eq!(split_tags(Some("prisma,sqlite")), vec!["prisma", "sqlite"]);
        assert_eq!(split_tags(Some(" a , ,b ,")), vec!["a", "b"]);
    }
}
