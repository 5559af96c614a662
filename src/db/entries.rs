//! Entry repository
//!
//! Single-row CRUD over the entries table. Ids and timestamps are
//! generated here at write time; a missing row on get/update/delete
//! surfaces as `Error::NotFound`, distinct from every other failure.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Difficulty, Entry, Status};

/// Fields for a new entry, already validated and normalized.
/// Absent request fields have had their defaults applied.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub difficulty: Option<Difficulty>,
    pub tags: Option<String>,
}

/// Partial update, already validated and normalized.
///
/// Title is always written. For the remaining fields the outer Option
/// encodes presence: `None` excludes the column from the UPDATE entirely,
/// `Some(None)` writes NULL (explicit clear), `Some(Some(v))` writes v.
#[derive(Debug, Clone)]
pub struct EntryChanges {
    pub title: String,
    pub description: Option<Option<String>>,
    pub status: Option<Status>,
    pub difficulty: Option<Option<Difficulty>>,
    pub tags: Option<Option<String>>,
}

/// Insert a new entry and return the stored row
pub async fn create(db: &SqlitePool, new: NewEntry) -> Result<Entry> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO entries (id, title, description, status, difficulty, tags, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.status.as_str())
    .bind(new.difficulty.map(Difficulty::as_str))
    .bind(&new.tags)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;

    get(db, &id).await
}

/// Fetch one entry by id
pub async fn get(db: &SqlitePool, id: &str) -> Result<Entry> {
    sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(Error::NotFound)
}

/// List all entries, newest first
pub async fn list(db: &SqlitePool) -> Result<Vec<Entry>> {
    let entries = sqlx::query_as::<_, Entry>("SELECT * FROM entries ORDER BY created_at DESC")
        .fetch_all(db)
        .await?;
    Ok(entries)
}

/// Apply a partial update and return the stored row.
///
/// The SET list is built dynamically so that fields absent from the
/// request never appear in the statement; their stored values are
/// untouched rather than rewritten.
pub async fn update(db: &SqlitePool, id: &str, changes: EntryChanges) -> Result<Entry> {
    let now = Utc::now();

    let mut sets = vec!["title = ?", "updated_at = ?"];
    if changes.description.is_some() {
        sets.push("description = ?");
    }
    if changes.status.is_some() {
        sets.push("status = ?");
    }
    if changes.difficulty.is_some() {
        sets.push("difficulty = ?");
    }
    if changes.tags.is_some() {
        sets.push("tags = ?");
    }

    let sql = format!("UPDATE entries SET {} WHERE id = ?", sets.join(", "));

    // Binds must follow the same order the SET fragments were pushed
    let mut query = sqlx::query(&sql).bind(&changes.title).bind(now);
    if let Some(description) = &changes.description {
        query = query.bind(description);
    }
    if let Some(status) = changes.status {
        query = query.bind(status.as_str());
    }
    if let Some(difficulty) = changes.difficulty {
        query = query.bind(difficulty.map(Difficulty::as_str));
    }
    if let Some(tags) = &changes.tags {
        query = query.bind(tags);
    }

    let result = query.bind(id).execute(db).await?;
    if result.rows_affected() == 0 {
        return Err(Error::NotFound);
    }

    get(db, id).await
}

/// Delete one entry by id
pub async fn delete(db: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM entries WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound);
    }
    Ok(())
}
