// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation record CRUD operations.

use std::str::FromStr;

use rusqlite::params;

use pictor_core::PictorError;

use crate::database::Database;
use crate::models::{GenerationRecord, Style};

const RECORD_COLUMNS: &str = "id, prompt, style, filename, created_at, score, feedback";

fn row_to_record(row: &rusqlite::Row<'_>) -> Result<GenerationRecord, rusqlite::Error> {
    let style_text: String = row.get(2)?;
    let style = Style::from_str(&style_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(GenerationRecord {
        id: row.get(0)?,
        prompt: row.get(1)?,
        style,
        filename: row.get(3)?,
        created_at: row.get(4)?,
        score: row.get(5)?,
        feedback: row.get(6)?,
    })
}

/// Insert a new record and return its assigned id.
pub async fn insert_record(
    db: &Database,
    prompt: &str,
    style: Style,
    filename: &str,
    created_at: &str,
) -> Result<i64, PictorError> {
    let prompt = prompt.to_string();
    let style = style.to_string();
    let filename = filename.to_string();
    let created_at = created_at.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO records (prompt, style, filename, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![prompt, style, filename, created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a record by id.
pub async fn get_record(db: &Database, id: i64) -> Result<Option<GenerationRecord>, PictorError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM records WHERE id = ?1"
            ))?;
            let result = stmt.query_row(params![id], row_to_record);
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List every record, newest first.
///
/// `id DESC` as the secondary key keeps the order deterministic when two
/// records share a millisecond timestamp.
pub async fn list_records(db: &Database) -> Result<Vec<GenerationRecord>, PictorError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM records ORDER BY created_at DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], |row| row_to_record(row))?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Overwrite a record's evaluation. Returns the number of rows affected
/// (zero when the id does not exist).
pub async fn update_evaluation(
    db: &Database,
    id: i64,
    score: i64,
    feedback: Option<&str>,
) -> Result<usize, PictorError> {
    let feedback = feedback.map(|s| s.to_string());
    db.connection()
        .call(move |conn| {
            let affected = conn.execute(
                "UPDATE records SET score = ?1, feedback = ?2 WHERE id = ?3",
                params![score, feedback, id],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete a record's row. Returns the number of rows affected.
pub async fn delete_record(db: &Database, id: i64) -> Result<usize, PictorError> {
    db.connection()
        .call(move |conn| {
            let affected = conn.execute("DELETE FROM records WHERE id = ?1", params![id])?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Total number of records.
pub async fn count_records(db: &Database) -> Result<i64, PictorError> {
    db.connection()
        .call(|conn| conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0)))
        .await
        .map_err(crate::database::map_tr_err)
}
