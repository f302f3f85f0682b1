use crate::entry::{Entry, EntryType, NewEntry};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Create the entries table if it does not exist.
pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            value REAL NOT NULL,
            type  TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    let kind: String = row.get(3)?;
    let entry_type = EntryType::parse(&kind).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown entry type: {kind}").into(),
        )
    })?;

    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        value: row.get(2)?,
        entry_type,
    })
}

/// Fetch every entry, in the store's natural return order.
pub fn list_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare("SELECT id, title, value, type FROM entries")?;

    let entries = stmt
        .query_map([], row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

/// Insert a new entry and return the stored row, including the generated id.
pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> Result<Entry> {
    let entry = conn.query_row(
        "INSERT INTO entries (title, value, type) VALUES (?1, ?2, ?3)
         RETURNING id, title, value, type",
        params![entry.title, entry.value, entry.entry_type.as_str()],
        row_to_entry,
    )?;

    Ok(entry)
}

/// Look up a single entry by id. `None` when no row matches.
pub fn get_entry(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    let entry = conn
        .query_row(
            "SELECT id, title, value, type FROM entries WHERE id = ?1",
            params![id],
            row_to_entry,
        )
        .optional()?;

    Ok(entry)
}

/// Overwrite all three mutable fields on the row matching `id` and return
/// the updated row. `None` when no row matches.
pub fn update_entry(conn: &Connection, id: i64, entry: &NewEntry) -> Result<Option<Entry>> {
    let entry = conn
        .query_row(
            "UPDATE entries SET title = ?1, value = ?2, type = ?3 WHERE id = ?4
             RETURNING id, title, value, type",
            params![entry.title, entry.value, entry.entry_type.as_str(), id],
            row_to_entry,
        )
        .optional()?;

    Ok(entry)
}

/// Remove the row matching `id` and return it as it existed immediately
/// before deletion. `None` when no row matches.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    let entry = conn
        .query_row(
            "DELETE FROM entries WHERE id = ?1
             RETURNING id, title, value, type",
            params![id],
            row_to_entry,
        )
        .optional()?;

    Ok(entry)
}
