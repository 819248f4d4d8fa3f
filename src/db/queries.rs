use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::record::TimeRecord;
use crate::utils::date::{parse_record_date, parse_timestamp};
use rusqlite::{Connection, Row, params};

/// Raw row, before decoding into a [`TimeRecord`].
///
/// Columns are read loosely: SQLite does not enforce column types, so a bad
/// value only spoils its own row.
struct RecordRow {
    id: i64,
    user: rusqlite::Result<String>,
    date: rusqlite::Result<String>,
    category: rusqlite::Result<String>,
    hours: rusqlite::Result<f64>,
    last_updated: rusqlite::Result<String>,
    entered_payment: rusqlite::Result<String>,
}

fn read_row(row: &Row) -> rusqlite::Result<RecordRow> {
    Ok(RecordRow {
        id: row.get("id")?,
        user: row.get("user"),
        date: row.get("date"),
        category: row.get("category"),
        hours: row.get("hours"),
        last_updated: row.get("last_updated"),
        entered_payment: row.get("entered_payment"),
    })
}

/// Decode a row, or explain why it cannot be used.
fn map_row(raw: RecordRow) -> Result<TimeRecord, String> {
    let id = raw.id;
    let text = |col: rusqlite::Result<String>, name: &str| {
        col.map_err(|_| format!("row {id}: {name} is not text"))
    };

    let user = text(raw.user, "user")?;

    let date = text(raw.date, "date")?;
    let date = parse_record_date(&date)
        .ok_or_else(|| format!("row {id}: invalid date '{date}'"))?;

    let category = text(raw.category, "category")?;
    let category = Category::from_db_str(&category)
        .ok_or_else(|| format!("row {id}: unknown category '{category}'"))?;

    let hours = raw
        .hours
        .map_err(|_| format!("row {id}: hours is not a number"))?;

    let last_updated = text(raw.last_updated, "last_updated")?;
    let last_updated = parse_timestamp(&last_updated)
        .ok_or_else(|| format!("row {id}: invalid timestamp '{last_updated}'"))?;

    Ok(TimeRecord {
        user,
        date,
        category,
        hours,
        last_updated,
        entered_for_payment: raw
            .entered_payment
            .ok()
            .and_then(|s| parse_timestamp(&s)),
    })
}

/// Every row of `user` (all users when `None`), paired with its id and
/// either the decoded record or the reason it was rejected.
fn scan_rows(
    conn: &Connection,
    user: Option<&str>,
) -> AppResult<Vec<(i64, Result<TimeRecord, String>)>> {
    let mut stmt = conn.prepare(
        "SELECT id, user, date, category, hours, last_updated, entered_payment
         FROM records
         WHERE ?1 IS NULL OR user = ?1
         ORDER BY user ASC, date ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![user], read_row)?;

    let mut out = Vec::new();
    for r in rows {
        let raw = r?;
        out.push((raw.id, map_row(raw)));
    }
    Ok(out)
}

/// Load every row. Undecodable rows are returned separately as messages.
pub fn load_all_records(conn: &Connection) -> AppResult<(Vec<TimeRecord>, Vec<String>)> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (_, decoded) in scan_rows(conn, None)? {
        match decoded {
            Ok(rec) => records.push(rec),
            Err(msg) => skipped.push(msg),
        }
    }

    Ok((records, skipped))
}

pub fn insert_record(conn: &Connection, rec: &TimeRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO records (user, date, category, hours, last_updated, entered_payment)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.user,
            rec.date_str(),
            rec.category.to_db_str(),
            rec.hours,
            rec.last_updated_str(),
            rec.entered_payment_str(),
        ],
    )?;
    Ok(())
}

/// Delete the rows of `user` (all users when `None`) that decode into a
/// record. Rows `load_all_records` skipped stay in place.
pub fn delete_decoded_records(conn: &Connection, user: Option<&str>) -> AppResult<usize> {
    let mut deleted = 0;
    for (id, decoded) in scan_rows(conn, user)? {
        if decoded.is_ok() {
            deleted += conn.execute("DELETE FROM records WHERE id = ?1", [id])?;
        }
    }
    Ok(deleted)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?)
}
