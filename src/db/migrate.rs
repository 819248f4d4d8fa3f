use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure the table that tracks applied migrations exists.
fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migrations (
            version    TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare("SELECT 1 FROM migrations WHERE version = ?1 LIMIT 1")?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO migrations (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Check if the `records` table exists.
fn records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `records` table has an `entered_payment` column.
fn records_has_payment_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "entered_payment" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the flat `records` table: one row per (user, date, category).
fn create_records_table(conn: &Connection) -> Result<()> {
    let version = "20240102_0001_create_records";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !records_table_exists(conn)? {
        conn.execute_batch(
            r#"
            CREATE TABLE records (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                user            TEXT NOT NULL,
                date            TEXT NOT NULL,
                category        TEXT NOT NULL,
                hours           REAL NOT NULL DEFAULT 0,
                last_updated    TEXT NOT NULL,
                entered_payment TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_records_user_date ON records(user, date);
            "#,
        )?;
        success("Created records table.");
    }

    mark_applied(conn, version)
}

/// Tables created before payment tracking lack `entered_payment`.
fn migrate_add_entered_payment(conn: &Connection) -> Result<()> {
    let version = "20240415_0002_add_entered_payment";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !records_has_payment_column(conn)? {
        warning("Adding 'entered_payment' column to records table...");
        conn.execute(
            "ALTER TABLE records ADD COLUMN entered_payment TEXT NOT NULL DEFAULT ''",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'entered_payment' to records table",
            version
        ));
    }

    mark_applied(conn, version)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_migrations_table(conn)?;
    create_records_table(conn)?;
    migrate_add_entered_payment(conn)?;
    Ok(())
}
