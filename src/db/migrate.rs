//! Schema migration engine. Ensure-style: every migration is safe to run
//! repeatedly, and `run_pending_migrations` is the single entry point the
//! rest of the crate calls.

use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the submissions table and its child row tables.
fn ensure_submission_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS submissions (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            docket                TEXT NOT NULL UNIQUE,
            opkey                 INTEGER,
            operator_name         TEXT NOT NULL DEFAULT '',
            location_key          INTEGER,
            location_name         TEXT NOT NULL DEFAULT '',
            client                TEXT NOT NULL DEFAULT '',
            shift_date            TEXT,
            shift_type            TEXT NOT NULL DEFAULT 'day' CHECK(shift_type IN ('day','night')),
            has_breakdown         INTEGER NOT NULL DEFAULT 0,
            breakdown_details     TEXT NOT NULL DEFAULT '',
            works_description     TEXT NOT NULL DEFAULT '',
            contractor_rep_name   TEXT NOT NULL DEFAULT '',
            contractor_rep_date   TEXT,
            contractor_rep_pos    TEXT NOT NULL DEFAULT '',
            contractor_signature  TEXT,
            client_rep_name       TEXT NOT NULL DEFAULT '',
            client_rep_date       TEXT,
            client_rep_pos        TEXT NOT NULL DEFAULT '',
            client_signature      TEXT,
            submitted_at          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_submissions_shift_date ON submissions(shift_date);

        CREATE TABLE IF NOT EXISTS submission_equipment (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            submission_id INTEGER NOT NULL REFERENCES submissions(id) ON DELETE CASCADE,
            equipment_key INTEGER,
            equipment_name TEXT NOT NULL DEFAULT '',
            description   TEXT NOT NULL DEFAULT '',
            hrs_start     REAL,
            hrs_finish    REAL,
            total_hrs     REAL,
            row_order     INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_equipment_submission ON submission_equipment(submission_id);

        CREATE TABLE IF NOT EXISTS submission_personnel (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            submission_id INTEGER NOT NULL REFERENCES submissions(id) ON DELETE CASCADE,
            person_name   TEXT NOT NULL,
            time_start    TEXT,
            time_finish   TEXT,
            break_hrs     REAL NOT NULL DEFAULT 0,
            total_hrs     REAL,
            row_order     INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_personnel_submission ON submission_personnel(submission_id);
        "#,
    )?;
    Ok(())
}

fn ensure_snapshot_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS inventory_snapshots (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            snapshot_date TEXT NOT NULL,
            kind          TEXT NOT NULL,
            payload       TEXT NOT NULL,
            captured_at   TEXT NOT NULL,
            UNIQUE(snapshot_date, kind)
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Early databases stored only `equipment_name`; the description column
/// was added when the form gained a separate description cell.
fn migrate_add_equipment_description(conn: &Connection) -> Result<()> {
    if has_column(conn, "submission_equipment", "description")? {
        return Ok(());
    }

    warning("Adding 'description' column to submission_equipment...");

    conn.execute_batch(
        "ALTER TABLE submission_equipment ADD COLUMN description TEXT NOT NULL DEFAULT '';",
    )?;
    Ok(())
}

/// Run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_submission_tables(conn)?;
    ensure_snapshot_table(conn)?;
    migrate_add_equipment_description(conn)?;
    Ok(())
}
