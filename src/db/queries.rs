//! Submission persistence and read-only projections.
//!
//! The submit path is one all-or-nothing transaction per call: upsert the
//! scalar row keyed by docket, drop every child row, reinsert the
//! incoming arrays in order. Nothing partial ever becomes visible, and
//! retrying the same docket is idempotent.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{EquipmentEntry, PersonnelEntry};
use crate::models::report::{ShiftReport, StoredSubmission};
use crate::models::shift_type::ShiftType;
use crate::models::snapshot::InventorySnapshot;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};

fn date_to_db(d: Option<NaiveDate>) -> Option<String> {
    d.map(|d| d.format("%Y-%m-%d").to_string())
}

fn date_from_db(s: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    match s {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(raw)),
                )
            }),
    }
}

fn time_to_db(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

fn time_from_db(s: Option<String>) -> rusqlite::Result<Option<NaiveTime>> {
    match s {
        None => Ok(None),
        Some(raw) => NaiveTime::parse_from_str(&raw, "%H:%M")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTime(raw)),
                )
            }),
    }
}

/// Upsert one full shift report. Returns the persisted row id and the
/// docket so callers can confirm success.
pub fn upsert_submission(conn: &mut Connection, report: &ShiftReport) -> AppResult<(i64, String)> {
    let tx = conn.transaction()?;

    let id: i64 = tx.query_row(
        r#"
        INSERT INTO submissions (
            docket, opkey, operator_name, location_key, location_name,
            client, shift_date, shift_type, has_breakdown, breakdown_details,
            works_description,
            contractor_rep_name, contractor_rep_date, contractor_rep_pos, contractor_signature,
            client_rep_name, client_rep_date, client_rep_pos, client_signature,
            submitted_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)
        ON CONFLICT (docket) DO UPDATE SET
            opkey = excluded.opkey,
            operator_name = excluded.operator_name,
            location_key = excluded.location_key,
            location_name = excluded.location_name,
            client = excluded.client,
            shift_date = excluded.shift_date,
            shift_type = excluded.shift_type,
            has_breakdown = excluded.has_breakdown,
            breakdown_details = excluded.breakdown_details,
            works_description = excluded.works_description,
            contractor_rep_name = excluded.contractor_rep_name,
            contractor_rep_date = excluded.contractor_rep_date,
            contractor_rep_pos = excluded.contractor_rep_pos,
            contractor_signature = excluded.contractor_signature,
            client_rep_name = excluded.client_rep_name,
            client_rep_date = excluded.client_rep_date,
            client_rep_pos = excluded.client_rep_pos,
            client_signature = excluded.client_signature,
            submitted_at = excluded.submitted_at
        RETURNING id
        "#,
        params![
            report.docket,
            report.opkey,
            report.operator_name,
            report.location_key,
            report.location_name,
            report.client,
            date_to_db(report.shift_date),
            report.shift.to_db_str(),
            report.has_breakdown as i32,
            report.breakdown_details,
            report.works_description,
            report.contractor_rep.name,
            date_to_db(report.contractor_rep.date),
            report.contractor_rep.position,
            report.contractor_rep.image,
            report.client_rep.name,
            date_to_db(report.client_rep.date),
            report.client_rep.position,
            report.client_rep.image,
            report.submitted_at,
        ],
        |row| row.get(0),
    )?;

    // Full child-row replacement: delete then reinsert in order.
    tx.execute(
        "DELETE FROM submission_equipment WHERE submission_id = ?1",
        [id],
    )?;
    tx.execute(
        "DELETE FROM submission_personnel WHERE submission_id = ?1",
        [id],
    )?;

    let mut order = 0;
    for entry in &report.equipment {
        // Blank placeholder rows are skipped, not errors.
        if entry.is_blank() {
            continue;
        }
        order += 1;
        tx.execute(
            r#"
            INSERT INTO submission_equipment
                (submission_id, equipment_key, equipment_name, description,
                 hrs_start, hrs_finish, total_hrs, row_order)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                id,
                entry.asset_key,
                entry.asset_id,
                entry.description,
                entry.hrs_start,
                entry.hrs_finish,
                entry.total_hrs,
                order,
            ],
        )?;
    }

    let mut order = 0;
    for entry in &report.personnel {
        if entry.is_blank() {
            continue;
        }
        order += 1;
        tx.execute(
            r#"
            INSERT INTO submission_personnel
                (submission_id, person_name, time_start, time_finish,
                 break_hrs, total_hrs, row_order)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                id,
                entry.name,
                time_to_db(entry.time_start),
                time_to_db(entry.time_finish),
                entry.break_hrs,
                entry.total_hrs,
                order,
            ],
        )?;
    }

    tx.commit()?;
    Ok((id, report.docket.clone()))
}

fn map_submission_row(row: &Row) -> rusqlite::Result<StoredSubmission> {
    let shift_str: String = row.get("shift_type")?;
    let shift = ShiftType::from_db_str(&shift_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidShiftType(shift_str)),
        )
    })?;

    Ok(StoredSubmission {
        id: row.get("id")?,
        report: ShiftReport {
            docket: row.get("docket")?,
            opkey: row.get("opkey")?,
            operator_name: row.get("operator_name")?,
            location_key: row.get("location_key")?,
            location_name: row.get("location_name")?,
            client: row.get("client")?,
            shift_date: date_from_db(row.get("shift_date")?)?,
            shift,
            has_breakdown: row.get::<_, i32>("has_breakdown")? != 0,
            breakdown_details: row.get("breakdown_details")?,
            works_description: row.get("works_description")?,
            contractor_rep: crate::models::report::SignatureBlock {
                name: row.get("contractor_rep_name")?,
                date: date_from_db(row.get("contractor_rep_date")?)?,
                position: row.get("contractor_rep_pos")?,
                image: row.get("contractor_signature")?,
            },
            client_rep: crate::models::report::SignatureBlock {
                name: row.get("client_rep_name")?,
                date: date_from_db(row.get("client_rep_date")?)?,
                position: row.get("client_rep_pos")?,
                image: row.get("client_signature")?,
            },
            equipment: Vec::new(),
            personnel: Vec::new(),
            submitted_at: row.get("submitted_at")?,
        },
    })
}

fn load_children(conn: &Connection, sub: &mut StoredSubmission) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "SELECT equipment_key, equipment_name, description, hrs_start, hrs_finish, total_hrs
         FROM submission_equipment
         WHERE submission_id = ?1
         ORDER BY row_order ASC",
    )?;
    let rows = stmt.query_map([sub.id], |row| {
        Ok(EquipmentEntry {
            asset_key: row.get(0)?,
            asset_id: row.get(1)?,
            description: row.get(2)?,
            hrs_start: row.get(3)?,
            hrs_finish: row.get(4)?,
            total_hrs: row.get(5)?,
        })
    })?;
    for r in rows {
        sub.report.equipment.push(r?);
    }

    let mut stmt = conn.prepare_cached(
        "SELECT person_name, time_start, time_finish, break_hrs, total_hrs
         FROM submission_personnel
         WHERE submission_id = ?1
         ORDER BY row_order ASC",
    )?;
    let rows = stmt.query_map([sub.id], |row| {
        Ok(PersonnelEntry {
            name: row.get(0)?,
            time_start: time_from_db(row.get(1)?)?,
            time_finish: time_from_db(row.get(2)?)?,
            break_hrs: row.get(3)?,
            total_hrs: row.get(4)?,
        })
    })?;
    for r in rows {
        sub.report.personnel.push(r?);
    }

    Ok(())
}

/// All stored submissions with nested entry arrays, newest shift first.
pub fn load_all_submissions(conn: &Connection) -> AppResult<Vec<StoredSubmission>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM submissions
         ORDER BY shift_date DESC, submitted_at DESC",
    )?;
    let rows = stmt.query_map([], map_submission_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    for sub in &mut out {
        load_children(conn, sub)?;
    }
    Ok(out)
}

pub fn load_by_docket(conn: &Connection, docket: &str) -> AppResult<Option<StoredSubmission>> {
    let mut stmt = conn.prepare("SELECT * FROM submissions WHERE docket = ?1")?;
    let mut rows = stmt.query_map([docket], map_submission_row)?;

    match rows.next() {
        Some(r) => {
            let mut sub = r?;
            load_children(conn, &mut sub)?;
            Ok(Some(sub))
        }
        None => Ok(None),
    }
}

/// Submissions for one shift date, in submission order.
pub fn load_for_date(conn: &Connection, date: NaiveDate) -> AppResult<Vec<StoredSubmission>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM submissions
         WHERE shift_date = ?1
         ORDER BY submitted_at ASC",
    )?;
    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_submission_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    for sub in &mut out {
        load_children(conn, sub)?;
    }
    Ok(out)
}

// ---------------------------
// Inventory snapshots
// ---------------------------

pub fn upsert_snapshot(
    conn: &Connection,
    date: NaiveDate,
    kind: &str,
    payload: &serde_json::Value,
    captured_at: &str,
) -> AppResult<i64> {
    let id: i64 = conn.query_row(
        r#"
        INSERT INTO inventory_snapshots (snapshot_date, kind, payload, captured_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (snapshot_date, kind) DO UPDATE SET
            payload = excluded.payload,
            captured_at = excluded.captured_at
        RETURNING id
        "#,
        params![
            date.format("%Y-%m-%d").to_string(),
            kind,
            serde_json::to_string(payload)?,
            captured_at,
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

fn map_snapshot_row(row: &Row) -> rusqlite::Result<InventorySnapshot> {
    let date_str: String = row.get("snapshot_date")?;
    let snapshot_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str)),
        )
    })?;
    let payload_raw: String = row.get("payload")?;
    let payload = serde_json::from_str(&payload_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })?;

    Ok(InventorySnapshot {
        id: row.get("id")?,
        snapshot_date,
        kind: row.get("kind")?,
        payload,
        captured_at: row.get("captured_at")?,
    })
}

pub fn load_snapshots(conn: &Connection) -> AppResult<Vec<InventorySnapshot>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM inventory_snapshots
         ORDER BY snapshot_date DESC, kind ASC",
    )?;
    let rows = stmt.query_map([], map_snapshot_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All snapshots captured for one date (one per kind).
pub fn load_snapshots_for_date(
    conn: &Connection,
    date: NaiveDate,
) -> AppResult<Vec<InventorySnapshot>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM inventory_snapshots
         WHERE snapshot_date = ?1
         ORDER BY kind ASC",
    )?;
    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_snapshot_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
