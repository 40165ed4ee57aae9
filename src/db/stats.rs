use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let submissions: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))?;
    let equipment_rows: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM submission_equipment", [], |row| {
                row.get(0)
            })?;
    let personnel_rows: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM submission_personnel", [], |row| {
                row.get(0)
            })?;
    let snapshots: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM inventory_snapshots", [], |row| {
                row.get(0)
            })?;

    println!(
        "{}• Submissions:{} {}{}{}",
        CYAN, RESET, GREEN, submissions, RESET
    );
    println!("{}• Equipment rows:{} {}", CYAN, RESET, equipment_rows);
    println!("{}• Personnel rows:{} {}", CYAN, RESET, personnel_rows);
    println!("{}• Inventory snapshots:{} {}", CYAN, RESET, snapshots);

    //
    // 3) SHIFT DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT shift_date FROM submissions WHERE shift_date IS NOT NULL ORDER BY shift_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT shift_date FROM submissions WHERE shift_date IS NOT NULL ORDER BY shift_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Shift date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
