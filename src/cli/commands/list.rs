use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_submissions, load_for_date};
use crate::errors::{AppError, AppResult};
use crate::models::report::StoredSubmission;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let subs = match date {
            Some(raw) => {
                let d = crate::utils::date::parse_date(raw)
                    .ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
                load_for_date(&pool.conn, d)?
            }
            None => load_all_submissions(&pool.conn)?,
        };

        if subs.is_empty() {
            println!("No submissions found.");
            return Ok(());
        }

        print_submissions(&subs);
    }
    Ok(())
}

fn print_submissions(subs: &[StoredSubmission]) {
    let mut table = Table::new(vec![
        Column::new("DOCKET", 16),
        Column::new("DATE", 10),
        Column::new("OPERATOR", 20),
        Column::new("LOCATION", 20),
        Column::new("EQUIP", 6),
        Column::new("PERS", 6),
    ]);

    for sub in subs {
        let r = &sub.report;
        let eq_hrs: f64 = r.equipment.iter().filter_map(|e| e.total_hrs).sum();
        let pers_hrs: f64 = r.personnel.iter().filter_map(|p| p.total_hrs).sum();

        table.add_row(vec![
            r.docket.clone(),
            r.shift_date
                .map(crate::utils::date::format_date)
                .unwrap_or_else(|| "--".to_string()),
            r.operator_name.clone(),
            r.location_name.clone(),
            format!("{:.1}", eq_hrs),
            format!("{:.2}", pers_hrs),
        ]);
    }

    println!("{}", table.render());
    println!("{} submission(s)", subs.len());
}
