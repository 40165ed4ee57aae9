#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use shiftdocket::config::Config;
use shiftdocket::db::initialize::init_db;
use shiftdocket::db::pool::DbPool;
use shiftdocket::http::build_router;
use shiftdocket::http::state::AppState;
use shiftdocket::models::entry::{EquipmentEntry, PersonnelEntry};
use shiftdocket::models::report::ShiftReport;
use shiftdocket::models::shift_type::ShiftType;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub fn sd() -> Command {
    cargo_bin_cmd!("shiftdocket")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftdocket.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Open and initialize a fresh database.
pub fn open_db(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

pub fn parse_hm(s: &str) -> chrono::NaiveTime {
    chrono::NaiveTime::parse_from_str(s, "%H:%M").expect("valid HH:MM")
}

pub fn parse_ymd(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// A fully-populated report for one docket/date.
pub fn sample_report(docket: &str, shift_date: &str) -> ShiftReport {
    ShiftReport {
        docket: docket.to_string(),
        opkey: Some(12),
        operator_name: "Dana Reeve".to_string(),
        location_key: Some(3),
        location_name: "North Pit".to_string(),
        client: "Stockyard Holdings".to_string(),
        shift_date: Some(parse_ymd(shift_date)),
        shift: ShiftType::Day,
        has_breakdown: false,
        breakdown_details: String::new(),
        works_description: "Haul road maintenance".to_string(),
        contractor_rep: Default::default(),
        client_rep: Default::default(),
        equipment: vec![EquipmentEntry {
            asset_key: Some(7),
            asset_id: "EX17".to_string(),
            description: "Excavator".to_string(),
            hrs_start: Some(120.0),
            hrs_finish: Some(128.5),
            total_hrs: Some(8.5),
        }],
        personnel: vec![PersonnelEntry {
            name: "Dana Reeve".to_string(),
            time_start: Some(parse_hm("08:00")),
            time_finish: Some(parse_hm("17:30")),
            break_hrs: 0.5,
            total_hrs: Some(9.0),
        }],
        submitted_at: "2026-06-03T17:45:00+09:30".to_string(),
    }
}

/// Config pointing every external path at throwaway locations; the
/// inventory upstream is a port nothing listens on.
pub fn test_config(db_path: &str, static_dir: &str) -> Config {
    Config {
        database: db_path.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        static_dir: static_dir.to_string(),
        data_dir: static_dir.to_string(),
        inventory_api_base: "http://127.0.0.1:9/api".to_string(),
        local_store: None,
    }
}

/// Spin up the full router on an ephemeral port and return its address.
pub async fn spawn_server(cfg: Config) -> SocketAddr {
    let pool = DbPool::new(&cfg.database).expect("open pool");
    init_db(&pool.conn).expect("init db");

    let app = build_router(AppState::new(pool, cfg));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}
