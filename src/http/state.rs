//! Shared server state. One SQLite connection behind an async mutex:
//! writes are serialized, the store's transaction is the only guard, and
//! two concurrent submits of the same docket resolve as
//! last-committed-wins.

use crate::config::Config;
use crate::db::pool::DbPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<DbPool>>,
    pub http: reqwest::Client,
    pub cfg: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, cfg: Config) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            db: Arc::new(Mutex::new(pool)),
            http,
            cfg: Arc::new(cfg),
        }
    }
}
