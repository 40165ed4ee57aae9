use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::http;
use crate::http::state::AppState;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Handle the `serve` command: build the runtime, open the database,
/// run migrations, then serve until shutdown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .ok();

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let bind_addr = bind.clone().unwrap_or_else(|| cfg.bind_addr.clone());
        let state = AppState::new(pool, cfg.clone());

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Other(format!("cannot start runtime: {e}")))?;
        runtime.block_on(http::serve(state, &bind_addr))?;
    }

    Ok(())
}
