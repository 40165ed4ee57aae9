use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("cannot render config: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let path = Config::config_file();
            if !path.exists() {
                println!("⚠️  No config file at {}; defaults are in use.", path.display());
                return Ok(());
            }

            if cfg.database.trim().is_empty() {
                println!("❌ 'database' is empty");
            } else {
                println!("✅ database: {}", cfg.database);
            }
            println!("✅ bind_addr: {}", cfg.bind_addr);
            println!("✅ static_dir: {}", cfg.static_dir);
            println!("✅ data_dir: {}", cfg.data_dir);
            println!("✅ inventory_api_base: {}", cfg.inventory_api_base);
        }
    }

    Ok(())
}
