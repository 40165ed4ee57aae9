use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database path.
    pub database: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Directory served as the client application shell.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Directory holding the reference catalogs (operators, sites,
    /// equipment) as JSON arrays.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Base URL of the third-party inventory summary API.
    #[serde(default = "default_inventory_api_base")]
    pub inventory_api_base: String,
    /// Client-local key-value store file (operator lock, drafts).
    #[serde(default)]
    pub local_store: Option<String>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_static_dir() -> String {
    "public".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_inventory_api_base() -> String {
    "http://127.0.0.1:9700/api".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            data_dir: default_data_dir(),
            inventory_api_base: default_inventory_api_base(),
            local_store: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftdocket")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftdocket")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftdocket.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftdocket.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and replaced by defaults; startup is
    /// never blocked by bad local state.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("⚠️  Malformed config file {}: {e}", path.display());
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
