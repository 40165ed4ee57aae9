use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftdocket
/// Daily shift report service over SQLite
#[derive(Parser)]
#[command(
    name = "shiftdocket",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily shift report service: docketed hour logging, reporting and inventory snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Run the HTTP server
    Serve {
        #[arg(long = "bind", help = "Bind address, e.g. 127.0.0.1:3000")]
        bind: Option<String>,
    },

    /// List stored submissions
    List {
        #[arg(long = "date", help = "Only submissions for this shift date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
