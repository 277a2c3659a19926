use crate::export::{ExportFormat, ExportTable};
use clap::{Parser, Subcommand};

/// Command-line interface definition for gastracker
#[derive(Parser)]
#[command(
    name = "gastracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee login, fuel delivery and expense tracking API backed by SQLite",
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

    /// Run the HTTP API
    Serve {
        #[arg(long, help = "Address to bind (default from config: 0.0.0.0)")]
        host: Option<String>,

        #[arg(long, help = "Port to listen on (default from config: 5001)")]
        port: Option<u16>,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Database maintenance (integrity checks, stats, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },

    /// Export dashboard data
    Export {
        #[arg(long, value_enum)]
        table: ExportTable,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
