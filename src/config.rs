//! Service configuration
//!
//! Loaded once at process start from command-line flags or environment
//! variables; a missing DATABASE_URL aborts startup before anything else
//! runs.

use clap::Parser;

/// Learning journal web service
#[derive(Parser, Debug, Clone)]
#[command(name = "journal", version)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Database connection string, e.g. sqlite://journal.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Allowed CORS origin (all origins when unset)
    #[arg(long, env = "CLIENT_ORIGIN")]
    pub client_origin: Option<String>,
}

impl Config {
    /// Parse configuration from argv + environment, exiting with a usage
    /// error when required values are missing
    pub fn load() -> Self {
        Config::parse()
    }
}
