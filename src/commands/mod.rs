//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use tubely_core::config::AppConfig;
use tubely_core::error::AppError;

/// Tubely: thumbnail uploads for video records
#[derive(Debug, Parser)]
#[command(name = "tubely-server", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and <env>.toml
    #[arg(short, long = "config-dir", env = "TUBELY_CONFIG", default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load on top of default.toml
    #[arg(short, long, env = "TUBELY_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Print a signed access token for a user
    IssueToken(token::IssueTokenArgs),
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::IssueToken(args) => token::execute(args, &config),
        }
    }
}
