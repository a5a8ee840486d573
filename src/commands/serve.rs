//! `serve` command.

use clap::Args;

use tubely_core::config::AppConfig;
use tubely_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Apply overrides and run the server until shutdown
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting Tubely v{}", env!("CARGO_PKG_VERSION"));
    tubely_api::run_server(config).await
}
