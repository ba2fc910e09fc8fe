use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nagma_server::config::{AppConfig, CliConfig, FileConfig};
use nagma_server::generation::GeminiClient;
use nagma_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Generation model to use.
    #[clap(long)]
    pub model: Option<String>,

    /// Path to a TOML config file. Values in it override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path).context("Failed to load config file")?),
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
        model: cli_args.model,
    };

    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    let generation = Arc::new(GeminiClient::new(
        app_config.generation.base_url.clone(),
        app_config.generation.model.clone(),
        app_config.generation.api_key_source.clone(),
    ));

    let server_config = ServerConfig {
        port: app_config.port,
        requests_logging_level: app_config.logging_level,
        frontend_dir_path: app_config.frontend_dir_path,
    };

    info!(
        port = app_config.port,
        model = %app_config.generation.model,
        "Starting server"
    );

    run_server(server_config, generation).await
}
