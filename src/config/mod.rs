mod file_config;

pub use file_config::{FileConfig, GenerationFileConfig};

use crate::generation::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::generation::ApiKeySource;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub base_url: String,
    pub model: String,
    pub api_key_source: ApiKeySource,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        if let Some(path) = &frontend_dir_path {
            if !std::path::Path::new(path).is_dir() {
                bail!("Frontend directory does not exist: {:?}", path);
            }
        }

        let gen_file = file.generation.unwrap_or_default();

        // Key precedence: static key, then key command, then environment.
        let api_key_source = if let Some(key) = gen_file.api_key {
            ApiKeySource::Static(key)
        } else if let Some(cmd) = gen_file.api_key_command {
            ApiKeySource::Command(cmd)
        } else {
            ApiKeySource::Env(
                gen_file
                    .api_key_env
                    .unwrap_or_else(|| "GEMINI_API_KEY".to_string()),
            )
        };

        let generation = GenerationSettings {
            base_url: gen_file
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: gen_file
                .model
                .or_else(|| cli.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key_source,
        };

        Ok(AppConfig {
            port,
            logging_level,
            frontend_dir_path,
            generation,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
