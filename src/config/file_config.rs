use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,

    // Generation backend settings
    pub generation: Option<GenerationFileConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct GenerationFileConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Static API key. Takes precedence over the command and env sources.
    pub api_key: Option<String>,
    /// Shell command that prints the API key (for rotating tokens).
    pub api_key_command: Option<String>,
    /// Environment variable to read the key from. Defaults to GEMINI_API_KEY.
    pub api_key_env: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
