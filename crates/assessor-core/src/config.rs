use crate::error::ConfigError;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default = "default_transcription")]
    pub transcription: ProviderConfig,

    #[serde(default = "default_similarity")]
    pub similarity: ProviderConfig,

    #[serde(default)]
    pub report: Vec<ReportSinkConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BatchConfig {
    #[serde(default = "default_references")]
    pub references: PathBuf,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default)]
    pub inputs: Vec<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            references: default_references(),
            concurrency: default_concurrency(),
            inputs: Vec::new(),
        }
    }
}

/// Selects an external provider by name and carries its own options table.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub provider: String,

    #[serde(default = "empty_table")]
    pub options: toml::Value,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportSinkConfig {
    pub plugin: String,

    #[serde(flatten)]
    pub extra: toml::Value,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_references() -> PathBuf {
    PathBuf::from("references.toml")
}

fn default_concurrency() -> usize {
    4
}

fn default_transcription() -> ProviderConfig {
    ProviderConfig {
        provider: "whisper-json".to_string(),
        options: empty_table(),
    }
}

fn default_similarity() -> ProviderConfig {
    ProviderConfig {
        provider: "constant".to_string(),
        options: empty_table(),
    }
}

fn empty_table() -> toml::Value {
    toml::Value::Table(Default::default())
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

/// Interpolate `${VAR}` patterns with environment variable values.
pub fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut result = input.to_string();

    for cap in env_var_pattern().captures_iter(input) {
        let var_name = &cap[1];
        let val = std::env::var(var_name)
            .map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;
        result = result.replace(&cap[0], &val);
    }

    Ok(result)
}

impl AppConfig {
    /// Load configuration from a TOML file, with environment variable interpolation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let interpolated = interpolate_env_vars(s)?;
        let config: AppConfig = toml::from_str(&interpolated)?;
        Ok(config)
    }
}
