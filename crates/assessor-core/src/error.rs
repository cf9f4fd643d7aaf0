use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("environment variable not found: {0}")]
    EnvVarNotFound(String),
}

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read reference dataset: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse reference dataset: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("reference entry has an empty id")]
    EmptyId,

    #[error("duplicate reference id: {0}")]
    DuplicateId(String),
}

impl From<ConfigError> for ReferenceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::FileRead(e) => ReferenceError::FileRead(e),
            ConfigError::TomlParse(e) => ReferenceError::TomlParse(e),
            ConfigError::EnvVarNotFound(name) => ReferenceError::EnvVarNotFound(name),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("transcriber initialization failed: {0}")]
    InitializationFailed(String),

    #[error("transcription not found: {0}")]
    NotFound(String),

    #[error("failed to read transcription: {0}")]
    Unreadable(String),

    #[error("malformed transcription: {0}")]
    Malformed(String),

    #[error("transcription provider not found: {0}")]
    ProviderNotFound(String),
}

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("similarity scorer initialization failed: {0}")]
    InitializationFailed(String),

    #[error("no similarity score for: {0}")]
    Missing(String),

    #[error("similarity provider not found: {0}")]
    ProviderNotFound(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report sink initialization failed: {0}")]
    InitializationFailed(String),

    #[error("failed to write result: {0}")]
    WriteFailed(String),

    #[error("report sink not found: {0}")]
    NotFound(String),
}
