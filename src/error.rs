use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapfeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SnapfeedError>;
