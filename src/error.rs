use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoScoreError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("invalid page input: {0}")]
    InvalidInput(String),

    #[error("unsupported input format: {0} (expected .toml or .json)")]
    UnsupportedInputFormat(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeoScoreError>;
