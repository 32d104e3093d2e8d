//! Error types for hbk-roles
//!
//! Role queries themselves never fail. These variants cover the edges that
//! touch files or text: policy loading and user record parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HbkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported record format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, HbkError>;
