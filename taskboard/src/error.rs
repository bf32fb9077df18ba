//! Error types for board construction and configuration
//!
//! Board operations themselves never fail: a gesture that cannot be applied
//! yields an unchanged board. These errors cover building a board from
//! caller-supplied columns or a config file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board construction and config loading
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur while building a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// A board needs at least one column
    #[error("board has no columns")]
    NoColumns,

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}
