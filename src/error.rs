use std::path::PathBuf;
use thiserror::Error;

use crate::validate::QueryCheckError;

/// Custom error type for query_json operations
///
/// The `Display` output of each variant is the complete diagnostic line
/// written to stderr.
#[derive(Debug, Error)]
pub enum QueryJsonError {
    #[error("Error: --query parameter is required")]
    MissingQuery,

    #[error("Error: Invalid JSONPath query: {0}")]
    InvalidQuery(#[from] QueryCheckError),

    #[error("Error opening file: {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing JSON: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Error parsing JSONPath: {0}")]
    QuerySyntax(#[source] serde_json_path::ParseError),

    #[error("Error formatting output: {0}")]
    Format(#[source] serde_json::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),
}
