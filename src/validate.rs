//! Cheap structural checks on a query string
//!
//! Only the shape the evaluator can never accept is rejected here; full
//! grammar checking happens when the query is parsed by the engine.

/// Reasons a query string is rejected before evaluation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryCheckError {
    #[error("empty JSONPath")]
    Empty,

    #[error("JSONPath must start with '$'")]
    MissingRoot,
}

/// Root marker every query must begin with
pub const ROOT_MARKER: char = '$';

/// Reject queries that are empty or do not start at the document root
pub fn validate_query(query: &str) -> Result<(), QueryCheckError> {
    if query.is_empty() {
        return Err(QueryCheckError::Empty);
    }
    if !query.starts_with(ROOT_MARKER) {
        return Err(QueryCheckError::MissingRoot);
    }
    Ok(())
}
