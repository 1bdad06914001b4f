//! Query evaluation behind a narrow interface
//!
//! The pipeline only needs two things from an evaluator: turn a query string
//! into a compiled form, and run that compiled form against a document to get
//! the ordered list of matches. [`JsonPathEngine`] provides both on top of
//! `serde_json_path`.

use serde_json::Value;
use serde_json_path::JsonPath;

use crate::error::QueryJsonError;

/// A pluggable query evaluator
pub trait QueryEngine {
    /// Compiled form of a query string
    type Compiled;

    /// Parse a query string, rejecting anything the grammar does not accept
    fn parse(&self, query: &str) -> Result<Self::Compiled, QueryJsonError>;

    /// Return every match in document order; an empty result is not an error
    fn evaluate<'a>(&self, compiled: &Self::Compiled, document: &'a Value) -> Vec<&'a Value>;
}

/// RFC 9535 JSONPath evaluator
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPathEngine;

impl QueryEngine for JsonPathEngine {
    type Compiled = JsonPath;

    fn parse(&self, query: &str) -> Result<JsonPath, QueryJsonError> {
        JsonPath::parse(query).map_err(QueryJsonError::QuerySyntax)
    }

    fn evaluate<'a>(&self, compiled: &JsonPath, document: &'a Value) -> Vec<&'a Value> {
        compiled.query(document).all()
    }
}
