//! query_json - evaluate JSONPath queries against JSON files
//!
//! The library holds the whole pipeline behind the `query_json` binary:
//! query pre-check, document loading, evaluation and output formatting.
//!
//! # Example
//!
//! ```rust,no_run
//! use query_json::{run_query, OutputOptions};
//! use std::path::Path;
//!
//! let output = run_query("$.users[*].name", Path::new("data.json"), OutputOptions::default())?;
//! print!("{output}");
//! # Ok::<(), query_json::QueryJsonError>(())
//! ```

use std::path::Path;
use tracing::debug;

pub use cli::{Args, OutputOptions};
pub use engine::{JsonPathEngine, QueryEngine};
pub use error::QueryJsonError;
pub use formatter::create_formatter;
pub use loader::load_json_file;
pub use result::collapse_matches;
pub use validate::{validate_query, QueryCheckError};
pub use version::BuildInfo;

pub mod cli;
pub mod engine;
mod error;
pub mod formatter;
mod loader;
mod result;
mod validate;
mod version;

/// Run a query against a file with the JSONPath engine and return the text to print
pub fn run_query(
    query: &str,
    path: &Path,
    options: OutputOptions,
) -> Result<String, QueryJsonError> {
    run_query_with(&JsonPathEngine, query, path, options)
}

/// Run a query with the given engine
///
/// The query is checked before the file is touched. Nothing is written; the
/// caller prints the returned text only when every stage succeeded.
pub fn run_query_with<E: QueryEngine>(
    engine: &E,
    query: &str,
    path: &Path,
    options: OutputOptions,
) -> Result<String, QueryJsonError> {
    if query.is_empty() {
        return Err(QueryJsonError::MissingQuery);
    }
    validate_query(query)?;
    debug!(query = %query, "query accepted");

    let document = load_json_file(path)?;

    let compiled = engine.parse(query)?;
    let matches = engine.evaluate(&compiled, &document);
    debug!(matches = matches.len(), "query evaluated");

    let value = collapse_matches(matches);
    let output = create_formatter(options).format(&value)?;
    debug!(bytes = output.len(), raw = options.raw, pretty = options.pretty, "result formatted");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::cell::Cell;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Engine matching every element of a top-level array, counting parses
    #[derive(Default)]
    struct ElementsEngine {
        parsed: Cell<usize>,
    }

    impl QueryEngine for ElementsEngine {
        type Compiled = ();

        fn parse(&self, _query: &str) -> Result<(), QueryJsonError> {
            self.parsed.set(self.parsed.get() + 1);
            Ok(())
        }

        fn evaluate<'a>(&self, _compiled: &(), document: &'a Value) -> Vec<&'a Value> {
            document
                .as_array()
                .map(|items| items.iter().collect())
                .unwrap_or_default()
        }
    }

    fn temp_json(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_single_string_match_is_quoted() {
        let file = temp_json(r#"{"test":"data"}"#);
        let output = run_query("$.test", file.path(), OutputOptions::default()).unwrap();
        assert_eq!(output, "\"data\"\n");
    }

    #[test]
    fn test_raw_names_one_per_line() {
        let file = temp_json(r#"{"users":[{"name":"Alice","age":30},{"name":"Bob","age":25}]}"#);
        let options = OutputOptions {
            pretty: true,
            raw: true,
        };
        let output = run_query("$.users[*].name", file.path(), options).unwrap();
        assert_eq!(output, "Alice\nBob\n");
    }

    #[test]
    fn test_single_filter_match_is_unwrapped() {
        let file = temp_json(r#"{"users":[{"age":30},{"age":25}]}"#);
        let options = OutputOptions {
            pretty: false,
            raw: false,
        };
        let output = run_query("$.users[?(@.age > 25)]", file.path(), options).unwrap();
        assert_eq!(output, "{\"age\":30}\n");
    }

    #[test]
    fn test_missing_field_prints_null() {
        let file = temp_json(r#"{"a":1}"#);
        let output = run_query("$.nonexistent", file.path(), OutputOptions::default()).unwrap();
        assert_eq!(output, "null\n");
    }

    #[test]
    fn test_empty_query_is_missing() {
        let result = run_query("", Path::new("unused.json"), OutputOptions::default());
        assert!(matches!(result, Err(QueryJsonError::MissingQuery)));
    }

    #[test]
    fn test_invalid_query_checked_before_file() {
        let engine = ElementsEngine::default();
        let result = run_query_with(
            &engine,
            "invalid_query",
            &PathBuf::from("/nonexistent/file.json"),
            OutputOptions::default(),
        );
        assert!(matches!(
            result,
            Err(QueryJsonError::InvalidQuery(QueryCheckError::MissingRoot))
        ));
        assert_eq!(engine.parsed.get(), 0);
    }

    #[test]
    fn test_file_errors_stop_before_parse() {
        let engine = ElementsEngine::default();
        let result = run_query_with(
            &engine,
            "$",
            &PathBuf::from("/nonexistent/file.json"),
            OutputOptions::default(),
        );
        assert!(matches!(result, Err(QueryJsonError::FileOpen { .. })));
        assert_eq!(engine.parsed.get(), 0);
    }

    #[test]
    fn test_custom_engine_results_are_collapsed() {
        let engine = ElementsEngine::default();
        let options = OutputOptions {
            pretty: false,
            raw: false,
        };

        let empty = temp_json("{}");
        let output = run_query_with(&engine, "$", empty.path(), options).unwrap();
        assert_eq!(output, "null\n");

        let single = temp_json(r#"[{"b":1,"a":2}]"#);
        let output = run_query_with(&engine, "$", single.path(), options).unwrap();
        assert_eq!(output, "{\"a\":2,\"b\":1}\n");

        let many = temp_json("[1, 2, 3]");
        let output = run_query_with(&engine, "$", many.path(), options).unwrap();
        assert_eq!(output, "[1,2,3]\n");

        assert_eq!(engine.parsed.get(), 3);
    }

    #[test]
    fn test_query_syntax_error() {
        let file = temp_json(r#"{"users":[]}"#);
        let result = run_query("$.users[invalid]", file.path(), OutputOptions::default());
        assert!(matches!(result, Err(QueryJsonError::QuerySyntax(_))));
    }
}
