//! Formatter module for printing query results
//!
//! Results are rendered either as JSON (pretty or compact, with object keys
//! sorted and numbers printed as floats) or in raw mode, where scalars are
//! printed without JSON quoting. Every formatter returns the complete output text, newline-terminated.

mod encoder;
mod json;
mod number;
mod raw;
mod util;

pub use json::JsonFormatter;
pub use number::{format_float64, format_significant};
pub use raw::RawFormatter;
pub use util::normalize_json_value;

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::error::QueryJsonError;

/// Trait for formatting a query result
pub trait Formatter {
    /// Format the value and return the text to print
    fn format(&self, value: &Value) -> Result<String, QueryJsonError>;
}

/// Factory function to create a formatter based on output options
pub fn create_formatter(options: OutputOptions) -> Box<dyn Formatter> {
    if options.raw {
        Box::new(RawFormatter::new(options.pretty))
    } else {
        Box::new(JsonFormatter::new(options.pretty))
    }
}
