use serde_json::Value;

use crate::error::QueryJsonError;
use crate::formatter::encoder::to_json_string;
use crate::formatter::util::normalize_json_value;
use crate::formatter::Formatter;

/// Formatter for JSON output
///
/// Pretty output uses a two-space indent per nesting level. Object keys are
/// sorted in both modes and numbers print as floats, so `1.0` prints as `1`.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a JsonFormatter with the given pretty printing setting
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Compact JSON without the trailing newline
    pub(crate) fn compact(value: &Value) -> Result<String, QueryJsonError> {
        to_json_string(&normalize_json_value(value), false).map_err(QueryJsonError::Format)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, value: &Value) -> Result<String, QueryJsonError> {
        let mut output = to_json_string(&normalize_json_value(value), self.pretty)
            .map_err(QueryJsonError::Format)?;
        output.push('\n');
        Ok(output)
    }
}
