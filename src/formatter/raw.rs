use serde_json::Value;

use crate::error::QueryJsonError;
use crate::formatter::json::JsonFormatter;
use crate::formatter::number::format_significant;
use crate::formatter::Formatter;

/// Formatter for raw output
///
/// Strings are printed unquoted, numbers with up to ten significant digits
/// and booleans as `true`/`false`. Arrays print one element per line: string
/// elements bare, anything else as compact JSON. Null and objects have no raw
/// form and go through the JSON formatter.
#[derive(Debug, Clone, Copy)]
pub struct RawFormatter {
    json: JsonFormatter,
}

impl RawFormatter {
    /// Create a RawFormatter; `pretty` applies to the JSON fallback
    pub fn new(pretty: bool) -> Self {
        Self {
            json: JsonFormatter::new(pretty),
        }
    }
}

impl Formatter for RawFormatter {
    fn format(&self, value: &Value) -> Result<String, QueryJsonError> {
        let mut output = match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match n.as_f64() {
                Some(f) => format_significant(f),
                None => return self.json.format(value),
            },
            Value::Array(items) => return format_lines(items),
            Value::Null | Value::Object(_) => return self.json.format(value),
        };
        output.push('\n');
        Ok(output)
    }
}

fn format_lines(items: &[Value]) -> Result<String, QueryJsonError> {
    let mut output = String::new();
    for item in items {
        match item {
            Value::String(s) => output.push_str(s),
            other => output.push_str(&JsonFormatter::compact(other)?),
        }
        output.push('\n');
    }
    Ok(output)
}
