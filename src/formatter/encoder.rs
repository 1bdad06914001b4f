//! JSON text encoding with float-style number output
//!
//! Wraps serde_json's pretty and compact formatters, keeping their layout but
//! writing every float through [`format_float64`].

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::io;

use crate::formatter::number::format_float64;

struct FloatFormatter<F> {
    layout: F,
}

impl<F: Formatter> Formatter for FloatFormatter<F> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float64(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object_value(writer)
    }
}

/// Encode a value as JSON text, two-space indented when `pretty`
pub(crate) fn to_json_string(value: &Value, pretty: bool) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    if pretty {
        let layout = FloatFormatter {
            layout: PrettyFormatter::new(),
        };
        value.serialize(&mut Serializer::with_formatter(&mut buf, layout))?;
    } else {
        let layout = FloatFormatter {
            layout: CompactFormatter,
        };
        value.serialize(&mut Serializer::with_formatter(&mut buf, layout))?;
    }
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_layout_matches_serde_json() {
        let value = json!({"a": [1, "x", null], "b": {"c": true}, "d": []});
        assert_eq!(
            to_json_string(&value, true).unwrap(),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn test_compact_layout_matches_serde_json() {
        let value = json!({"a": [1, "x", null], "b": {"c": true}, "d": {}});
        assert_eq!(
            to_json_string(&value, false).unwrap(),
            serde_json::to_string(&value).unwrap()
        );
    }

    #[test]
    fn test_floats_use_float_text() {
        let value = json!([1.0, 100.0, 0.5, 1e21, 1.5e-7]);
        assert_eq!(
            to_json_string(&value, false).unwrap(),
            "[1,100,0.5,1e+21,1.5e-7]"
        );
    }
}
