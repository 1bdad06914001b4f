use serde_json::{Map, Number, Value};

/// Recursively sort a JSON value's keys alphabetically and turn every number
/// into a float
///
/// Applied before every JSON rendering so object keys come out in the same
/// order regardless of their order in the source document, and `1`, `1.0`
/// and `1e0` all print the same way.
pub fn normalize_json_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted_map = Map::with_capacity(entries.len());
            for (key, inner) in entries {
                sorted_map.insert(key.clone(), normalize_json_value(inner));
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(normalize_json_value).collect()),
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}
