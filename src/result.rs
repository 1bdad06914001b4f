use serde_json::Value;

/// Collapse an evaluator's match list into the single value that gets printed
///
/// - no matches: `null`
/// - one match: that value, unwrapped
/// - several matches: an array of them, in match order
pub fn collapse_matches(mut matches: Vec<&Value>) -> Value {
    match matches.len() {
        0 => Value::Null,
        1 => matches.swap_remove(0).clone(),
        _ => Value::Array(matches.into_iter().cloned().collect()),
    }
}
