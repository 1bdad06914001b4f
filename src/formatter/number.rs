//! Text rendering of numbers
//!
//! Raw output prints numbers the way `printf("%.10g")` does: rounded to ten
//! significant digits with trailing zeros removed, switching to exponent form
//! only for very large or very small magnitudes. JSON output uses the
//! shortest digits that read back to the same float.

/// Maximum number of significant digits kept
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Format a float with at most [`SIGNIFICANT_DIGITS`] significant digits
pub fn format_significant(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:.9e}` rounds to exactly ten significant digits, e.g. "-1.234500000e-7"
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return scientific,
    };

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        push_exponent_form(&mut out, digits, exponent);
    } else {
        push_fixed_form(&mut out, digits, exponent + 1);
    }
    out
}

fn push_exponent_form(out: &mut String, digits: &str, exponent: i32) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exponent.unsigned_abs()));
}

/// `point` is the position of the decimal point relative to the first digit
fn push_fixed_form(out: &mut String, digits: &str, point: i32) {
    if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(digits);
        return;
    }

    let point = point as usize;
    if point >= digits.len() {
        out.push_str(digits);
        out.push_str(&"0".repeat(point - digits.len()));
    } else {
        out.push_str(&digits[..point]);
        out.push('.');
        out.push_str(&digits[point..]);
    }
}

/// Shortest JSON text for a float
///
/// Plain decimal for magnitudes in `[1e-6, 1e21)`, so integral values carry
/// no fractional part; exponent form (`1e+21`, `1.5e-7`) outside that range.
pub fn format_float64(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
