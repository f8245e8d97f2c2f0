/// Formats a calculation value for display.
///
/// Integral values keep one decimal place (`9.0`), fractional values use the
/// shortest round-trip form, and very large or very small magnitudes switch
/// to exponent form with a signed, two-digit exponent (`1e+16`, `2.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => text,
    }
}
