//! Axis Label Formatter
//! Tick labels: plain decimals for moderate values, scientific notation beyond 1000.

/// Values whose magnitude exceeds this are written in scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e3;

/// Format a tick value for display.
///
/// `12.345` becomes `"12.35"`, `1500` becomes `"1.5E3"`, `0` becomes `"0"`.
pub fn format_tick(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    if value.abs() > SCIENTIFIC_THRESHOLD {
        format_scientific(value)
    } else {
        format_fixed(value)
    }
}

/// Read a tick label back. Lossy; anything unparsable is zero.
pub fn parse_tick(label: &str) -> f64 {
    label.trim().parse::<f64>().unwrap_or(0.0)
}

fn format_fixed(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = trim_fraction(&formatted);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_scientific(value: f64) -> String {
    // Rust prints e.g. "1.50e3" / "-2.00e-5"
    let formatted = format!("{:.2e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let mantissa = trim_fraction(mantissa);
    if exponent == "0" {
        mantissa.to_string()
    } else {
        format!("{}E{}", mantissa, exponent)
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_values() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(12.345), "12.35");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-40.0), "-40");
        assert_eq!(format_tick(1000.0), "1000");
        assert_eq!(format_tick(-0.001), "0");
    }

    #[test]
    fn scientific_values() {
        assert_eq!(format_tick(1500.0), "1.5E3");
        assert_eq!(format_tick(-25_000.0), "-2.5E4");
        assert_eq!(format_tick(1001.0), "1E3");
        assert_eq!(format_tick(123_456_789.0), "1.23E8");
        assert_eq!(format_tick(1e30), "1E30");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_tick(f64::NAN), "NaN");
        assert_eq!(format_tick(f64::INFINITY), "∞");
        assert_eq!(format_tick(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn parse_back_is_lossy() {
        assert_eq!(parse_tick("1.5E3"), 1500.0);
        assert_eq!(parse_tick("12.35"), 12.35);
        assert_eq!(parse_tick("not a number"), 0.0);
        assert_eq!(parse_tick(""), 0.0);
    }
}
