//! Smart number formatting shared by every stage that renders a value.
//!
//! Abbreviates with K/M/B suffixes, renders percentages, currency and
//! signed deltas, and trims trailing zeros so "23.0%" reads "23%".

const SUFFIXES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Render `value` with at most `max_decimals` decimals and no trailing zeros.
pub fn trim_decimal(value: f64, max_decimals: usize) -> String {
    let mut s = format!("{:.*}", max_decimals, value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Decimals needed to show `value` with at least one decimal and, below
/// one, two significant digits: 14.25 → 1, 0.5 → 2, 0.035 → 3.
fn rate_decimals(value: f64) -> usize {
    let abs = value.abs();
    if abs >= 1.0 || abs == 0.0 || !abs.is_finite() {
        return 1;
    }
    (1 - abs.log10().floor() as i64).clamp(1, 12) as usize
}

/// Abbreviate a magnitude: 4_200_000 → "4.2M", 1_500 → "1.5K", 950 → "950".
pub fn abbreviate(value: f64) -> String {
    let abs = value.abs();
    for (i, (divisor, suffix)) in SUFFIXES.iter().enumerate() {
        if abs >= *divisor {
            let rendered = trim_decimal(value / divisor, 1);
            // 999_960 renders as "1000K"; promote to the next suffix.
            if rendered.trim_start_matches('-') == "1000" && i > 0 {
                let (bigger, bigger_suffix) = SUFFIXES[i - 1];
                return format!("{}{}", trim_decimal(value / bigger, 1), bigger_suffix);
            }
            return format!("{rendered}{suffix}");
        }
    }
    trim_decimal(value, 1)
}

/// Render a percentage: 23.0 → "23%", 14.25 → "14.2%", 0.04 → "0.04%".
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_decimal(value, rate_decimals(value)))
}

/// Render a currency amount with an abbreviated magnitude: "$4.2M".
pub fn format_currency(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{}{}", symbol, abbreviate(-value))
    } else {
        format!("{}{}", symbol, abbreviate(value))
    }
}

/// Render a delta with its unit. `explicit_sign` keeps a leading "+"
/// for positive values, matching how the source wrote it.
pub fn format_delta(value: f64, unit: &str, explicit_sign: bool) -> String {
    let number = trim_decimal(value, rate_decimals(value));
    let signed = if explicit_sign && value > 0.0 {
        format!("+{number}")
    } else {
        number
    };
    if unit == "%" {
        format!("{signed}%")
    } else {
        format!("{signed} {unit}")
    }
}
