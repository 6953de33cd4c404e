//! Monetary display formatting.
//!
//! Amounts are currency-agnostic numbers everywhere in the data model; only
//! rendering attaches the fixed currency code. Large totals are abbreviated
//! with metric suffixes (K/M/B/T) to keep dashboard cards readable.

/// Fixed display currency. The remote API stores plain numbers; the client
/// renders everything in this one currency.
pub const CURRENCY: &str = "XAF";

const ABBREVIATIONS: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Render an amount as an integer followed by the currency code, abbreviating
/// values of 1,000 and above with a metric suffix. Abbreviated values carry at
/// most two decimal places with trailing zeros stripped.
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };

    for (threshold, suffix) in ABBREVIATIONS {
        if value >= threshold {
            return format!("{}{suffix} {CURRENCY}", trim_trailing_zeros(value / threshold));
        }
    }

    format!("{} {CURRENCY}", value.round() as u64)
}

/// Render a count with thousands separators (`1234` -> `1,234`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_trailing_zeros(scaled: f64) -> String {
    let mut s = format!("{scaled:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
