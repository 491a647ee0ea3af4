//! Number formatting utilities for human-readable display.
//!
//! These reproduce the dashboard's display rules exactly, quirks included:
//! thousands separators are inserted into every run of digits, and market caps
//! are shown in "millions" by dropping the last six characters of the number's
//! string form rather than by dividing and rounding.

/// Inserts `,` every three digits, counted from the right of each digit run.
///
/// Every maximal run of ASCII digits is grouped independently, so a fractional
/// part longer than three digits is grouped too (`"0.12345"` → `"0.12,345"`).
pub fn number_with_commas(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    let mut run = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            push_grouped(&mut out, &run);
            run.clear();
            out.push(c);
        }
    }
    push_grouped(&mut out, &run);
    out
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}

/// Approximates a value in millions by dropping the last six characters of its
/// string form. No rounding; values under seven characters become `""`.
pub fn truncate_millions(value: f64) -> String {
    let s = value.to_string();
    let keep = s.chars().count().saturating_sub(6);
    s.chars().take(keep).collect()
}

/// Fixed-point with `decimals` places.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.1$}", value, decimals)
}

/// 24h change as shown in the coin table: two decimals, `+` for gains.
pub fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{}%", fixed(value, 2))
    } else {
        format!("{}%", fixed(value, 2))
    }
}
