const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a tick value with comma thousands grouping and at most three
/// fraction digits, e.g. `12500` as `12,500` and `0.25` as `0.25`.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = group_thousands(int_part);
    let negative = value < 0.0 && (grouped != "0" || !frac_part.is_empty());

    let mut out = String::with_capacity(grouped.len() + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
