//! Number formatting for the statistics panels.
//!
//! Fixed-precision decimals and `en-US` thousands grouping, computed in Rust
//! so SSR output and hydrated output agree byte for byte.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format with exactly `places` decimals, rounding half away from zero.
pub fn fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return "—".to_owned();
    }
    let rounded = round_half_away(value, places);
    let text = format!("{rounded:.places$}");
    // `-0.0` and values that round to zero print as an unsigned zero.
    if rounded == 0.0 { text.trim_start_matches('-').to_owned() } else { text }
}

/// `+43.2%` style: explicit sign, one decimal, percent suffix.
pub fn signed_percent(value: f64) -> String {
    let body = fixed(value, 1);
    if value.is_finite() && !body.starts_with('-') { format!("+{body}%") } else { format!("{body}%") }
}

/// `77%` style: no decimals, percent suffix.
pub fn whole_percent(value: f64) -> String {
    format!("{}%", fixed(value, 0))
}

/// Insert `,` between groups of three digits: `341735` becomes `341,735`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped whole-dollar amount for finite non-negative values.
pub fn group_amount(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return fixed(value, 0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value.round() as u64;
    group_thousands(whole)
}

fn round_half_away(value: f64, places: usize) -> f64 {
    let exp = i32::try_from(places).unwrap_or(i32::MAX);
    let factor = 10f64.powi(exp);
    let scaled = value * factor;
    // Nudge by a relative epsilon so 0.125 stored as 0.12499999 still rounds up.
    let nudged = scaled + scaled.signum() * scaled.abs() * f64::EPSILON * 4.0;
    nudged.round() / factor
}
