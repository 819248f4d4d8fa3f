//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals, as every grid shows them.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// Short form used in messages: `8`, `7.5`, `7.25`.
pub fn hours2readable(h: f64) -> String {
    let s = format!("{:.2}", h);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
