//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static UNSAFE_FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\n\r\t]+"#).unwrap());

static UNDERSCORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Left-align `s` in `width` terminal columns (Cyrillic-safe).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Round to 2 decimal digits.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Hours for display: 2 decimals, trailing zeros stripped
/// (`10.50` → `10.5`, `8.00` → `8`).
pub fn fmt_hours(x: f64) -> String {
    let s = format!("{:.2}", round2(x));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Like [`fmt_hours`], with `-` for an absent value.
pub fn fmt_opt_hours(x: Option<f64>) -> String {
    x.map(fmt_hours).unwrap_or_else(|| "-".to_string())
}

/// Make `s` usable as a file name: forbidden characters become `_`,
/// runs of `_` collapse, the result is cut to `maxlen` characters.
pub fn safe_filename(s: &str, maxlen: usize) -> String {
    let replaced = UNSAFE_FILENAME_RE.replace_all(s, "_");
    let trimmed = replaced.trim();
    let collapsed = UNDERSCORES_RE.replace_all(trimmed, "_");
    collapsed.chars().take(maxlen).collect()
}
