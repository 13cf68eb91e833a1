// Parsing, statistics and number formatting helpers.
//
// Raw CSV cells are strings; everything past the loader works on typed values.
use crate::types::Summary;
use num_format::{Locale, ToFormattedString};

/// Parse a measurement cell into `f64`, ignoring surrounding whitespace.
///
/// Accepts anything `str::parse::<f64>` does (including exponent notation)
/// and returns `None` for empty cells, text, `inf` and `NaN`.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    s?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Min, mean and max of a slice, or `None` when it is empty.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    // Rounding in the sum can push the mean a hair outside [min, max].
    Some(Summary { min, mean: mean.clamp(min, max), max })
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus en-locale thousands separators, e.g. `1,234.50`.
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    // Avoid printing "-0.00" for tiny negatives.
    if n.is_sign_negative() && res.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
