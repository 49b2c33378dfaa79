//! Utility functions

/// Splits a comma separated form field, trimming every token and dropping
/// empty ones. Order is preserved.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
