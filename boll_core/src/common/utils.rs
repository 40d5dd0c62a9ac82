/// Decimal places used when the caller does not ask for a precision
pub const DEFAULT_DECIMALS: usize = 2;

/// Placeholder shown for values that cannot be computed
pub const UNDEFINED_PLACEHOLDER: &str = "--";

/// Render a band value with a fixed number of decimals, or "--" when absent.
pub fn format_band_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => UNDEFINED_PLACEHOLDER.to_string(),
    }
}
