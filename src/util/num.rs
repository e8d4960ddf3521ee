/// Formats a number the way `print` and string concatenation show it.
///
/// Whole-valued numbers are written without a fractional part, so twelve is
/// `12` rather than `12.0`. Infinities are `Infinity` / `-Infinity` and NaN is
/// `NaN`.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(12.0), "12");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.125), "-0.125");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let text = value.to_string();
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}
