//! Rendering of monetary amounts for display.

use rust_decimal::Decimal;

/// Formats an amount the way summary lines show it.
///
/// Trailing fractional zeros are dropped, and whole amounts keep a single
/// `.0` so that salaries always read as decimal numbers.
///
/// # Examples
///
/// ```
/// use payroll_registry::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(3000, 0)), "3000.0");
/// assert_eq!(format_amount(Decimal::new(300050, 2)), "3000.5");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}
