//! # Amount Formatting
//!
//! Renders a (quantity, unit) pair at the most readable scale: base-unit
//! mass and volume amounts switch to kilograms or litres once they reach
//! 1000.

use crate::units::{MASS_BASE, VOLUME_BASE};

/// Format an amount for display.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::format::format_amount;
///
/// assert_eq!(format_amount(1500.0, Some("ml")), "1.5l");
/// assert_eq!(format_amount(500.0, Some("g")), "500g");
/// assert_eq!(format_amount(2.0, Some("cup")), "2cup");
/// assert_eq!(format_amount(3.0, None), "3");
/// ```
pub fn format_amount(amount: f64, unit: Option<&str>) -> String {
    match unit {
        Some(u) if u == MASS_BASE && amount >= 1000.0 => format!("{:.1}kg", amount / 1000.0),
        Some(u) if u == VOLUME_BASE && amount >= 1000.0 => format!("{:.1}l", amount / 1000.0),
        Some(u) => format!("{}{}", amount, u),
        None => amount.to_string(),
    }
}
