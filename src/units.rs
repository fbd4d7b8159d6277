//! # Unit Normalization
//!
//! Maps recognized unit tokens (abbreviated, written out, singular or
//! plural) to a canonical symbol plus a multiplier that rescales the
//! quantity into the family's base unit — all mass in grams, all metric
//! volume in millilitres.
//!
//! The table is closed: a token that is not listed is a normalization
//! miss, not an error. Callers keep the raw token verbatim so arbitrary
//! unit words ("cloves", "slices") still aggregate under their own key.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical symbol for the mass family; the formatter up-scales it to kg.
pub const MASS_BASE: &str = "g";

/// Canonical symbol for the metric volume family; up-scaled to l.
pub const VOLUME_BASE: &str = "ml";

/// Synonym → (canonical symbol, multiplier into the family base).
static UNIT_MAP: LazyLock<HashMap<&'static str, (&'static str, f64)>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Mass (base: grams)
    map.insert("g", ("g", 1.0));
    map.insert("gram", ("g", 1.0));
    map.insert("grams", ("g", 1.0));
    map.insert("kg", ("g", 1000.0));
    map.insert("kilogram", ("g", 1000.0));
    map.insert("kilograms", ("g", 1000.0));

    // Metric volume (base: millilitres)
    map.insert("ml", ("ml", 1.0));
    map.insert("millilitre", ("ml", 1.0));
    map.insert("millilitres", ("ml", 1.0));
    map.insert("milliliter", ("ml", 1.0));
    map.insert("milliliters", ("ml", 1.0));
    map.insert("l", ("ml", 1000.0));
    map.insert("litre", ("ml", 1000.0));
    map.insert("litres", ("ml", 1000.0));
    map.insert("liter", ("ml", 1000.0));
    map.insert("liters", ("ml", 1000.0));

    // Spoons
    map.insert("tbsp", ("tbsp", 1.0));
    map.insert("tablespoon", ("tbsp", 1.0));
    map.insert("tablespoons", ("tbsp", 1.0));
    map.insert("tsp", ("tsp", 1.0));
    map.insert("teaspoon", ("tsp", 1.0));
    map.insert("teaspoons", ("tsp", 1.0));

    // Cups (unscaled family)
    map.insert("cup", ("cup", 1.0));
    map.insert("cups", ("cup", 1.0));

    map
});

/// Look up a raw unit token.
///
/// Returns the canonical symbol and the multiplier to apply to the decoded
/// quantity, or `None` when the token is not in the table.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::units::normalize_unit;
///
/// assert_eq!(normalize_unit("kg"), Some(("g", 1000.0)));
/// assert_eq!(normalize_unit("Cups"), Some(("cup", 1.0)));
/// assert_eq!(normalize_unit("cloves"), None);
/// ```
pub fn normalize_unit(token: &str) -> Option<(&'static str, f64)> {
    UNIT_MAP.get(token.trim().to_lowercase().as_str()).copied()
}

/// Whether a token is a recognized unit synonym.
pub fn is_known_unit(token: &str) -> bool {
    normalize_unit(token).is_some()
}
