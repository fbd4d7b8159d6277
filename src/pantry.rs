//! # Pantry Store
//!
//! The in-memory stock of ingredients on hand, keyed the same way as every
//! other aggregation in the crate. All operations are synchronous and the
//! struct is plain data; a caller embedding it in a multi-request server
//! wraps it in its own `Mutex` rather than this module taking a lock it
//! rarely needs.

use crate::ingredient_model::{IngredientKey, ParsedIngredient};
use crate::ingredient_parser::parse_ingredient;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Mapping from ingredient key to accumulated quantity (or occurrence
/// count for unitless keys). Never negative.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    stock: HashMap<IngredientKey, f64>,
}

impl Pantry {
    /// Create an empty pantry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw line and add its quantity to stock.
    ///
    /// Lines without a decodable quantity count as one occurrence of the
    /// item. The parse result is returned so the caller can decide whether
    /// a fully-unparsed line should be reported back to the user.
    pub fn add_line(&mut self, line: &str) -> ParsedIngredient {
        let parsed = parse_ingredient(line);
        if !parsed.has_quantity() {
            warn!("no quantity recognized in '{}', counting 1", line.trim());
        }
        let amount = parsed.quantity.unwrap_or(1.0);
        let total = self.stock.entry(parsed.key()).or_insert(0.0);
        *total += amount;
        info!("pantry now holds {} of {}", total, parsed.key());
        parsed
    }

    /// Current stock for a key, 0 when absent.
    pub fn amount_of(&self, key: &IngredientKey) -> f64 {
        self.stock.get(key).copied().unwrap_or(0.0)
    }

    /// Consume a cooked recipe's ingredients.
    ///
    /// Every line with a decoded quantity whose key is stocked is
    /// decremented by the required amount, saturating at zero — excess
    /// consumption is absorbed, never recorded as a deficit.
    pub fn deduct_for_recipe<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let parsed = parse_ingredient(line);
            if let Some(required) = parsed.quantity {
                if let Some(stocked) = self.stock.get_mut(&parsed.key()) {
                    let remaining = (*stocked - required).max(0.0);
                    debug!(
                        "deducting {} of {}: {} -> {}",
                        required,
                        parsed.key(),
                        stocked,
                        remaining
                    );
                    *stocked = remaining;
                }
            }
        }
    }

    /// A copy of the current stock mapping.
    pub fn snapshot(&self) -> HashMap<IngredientKey, f64> {
        self.stock.clone()
    }

    /// Stock entries in a deterministic display order (by item, then unit).
    pub fn entries_sorted(&self) -> Vec<(IngredientKey, f64)> {
        let mut entries: Vec<_> = self
            .stock
            .iter()
            .map(|(key, amount)| (key.clone(), *amount))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.item.cmp(&b.item).then_with(|| a.unit.cmp(&b.unit)));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }
}
