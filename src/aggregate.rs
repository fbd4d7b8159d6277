//! # Quantity Aggregation
//!
//! Folds repeated ingredient mentions into totals keyed by
//! [`IngredientKey`]. Lines with a decoded quantity add that amount;
//! quantity-less lines count one occurrence each. The fold is associative
//! and commutative, so iteration order never changes the totals.
//!
//! The module also hosts [`ShoppingList`], the ordered store of raw lines
//! whose consolidation is exactly this aggregation.

use crate::ingredient_model::{IngredientKey, Recipe};
use crate::ingredient_parser::parse_ingredient;
use log::debug;
use std::collections::HashMap;

/// Combine raw ingredient lines into totals per (item, unit) key.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::aggregate::combine_ingredients;
/// use smart_pantry::ingredient_model::IngredientKey;
///
/// let combined = combine_ingredients(["2 tomatoes", "3 tomato"]);
/// assert_eq!(combined[&IngredientKey::new("tomato", None)], 5.0);
/// ```
pub fn combine_ingredients<I, S>(lines: I) -> HashMap<IngredientKey, f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut combined = HashMap::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_ingredient(line);
        // No quantity counts as one occurrence of the unparsed item.
        let amount = parsed.quantity.unwrap_or(1.0);
        *combined.entry(parsed.key()).or_insert(0.0) += amount;
    }

    debug!("combined {} distinct ingredient keys", combined.len());
    combined
}

/// Ordered sequence of raw ingredient lines awaiting consolidation.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    lines: Vec<String>,
}

impl ShoppingList {
    /// Create an empty shopping list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw ingredient line.
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.trim().to_lowercase());
    }

    /// Append every ingredient line of a recipe.
    pub fn extend_from_recipe(&mut self, recipe: &Recipe) {
        debug!(
            "adding {} lines from '{}' to shopping list",
            recipe.ingredients.len(),
            recipe.name
        );
        self.lines.extend(recipe.ingredients.iter().cloned());
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The raw lines, in insertion order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Merge duplicate mentions into totals per (item, unit) key.
    pub fn consolidate(&self) -> HashMap<IngredientKey, f64> {
        combine_ingredients(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(item: &str, unit: Option<&str>) -> IngredientKey {
        IngredientKey::new(item, unit)
    }

    #[test]
    fn test_quantities_sum_per_key() {
        let combined = combine_ingredients(["2 cups sugar", "1 cup sugar"]);
        assert_eq!(combined[&key("sugar", Some("cup"))], 3.0);
    }

    #[test]
    fn test_counted_lines_sum_not_count() {
        // Quantity-bearing unitless lines sum their quantities.
        let combined = combine_ingredients(["2 tomatoes", "3 tomato"]);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[&key("tomato", None)], 5.0);
    }

    #[test]
    fn test_unparsed_lines_count_occurrences() {
        let combined = combine_ingredients(["onions", "onions", "salt"]);
        assert_eq!(combined[&key("onion", None)], 2.0);
        assert_eq!(combined[&key("salt", None)], 1.0);
    }

    #[test]
    fn test_metric_scaling_merges_families() {
        // 1kg + 500g meet in grams under one key.
        let combined = combine_ingredients(["1 kg flour", "500 g flour"]);
        assert_eq!(combined[&key("flour", Some("g"))], 1500.0);
    }

    #[test]
    fn test_distinct_units_stay_separate() {
        let combined = combine_ingredients(["1 cup rice", "100 g rice"]);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[&key("rice", Some("cup"))], 1.0);
        assert_eq!(combined[&key("rice", Some("g"))], 100.0);
    }

    #[test]
    fn test_order_independence() {
        let forward = combine_ingredients(["2 cups sugar", "1 cup sugar", "onions"]);
        let backward = combine_ingredients(["onions", "1 cup sugar", "2 cups sugar"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let combined = combine_ingredients(["", "  ", "2 cups sugar"]);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn test_shopping_list_consolidation() {
        let mut list = ShoppingList::new();
        list.push("2 Tomatoes");
        list.push("500 g pasta");
        list.push("3 tomato");

        assert_eq!(list.len(), 3);
        let combined = list.consolidate();
        assert_eq!(combined[&key("tomato", None)], 5.0);
        assert_eq!(combined[&key("pasta", Some("g"))], 500.0);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_shopping_list_from_recipe() {
        let recipe = Recipe::from_comma_separated("Soup", "2 onions, 1 l stock", Some(2));
        let mut list = ShoppingList::new();
        list.extend_from_recipe(&recipe);
        assert_eq!(list.lines(), ["2 onions", "1 l stock"]);
    }
}
