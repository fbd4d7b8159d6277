//! # Ingredient Data Model
//!
//! This module defines the structured result of interpreting an ingredient
//! line and the identity used to merge duplicate mentions.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: quantity, canonical unit and canonical item name
//!   extracted from one line of free text
//! - **IngredientKey**: the (item, unit) pair every aggregation, pantry
//!   lookup and shopping-list merge is keyed on
//! - **Recipe**: a named, ordered list of raw ingredient lines
//!
//! ## Usage
//!
//! ```rust
//! use smart_pantry::ingredient_model::{IngredientKey, ParsedIngredient};
//!
//! let sugar = ParsedIngredient::measured(500.0, "g", "sugar");
//! assert_eq!(sugar.key(), IngredientKey::new("sugar", Some("g")));
//! ```

use crate::format::format_amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured interpretation of a single ingredient line.
///
/// The parser is total, so every line produces one of these. `item` is
/// always present, lowercased and singularized. `quantity` is `None`
/// exactly when no leading numeric span decoded; `unit` is `None` whenever
/// `quantity` is, and also for genuinely unitless lines ("onions").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Decoded quantity, already rescaled into the unit family's base.
    pub quantity: Option<f64>,

    /// Canonical unit symbol, or the raw token for unrecognized units.
    pub unit: Option<String>,

    /// Canonical (singular, lowercase) item name.
    pub item: String,
}

impl ParsedIngredient {
    /// A line that yielded no usable quantity at all.
    pub fn bare(item: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            item: item.to_string(),
        }
    }

    /// A quantity with no unit token ("2 tomatoes").
    pub fn counted(quantity: f64, item: &str) -> Self {
        Self {
            quantity: Some(quantity),
            unit: None,
            item: item.to_string(),
        }
    }

    /// A fully interpreted line: quantity, unit and item.
    pub fn measured(quantity: f64, unit: &str, item: &str) -> Self {
        Self {
            quantity: Some(quantity),
            unit: Some(unit.to_string()),
            item: item.to_string(),
        }
    }

    /// Whether the line carried a decodable quantity.
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// The aggregation identity for this ingredient.
    pub fn key(&self) -> IngredientKey {
        IngredientKey {
            item: self.item.clone(),
            unit: self.unit.clone(),
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(quantity) => write!(
                f,
                "{} {}",
                format_amount(quantity, self.unit.as_deref()),
                self.item
            ),
            None => write!(f, "{}", self.item),
        }
    }
}

/// The (item, unit) pair used to merge duplicate ingredient mentions.
///
/// Two textually different lines that normalize to the same key ("2
/// tomatoes" and "3 tomato") must merge under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientKey {
    /// Canonical item name.
    pub item: String,
    /// Canonical unit symbol, `None` for unitless entries.
    pub unit: Option<String>,
}

impl IngredientKey {
    /// Build a key from borrowed parts.
    pub fn new(item: &str, unit: Option<&str>) -> Self {
        Self {
            item: item.to_string(),
            unit: unit.map(str::to_string),
        }
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} [{}]", self.item, unit),
            None => write!(f, "{}", self.item),
        }
    }
}

/// A named recipe: ordered raw ingredient lines plus optional servings.
///
/// Created from user input; ingredient lines are trimmed and lowercased on
/// construction so later parses see normalized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name.
    pub name: String,
    /// Raw ingredient lines, in entry order.
    pub ingredients: Vec<String>,
    /// Optional serving count.
    pub servings: Option<u32>,
}

impl Recipe {
    /// Create a recipe, normalizing each ingredient line (trim, lowercase)
    /// and dropping blank lines.
    pub fn new(name: &str, ingredients: Vec<String>, servings: Option<u32>) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self {
            name: name.trim().to_string(),
            ingredients,
            servings,
        }
    }

    /// Create a recipe from a single comma-separated ingredients field.
    pub fn from_comma_separated(name: &str, ingredients: &str, servings: Option<u32>) -> Self {
        Self::new(
            name,
            ingredients.split(',').map(str::to_string).collect(),
            servings,
        )
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.servings {
            Some(servings) => write!(f, "{} ({} servings)", self.name, servings),
            None => write!(f, "{}", self.name),
        }
    }
}
