//! # Smart Pantry Core
//!
//! Deterministic interpretation of free-form ingredient text for pantry
//! tracking, shopping-list consolidation and recipe matching.
//!
//! The centrepiece is [`ingredient_parser::parse_ingredient`], a total
//! function that extracts a quantity, a normalized unit and a canonical
//! item name from lines like `"1 ½ cup sugar"` or `"500-600g chicken
//! breast"`. Everything downstream — the pantry store, the aggregator,
//! the recipe matcher — relies on the stable (item, unit) key space it
//! produces.

pub mod aggregate;
pub mod format;
pub mod fraction;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod matcher;
pub mod pantry;
pub mod plural;
pub mod units;
