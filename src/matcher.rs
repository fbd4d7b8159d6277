//! # Recipe-to-Pantry Matching
//!
//! Classifies each ingredient line of a recipe against current pantry
//! stock, and buckets whole recipes by how close they are to cookable.
//! This layer is the consumer that proves the parser's key normalization:
//! a recipe line and a pantry entry only meet if both normalized to the
//! same (item, unit) key.

use crate::format::format_amount;
use crate::ingredient_model::Recipe;
use crate::ingredient_parser::parse_ingredient;
use crate::pantry::Pantry;
use log::debug;
use std::fmt;

/// Configuration for recipe classification.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Highest combined missing+short count still bucketed [`MatchBucket::Almost`].
    pub almost_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            almost_threshold: 2,
        }
    }
}

/// Recipe-level completeness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBucket {
    /// Every line matched — cookable right now.
    Perfect,
    /// Within the almost threshold of cookable.
    Almost,
    /// Too many gaps to be worth surfacing first.
    Other,
}

impl fmt::Display for MatchBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchBucket::Perfect => "perfect",
            MatchBucket::Almost => "almost",
            MatchBucket::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Per-line classification of one recipe against the pantry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeMatch {
    /// Lines whose key is absent from the pantry (or stocked at zero).
    pub missing: Vec<String>,
    /// Lines partially covered, annotated with the deficit.
    pub short: Vec<String>,
    /// Lines fully covered.
    pub matched: Vec<String>,
}

impl RecipeMatch {
    /// Combined count of missing and short lines.
    pub fn score(&self) -> usize {
        self.missing.len() + self.short.len()
    }

    /// Bucket this result under the configured threshold.
    pub fn bucket(&self, config: &MatcherConfig) -> MatchBucket {
        match self.score() {
            0 => MatchBucket::Perfect,
            score if score <= config.almost_threshold => MatchBucket::Almost,
            _ => MatchBucket::Other,
        }
    }
}

/// Classify each recipe line against the pantry.
///
/// Per line: `missing` when the pantry holds exactly zero of the key;
/// `short` when it holds some but less than required, annotated
/// `"<line> (short by <amount>)"`; `matched` otherwise — which covers
/// quantity-less lines stocked in any amount.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::matcher::compare_recipe_to_pantry;
/// use smart_pantry::pantry::Pantry;
///
/// let mut pantry = Pantry::new();
/// pantry.add_line("2 cups sugar");
///
/// let result = compare_recipe_to_pantry(["1 cup sugar", "3 eggs"], &pantry);
/// assert_eq!(result.matched, ["1 cup sugar"]);
/// assert_eq!(result.missing, ["3 eggs"]);
/// ```
pub fn compare_recipe_to_pantry<I, S>(lines: I, pantry: &Pantry) -> RecipeMatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = RecipeMatch::default();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_ingredient(line);
        let available = pantry.amount_of(&parsed.key());

        if available == 0.0 {
            result.missing.push(line.to_string());
        } else if let Some(required) = parsed.quantity {
            if available < required {
                let deficit = format_amount(required - available, parsed.unit.as_deref());
                result.short.push(format!("{} (short by {})", line, deficit));
            } else {
                result.matched.push(line.to_string());
            }
        } else {
            // No quantity on the line; present in any amount counts.
            result.matched.push(line.to_string());
        }
    }

    debug!(
        "recipe comparison: {} matched, {} short, {} missing",
        result.matched.len(),
        result.short.len(),
        result.missing.len()
    );
    result
}

/// A recipe collection grouped by bucket, in input order.
#[derive(Debug, Default)]
pub struct RecipeRanking {
    pub perfect: Vec<(String, RecipeMatch)>,
    pub almost: Vec<(String, RecipeMatch)>,
    pub other: Vec<(String, RecipeMatch)>,
}

/// Compare every recipe to the pantry and group by bucket.
pub fn rank_recipes(recipes: &[Recipe], pantry: &Pantry, config: &MatcherConfig) -> RecipeRanking {
    let mut ranking = RecipeRanking::default();

    for recipe in recipes {
        let result = compare_recipe_to_pantry(&recipe.ingredients, pantry);
        let bucket = result.bucket(config);
        debug!("'{}' scored {} -> {}", recipe.name, result.score(), bucket);
        let group = match bucket {
            MatchBucket::Perfect => &mut ranking.perfect,
            MatchBucket::Almost => &mut ranking.almost,
            MatchBucket::Other => &mut ranking.other,
        };
        group.push((recipe.name.clone(), result));
    }

    ranking
}
