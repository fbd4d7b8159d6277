//! # Ingredient Line Parser
//!
//! This module interprets a free-form ingredient line ("1 ½ cup sugar",
//! "500-600g chicken breast", "onions") into a quantity, a normalized unit
//! and a canonical item name.
//!
//! ## Features
//!
//! - Decimal, fractional, mixed-number and vulgar-fraction quantities
//! - Range syntax ("500-600g ...") resolved to the upper bound
//! - Unit synonym normalization with metric rescaling
//! - Plural reduction of item names
//! - Graceful degradation: parsing never fails, it returns a partially
//!   empty but valid result
//!
//! ## Usage
//!
//! ```rust
//! use smart_pantry::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("2 cups sugar");
//! assert_eq!(parsed.quantity, Some(2.0));
//! assert_eq!(parsed.unit.as_deref(), Some("cup"));
//! assert_eq!(parsed.item, "sugar");
//! ```

use crate::fraction::{decode_quantity, normalize_spaces};
use crate::ingredient_model::ParsedIngredient;
use crate::plural::singularize;
use crate::units;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

// Characters a quantity span may contain: digits, '.', '/', spaces and the
// Unicode vulgar-fraction glyphs (¼-¾ in Latin-1, ⅐-⅞ in Number Forms).
const QUANTITY_SPAN: &str = r"[0-9./ ¼-¾⅐-⅞]";

lazy_static! {
    /// Range shape: `<qty> - <qty> <unit> <item>`.
    static ref RANGE_LINE: Regex = Regex::new(&format!(
        r"^({q}+?)\s*[-–]\s*({q}+?)\s*([a-z]+)\s+(.+)$",
        q = QUANTITY_SPAN
    ))
    .expect("range pattern should be valid");

    /// Plain shape: `<qty> <unit> <item>`.
    static ref PLAIN_LINE: Regex = Regex::new(&format!(
        r"^({q}+?)\s*([a-z]+)\s+(.+)$",
        q = QUANTITY_SPAN
    ))
    .expect("plain pattern should be valid");

    /// Counted shape: `<qty> <word>` with nothing after the word.
    static ref COUNTED_LINE: Regex = Regex::new(&format!(
        r"^({q}+?)\s*([a-z]+)$",
        q = QUANTITY_SPAN
    ))
    .expect("counted pattern should be valid");
}

/// Interpret one ingredient line.
///
/// The line is normalized (trimmed, lowercased, Unicode space variants
/// collapsed), then matched against an ordered decision list:
///
/// 1. **range** — both bounds are decoded and the upper bound wins, since
///    shopping needs are sized for the worst case; if the upper bound does
///    not decode the line degrades to a bare item;
/// 2. **plain** — quantity span, unit token, item text;
/// 3. **counted** — quantity followed by a single word that is not a
///    recognized unit ("2 tomatoes"): the word is the item and the
///    quantity stands with no unit;
/// 4. **bare** — everything else: the whole line is the item name.
///
/// Recognized units are replaced by their canonical symbol and the
/// quantity is rescaled into the family base; unrecognized unit tokens are
/// kept verbatim.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::ingredient_parser::parse_ingredient;
///
/// let parsed = parse_ingredient("500-600g chicken breasts");
/// assert_eq!(parsed.quantity, Some(600.0));
/// assert_eq!(parsed.unit.as_deref(), Some("g"));
/// assert_eq!(parsed.item, "chicken breast");
///
/// let parsed = parse_ingredient("onions");
/// assert_eq!(parsed.quantity, None);
/// assert_eq!(parsed.item, "onion");
/// ```
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let line = normalize_spaces(line).trim().to_lowercase();

    if let Some(caps) = RANGE_LINE.captures(&line) {
        debug!("range shape matched: '{}'", line);
        let unit = &caps[3];
        let item = &caps[4];
        // Only the upper bound's decode outcome matters.
        return match decode_quantity(&caps[2]) {
            Some(upper) => scaled(upper, unit, item),
            None => ParsedIngredient::bare(&singularize(item)),
        };
    }

    if let Some(caps) = PLAIN_LINE.captures(&line) {
        debug!("plain shape matched: '{}'", line);
        let unit = &caps[2];
        let item = &caps[3];
        return match decode_quantity(&caps[1]) {
            Some(quantity) => scaled(quantity, unit, item),
            None => ParsedIngredient::bare(&singularize(item)),
        };
    }

    if let Some(caps) = COUNTED_LINE.captures(&line) {
        let word = caps[2].to_string();
        if !units::is_known_unit(&word) {
            if let Some(quantity) = decode_quantity(&caps[1]) {
                debug!("counted shape matched: '{}'", line);
                return ParsedIngredient::counted(quantity, &singularize(&word));
            }
        }
        // A unit with no item ("2 cups"), or an undecodable span: the
        // whole line is the item name.
        return ParsedIngredient::bare(&singularize(&line));
    }

    debug!("no quantity span in '{}', treating as bare item", line);
    ParsedIngredient::bare(&singularize(&line))
}

/// Apply unit normalization to a decoded quantity.
fn scaled(quantity: f64, raw_unit: &str, item: &str) -> ParsedIngredient {
    let item = singularize(item);
    match units::normalize_unit(raw_unit) {
        Some((canonical, multiplier)) => {
            ParsedIngredient::measured(quantity * multiplier, canonical, &item)
        }
        None => ParsedIngredient::measured(quantity, raw_unit, &item),
    }
}
