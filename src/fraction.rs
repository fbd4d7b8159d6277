//! # Quantity Text Decoding
//!
//! This module turns the numeric span of an ingredient line into a float.
//! It accepts integers, decimals, simple fractions ("1/2"), mixed numbers
//! ("2 1/4"), and Unicode vulgar-fraction glyphs ("½", "2½"), and degrades
//! to `None` for anything else.
//!
//! Decode failure is not an error: the ingredient line parser treats it as
//! "no quantity" and falls back to an unparsed, unitless result.

use log::trace;

/// Unicode vulgar-fraction glyphs and their decimal values.
///
/// Each glyph is substituted by its value surrounded by spaces before
/// tokenization, so a glyph glued to a digit ("2½") splits into a mixed
/// number ("2 0.5") instead of an unparseable token.
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅐', 1.0 / 7.0),
    ('⅑', 1.0 / 9.0),
    ('⅒', 0.1),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Normalize Unicode space variants to ordinary spaces.
///
/// Pasted recipe text routinely carries no-break, thin, narrow and hair
/// spaces plus zero-width characters. Width-bearing variants become ASCII
/// spaces; zero-width characters and byte-order marks are removed.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::fraction::normalize_spaces;
///
/// assert_eq!(normalize_spaces("1\u{00A0}kg flour"), "1 kg flour");
/// assert_eq!(normalize_spaces("2\u{200B} cups"), "2 cups");
/// ```
pub fn normalize_spaces(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{200B}' | '\u{FEFF}' => None,
            '\u{00A0}' | '\u{2009}' | '\u{202F}' | '\u{200A}' => Some(' '),
            _ => Some(c),
        })
        .collect()
}

/// Replace every vulgar-fraction glyph with its decimal value, space-padded.
fn replace_vulgar_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match VULGAR_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, value)) => {
                out.push(' ');
                out.push_str(&value.to_string());
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out
}

/// Parse a "numerator/denominator" token. Zero denominators decode to `None`.
fn parse_simple_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Decode a quantity span into a float.
///
/// After glyph substitution the span is resolved in priority order:
///
/// 1. two tokens where the second contains `/` — mixed number ("2 1/4");
/// 2. two tokens where the second is a plain decimal — mixed number left
///    behind by glyph substitution ("2½" → "2 0.5");
/// 3. one token containing `/` — simple fraction ("3/4");
/// 4. one token parseable as a float ("1.5", "600");
/// 5. anything else decodes to `None`.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::fraction::decode_quantity;
///
/// assert_eq!(decode_quantity("2 1/4"), Some(2.25));
/// assert_eq!(decode_quantity("2½"), Some(2.5));
/// assert_eq!(decode_quantity("3/4"), Some(0.75));
/// assert_eq!(decode_quantity("1.5"), Some(1.5));
/// assert_eq!(decode_quantity("a splash"), None);
/// ```
pub fn decode_quantity(text: &str) -> Option<f64> {
    let substituted = replace_vulgar_fractions(&normalize_spaces(text));
    let tokens: Vec<&str> = substituted.split_whitespace().collect();
    trace!("decoding quantity span '{}' as tokens {:?}", text, tokens);

    match tokens.as_slice() {
        [whole, fraction] if fraction.contains('/') => {
            let whole: f64 = whole.parse().ok()?;
            Some(whole + parse_simple_fraction(fraction)?)
        }
        [whole, decimal] => {
            let whole: f64 = whole.parse().ok()?;
            let decimal: f64 = decimal.parse().ok()?;
            Some(whole + decimal)
        }
        [single] if single.contains('/') => parse_simple_fraction(single),
        [single] => single.parse().ok(),
        _ => None,
    }
}
