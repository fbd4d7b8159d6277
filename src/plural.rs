//! # Ingredient Name Singularization
//!
//! Reduces an ingredient name to a canonical singular form so that
//! "2 tomatoes" and "3 tomato" land on the same aggregation key. An
//! irregular-word table is consulted first, then three suffix rules in
//! priority order. The function is total and idempotent over its own
//! output.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular plural → singular forms that the suffix rules would mangle.
static IRREGULAR_SINGULARS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("tomatoes", "tomato"),
        ("potatoes", "potato"),
        ("leaves", "leaf"),
        ("knives", "knife"),
        ("loaves", "loaf"),
        ("berries", "berry"),
        ("cloves", "clove"),
    ])
});

/// Convert an ingredient name to its canonical singular form.
///
/// Rules are mutually exclusive and checked in this exact order; the first
/// match wins:
///
/// 1. exact hit in the irregular table ("tomatoes" → "tomato");
/// 2. `ies` → `y` ("berries" → "berry");
/// 3. `es` dropped, unless the word ends in `ches`, `shes`, `xes` or
///    `sses` — those fall through to rule 4;
/// 4. trailing `s` dropped;
/// 5. otherwise unchanged.
///
/// The input is trimmed and lowercased first, so the output is always a
/// valid aggregation key component.
///
/// # Examples
///
/// ```rust
/// use smart_pantry::plural::singularize;
///
/// assert_eq!(singularize("tomatoes"), "tomato");
/// assert_eq!(singularize("berries"), "berry");
/// assert_eq!(singularize("onions"), "onion");
/// assert_eq!(singularize("sugar"), "sugar");
/// ```
pub fn singularize(word: &str) -> String {
    let word = word.trim().to_lowercase();

    if let Some(singular) = IRREGULAR_SINGULARS.get(word.as_str()) {
        return (*singular).to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }

    if word.ends_with("es")
        && !["ches", "shes", "xes", "sses"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }

    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("potatoes"), "potato");
        assert_eq!(singularize("leaves"), "leaf");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("loaves"), "loaf");
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("cloves"), "clove");
    }

    #[test]
    fn test_ies_rule() {
        assert_eq!(singularize("cherries"), "cherry");
        assert_eq!(singularize("anchovies"), "anchovy");
    }

    #[test]
    fn test_es_rule_exclusions() {
        // ches/shes/xes/sses fall through to the plain "s" rule.
        assert_eq!(singularize("peaches"), "peache");
        assert_eq!(singularize("radishes"), "radishe");
        assert_eq!(singularize("boxes"), "boxe");
        assert_eq!(singularize("molasses"), "molasse");
    }

    #[test]
    fn test_plain_s_rule() {
        assert_eq!(singularize("onions"), "onion");
        assert_eq!(singularize("carrots"), "carrot");
        assert_eq!(singularize("eggs"), "egg");
    }

    #[test]
    fn test_unchanged() {
        assert_eq!(singularize("sugar"), "sugar");
        assert_eq!(singularize("flour"), "flour");
        assert_eq!(singularize("olive oil"), "olive oil");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(singularize("  Tomatoes "), "tomato");
        assert_eq!(singularize("ONIONS"), "onion");
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(singularize("chicken breasts"), "chicken breast");
        assert_eq!(singularize("spring onions"), "spring onion");
    }

    #[test]
    fn test_idempotent() {
        for word in [
            "tomatoes",
            "potatoes",
            "leaves",
            "berries",
            "cloves",
            "onions",
            "chicken breasts",
            "sugar",
            "olive oil",
        ] {
            let once = singularize(word);
            assert_eq!(singularize(&once), once, "not idempotent for '{}'", word);
        }
    }
}
