#[cfg(test)]
mod tests {
    use smart_pantry::aggregate::{combine_ingredients, ShoppingList};
    use smart_pantry::format::format_amount;
    use smart_pantry::ingredient_model::{IngredientKey, Recipe};
    use smart_pantry::matcher::{
        compare_recipe_to_pantry, rank_recipes, MatchBucket, MatcherConfig,
    };
    use smart_pantry::pantry::Pantry;

    fn key(item: &str, unit: Option<&str>) -> IngredientKey {
        IngredientKey::new(item, unit)
    }

    #[test]
    fn test_combine_merges_across_plural_and_scale() {
        let combined = combine_ingredients([
            "2 tomatoes",
            "3 tomato",
            "1 kg flour",
            "500 g flour",
            "salt",
        ]);
        assert_eq!(combined[&key("tomato", None)], 5.0);
        assert_eq!(combined[&key("flour", Some("g"))], 1500.0);
        assert_eq!(combined[&key("salt", None)], 1.0);
    }

    #[test]
    fn test_format_amount_display_properties() {
        assert_eq!(format_amount(1500.0, Some("ml")), "1.5l");
        assert_eq!(format_amount(500.0, Some("g")), "500g");
    }

    #[test]
    fn test_pantry_deduction_floors_at_zero() {
        let mut pantry = Pantry::new();
        pantry.add_line("300 g rice");
        pantry.deduct_for_recipe(["1 kg rice"]);
        assert_eq!(pantry.amount_of(&key("rice", Some("g"))), 0.0);
    }

    #[test]
    fn test_recipe_bucket_boundaries() {
        let mut pantry = Pantry::new();
        pantry.add_line("1 kg flour");

        let config = MatcherConfig::default();

        // Zero gaps -> perfect.
        let perfect = compare_recipe_to_pantry(["500 g flour"], &pantry);
        assert_eq!(perfect.bucket(&config), MatchBucket::Perfect);

        // Exactly 3 gaps -> other.
        let other = compare_recipe_to_pantry(["1 egg", "1 onion", "2 l milk"], &pantry);
        assert_eq!(other.score(), 3);
        assert_eq!(other.bucket(&config), MatchBucket::Other);
    }

    #[test]
    fn test_cook_then_rerank_flow() {
        let mut pantry = Pantry::new();
        pantry.add_line("1 kg flour");
        pantry.add_line("6 eggs");
        pantry.add_line("1 l milk");

        let pancakes = Recipe::from_comma_separated(
            "Pancakes",
            "500 g flour, 2 eggs, 500 ml milk",
            Some(4),
        );
        let recipes = vec![pancakes.clone()];

        let before = rank_recipes(&recipes, &pantry, &MatcherConfig::default());
        assert_eq!(before.perfect.len(), 1);

        // Cook once: everything is still in stock for a second round.
        pantry.deduct_for_recipe(&pancakes.ingredients);
        assert_eq!(pantry.amount_of(&key("flour", Some("g"))), 500.0);
        assert_eq!(pantry.amount_of(&key("egg", None)), 4.0);
        assert_eq!(pantry.amount_of(&key("milk", Some("ml"))), 500.0);

        let after = rank_recipes(&recipes, &pantry, &MatcherConfig::default());
        assert_eq!(after.perfect.len(), 1);

        // Cook twice more: flour and milk run dry, eggs survive.
        pantry.deduct_for_recipe(&pancakes.ingredients);
        pantry.deduct_for_recipe(&pancakes.ingredients);
        assert_eq!(pantry.amount_of(&key("flour", Some("g"))), 0.0);
        assert_eq!(pantry.amount_of(&key("milk", Some("ml"))), 0.0);
        assert_eq!(pantry.amount_of(&key("egg", None)), 0.0);

        let drained = rank_recipes(&recipes, &pantry, &MatcherConfig::default());
        assert_eq!(drained.other.len(), 1);
        let (_, result) = &drained.other[0];
        assert_eq!(result.missing.len(), 3);
    }

    #[test]
    fn test_shopping_list_round_trip() {
        let soup = Recipe::from_comma_separated("Soup", "2 onions, 1 l stock, 2 carrots", None);
        let mut list = ShoppingList::new();
        list.extend_from_recipe(&soup);
        list.push("3 onions");

        let combined = list.consolidate();
        assert_eq!(combined[&key("onion", None)], 5.0);
        assert_eq!(combined[&key("stock", Some("ml"))], 1000.0);
        assert_eq!(combined[&key("carrot", None)], 2.0);
    }

    #[test]
    fn test_recipe_serde_round_trip() {
        let recipe = Recipe::from_comma_separated("Salad", "2 tomatoes, 1 cucumber", Some(2));
        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
