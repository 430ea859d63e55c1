use foodcoach_impact::{ImpactEstimator, ImpactSettings};
use foodcoach_shared::IngredientToken;

const RESOLVABLE: [&str; 14] = [
    "tomato", "bread", "cheese", "chicken", "beef", "milk", "rice", "potato", "apple", "carrot",
    "onion", "pasta", "eggs", "fish",
];

#[test]
fn test_totals_never_decrease_as_ingredients_are_added() {
    let estimator = ImpactEstimator::default();
    let mut previous = estimator.estimate(&[]).totals;

    for n in 1..=RESOLVABLE.len() {
        let tokens = IngredientToken::parse_list(RESOLVABLE[..n].iter().copied());
        let totals = estimator.estimate(&tokens).totals;

        assert!(totals.water_saved_liters >= previous.water_saved_liters);
        assert!(totals.co2_reduced_kg >= previous.co2_reduced_kg);
        assert!(totals.land_saved_m2 >= previous.land_saved_m2);
        assert!(totals.money_saved_usd >= previous.money_saved_usd);

        previous = totals;
    }
}

#[test]
fn test_unresolved_ingredients_do_not_change_totals() {
    let estimator = ImpactEstimator::default();
    let known = IngredientToken::parse_list(["rice", "beef"]);
    let mixed = IngredientToken::parse_list(["rice", "dragonfruit", "beef"]);

    let known_report = estimator.estimate(&known);
    let mixed_report = estimator.estimate(&mixed);

    assert_eq!(known_report.totals, mixed_report.totals);
    assert_eq!(mixed_report.unresolved, vec!["dragonfruit"]);
}

#[test]
fn test_achievement_follows_co2_total() {
    let estimator = ImpactEstimator::default();

    let small = estimator.estimate(&IngredientToken::parse_list(["carrot"]));
    assert_eq!(
        estimator.tiers().level_for(small.totals.co2_reduced_kg).level,
        "Getting Started"
    );

    // 60 kg/kg * 0.5 kg = 30 kg CO2
    let beef = estimator.estimate(&IngredientToken::parse_list(["beef"]));
    assert_eq!(
        estimator.tiers().level_for(beef.totals.co2_reduced_kg).level,
        "Eco Warrior"
    );
}

#[test]
fn test_report_serializes_expected_shape() {
    let estimator = ImpactEstimator::new(ImpactSettings::default());
    let report = estimator.estimate(&IngredientToken::parse_list(["tomato"]));
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["totals"]["water_saved_liters"].is_number());
    assert!(json["equivalents"]["showers_saved"].is_u64());
    assert!(json["percentage_of_goal"]["co2"].is_number());
    assert_eq!(json["ingredients"][0]["ingredient"], "Tomato");
}
