use foodcoach_nutrition::{DEFAULT_SIMILARITY_THRESHOLD, Lookup, NutritionTable};
use foodcoach_shared::IngredientToken;

fn token(value: &str) -> IngredientToken {
    IngredientToken::new(value).unwrap()
}

#[test]
fn test_bundled_dataset_loads() {
    let table = NutritionTable::bundled().unwrap();
    assert!(table.len() >= 40);
}

#[test]
fn test_exact_match_keeps_identity_fields() {
    let table = NutritionTable::bundled().unwrap();

    for name in ["tomato", "bread", "cheese", "bell pepper"] {
        match table.lookup(&token(name), DEFAULT_SIMILARITY_THRESHOLD) {
            Lookup::Exact(record) => assert_eq!(record.name.to_lowercase(), name),
            other => panic!("expected exact match for {name}, got {other:?}"),
        }
    }
}

#[test]
fn test_exact_match_values() {
    let table = NutritionTable::bundled().unwrap();
    let record = table
        .lookup(&token("Tomato"), DEFAULT_SIMILARITY_THRESHOLD)
        .record()
        .unwrap();

    assert_eq!(record.calories, Some(18.0));
    assert_eq!(record.protein_g, Some(0.9));
    assert!(record.storage_tip().is_some());
}

#[test]
fn test_one_character_typo_matches() {
    let table = NutritionTable::bundled().unwrap();

    match table.lookup(&token("tomatoe"), DEFAULT_SIMILARITY_THRESHOLD) {
        Lookup::Approximate { record, score } => {
            assert_eq!(record.name, "Tomato");
            assert!(score >= DEFAULT_SIMILARITY_THRESHOLD);
        }
        other => panic!("expected approximate match, got {other:?}"),
    }
}

#[test]
fn test_dissimilar_token_is_a_miss() {
    let table = NutritionTable::bundled().unwrap();
    assert_eq!(
        table.lookup(&token("xyzzyx"), DEFAULT_SIMILARITY_THRESHOLD),
        Lookup::Miss
    );
}

#[test]
fn test_lookup_is_deterministic() {
    let table = NutritionTable::bundled().unwrap();
    let first = table.lookup(&token("chiken"), DEFAULT_SIMILARITY_THRESHOLD);
    for _ in 0..10 {
        assert_eq!(table.lookup(&token("chiken"), DEFAULT_SIMILARITY_THRESHOLD), first);
    }
}

#[test]
fn test_blank_cells_are_absent() {
    let data = "Ingredient,Calories_per_100g,Protein_g,Carbs_g,Fat_g,Storage_Tip\n\
                Mystery,,1.5,,,\n";
    let table = NutritionTable::from_reader(data.as_bytes()).unwrap();
    let record = table.lookup(&token("mystery"), 70).record().unwrap();

    assert_eq!(record.calories, None);
    assert_eq!(record.protein_g, Some(1.5));
    assert_eq!(record.storage_tip(), None);
}

#[test]
fn test_missing_file_falls_back_to_bundled() {
    let table = NutritionTable::load_or_bundled("does/not/exist.csv").unwrap();
    assert!(!table.is_empty());
}

#[test]
fn test_threshold_is_respected() {
    let table = NutritionTable::bundled().unwrap();
    assert_eq!(table.lookup(&token("tomatoe"), 100), Lookup::Miss);
}
