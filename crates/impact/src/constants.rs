use foodcoach_shared::{IngredientToken, overlaps};

/// Resources embodied in one kilogram of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactConstants {
    pub water_liters: f64,
    pub co2_kg: f64,
    pub land_m2: f64,
    pub cost_usd: f64,
}

const fn per_kg(water_liters: f64, co2_kg: f64, land_m2: f64, cost_usd: f64) -> ImpactConstants {
    ImpactConstants {
        water_liters,
        co2_kg,
        land_m2,
        cost_usd,
    }
}

const IMPACT_TABLE: &[(&str, ImpactConstants)] = &[
    ("tomato", per_kg(150.0, 0.7, 0.02, 3.50)),
    ("bread", per_kg(1100.0, 1.2, 0.15, 2.80)),
    ("cheese", per_kg(5000.0, 8.9, 0.25, 12.00)),
    ("chicken", per_kg(4325.0, 6.9, 0.18, 8.50)),
    ("beef", per_kg(15400.0, 60.0, 1.25, 18.00)),
    ("milk", per_kg(1000.0, 3.2, 0.09, 4.20)),
    ("rice", per_kg(2500.0, 2.7, 0.07, 2.10)),
    ("potato", per_kg(287.0, 0.3, 0.03, 1.80)),
    ("apple", per_kg(822.0, 0.4, 0.04, 3.20)),
    ("carrot", per_kg(131.0, 0.2, 0.02, 1.90)),
    ("onion", per_kg(272.0, 0.3, 0.02, 1.60)),
    ("pasta", per_kg(1850.0, 1.1, 0.12, 1.50)),
    ("eggs", per_kg(3300.0, 4.8, 0.16, 4.50)),
    ("fish", per_kg(2500.0, 3.0, 0.05, 15.00)),
];

/// Exact key first, then the first key contained in the ingredient (or
/// containing it).
pub fn constants_for(ingredient: &IngredientToken) -> Option<&'static ImpactConstants> {
    let name = ingredient.as_str();

    IMPACT_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .or_else(|| IMPACT_TABLE.iter().find(|(key, _)| overlaps(key, name)))
        .map(|(_, constants)| constants)
}
