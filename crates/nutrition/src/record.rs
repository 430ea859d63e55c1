use serde::{Deserialize, Serialize};

/// One row of the nutrition dataset, values per 100g.
///
/// Numeric cells may be blank in the source file; those deserialize to `None`
/// and are rendered as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(rename = "Ingredient")]
    pub name: String,

    #[serde(rename = "Calories_per_100g", deserialize_with = "csv::invalid_option")]
    pub calories: Option<f32>,

    #[serde(rename = "Protein_g", deserialize_with = "csv::invalid_option")]
    pub protein_g: Option<f32>,

    #[serde(rename = "Carbs_g", deserialize_with = "csv::invalid_option")]
    pub carbs_g: Option<f32>,

    #[serde(rename = "Fat_g", deserialize_with = "csv::invalid_option")]
    pub fat_g: Option<f32>,

    #[serde(rename = "Storage_Tip", default)]
    pub storage_tip: Option<String>,
}

impl NutritionRecord {
    /// Storage tip with blank values treated as missing.
    pub fn storage_tip(&self) -> Option<&str> {
        self.storage_tip
            .as_deref()
            .map(str::trim)
            .filter(|tip| !tip.is_empty() && *tip != "N/A")
    }

    /// Render a nutrient for display, `N/A` when absent.
    pub fn display_value(value: Option<f32>) -> String {
        match value {
            Some(value) => format!("{value}"),
            None => "N/A".to_string(),
        }
    }
}
