use chrono::{Duration, NaiveDate};
use foodcoach_shared::{IngredientToken, title_case};
use serde::Serialize;

use crate::{StorageLocation, shelf_life::shelf_life_for};

const MAX_STORAGE_TIPS: usize = 3;
const URGENT_WITHIN_DAYS: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn from_days(days: f32) -> Self {
        if days <= 1.0 {
            Urgency::Critical
        } else if days <= 3.0 {
            Urgency::High
        } else if days <= 7.0 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "Critical - Use Today!",
            Urgency::High => "High - Use Soon",
            Urgency::Medium => "Medium - Plan Usage",
            Urgency::Low => "Low - Fresh",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Critical => "#dc3545",
            Urgency::High => "#fd7e14",
            Urgency::Medium => "#ffc107",
            Urgency::Low => "#28a745",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpirationPrediction {
    pub ingredient: String,
    pub storage_location: StorageLocation,
    pub days_remaining: f32,
    pub expiration_date: NaiveDate,
    #[serde(skip)]
    pub urgency: Urgency,
    pub urgency_level: &'static str,
    pub urgency_color: &'static str,
    pub spoilage_signs: &'static [&'static str],
    pub storage_tips: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingReport {
    /// Soonest to expire first.
    pub expiration_predictions: Vec<ExpirationPrediction>,
    pub urgent_items: Vec<ExpirationPrediction>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationTracker;

impl ExpirationTracker {
    pub fn predict(
        &self,
        ingredient: &IngredientToken,
        location: StorageLocation,
        today: NaiveDate,
    ) -> ExpirationPrediction {
        let life = shelf_life_for(ingredient.as_str());
        let days_remaining = life.days_at(location);
        let urgency = Urgency::from_days(days_remaining);

        ExpirationPrediction {
            ingredient: title_case(ingredient.as_str()),
            storage_location: location,
            days_remaining,
            expiration_date: today + Duration::days(days_remaining.floor() as i64),
            urgency,
            urgency_level: urgency.label(),
            urgency_color: urgency.color(),
            spoilage_signs: life.signs,
            storage_tips: storage_tips(ingredient.as_str(), location),
        }
    }

    pub fn track(
        &self,
        ingredients: &[IngredientToken],
        location: StorageLocation,
        today: NaiveDate,
    ) -> TrackingReport {
        let mut predictions: Vec<ExpirationPrediction> = ingredients
            .iter()
            .map(|ingredient| self.predict(ingredient, location, today))
            .collect();

        predictions.sort_by(|a, b| a.days_remaining.total_cmp(&b.days_remaining));

        let urgent_items = predictions
            .iter()
            .filter(|p| p.days_remaining <= URGENT_WITHIN_DAYS)
            .cloned()
            .collect();

        TrackingReport {
            expiration_predictions: predictions,
            urgent_items,
        }
    }
}

/// Ingredient-specific advice first, then general advice for the location.
fn storage_tips(ingredient: &str, location: StorageLocation) -> Vec<&'static str> {
    const SPECIFIC: &[(&str, &str)] = &[
        ("banana", "Store separately as they release ethylene gas"),
        ("tomato", "Store stem-side down to prevent moisture loss"),
        ("potato", "Store in dark place to prevent greening"),
        ("onion", "Store in well-ventilated area"),
        ("bread", "Store in breadbox or sealed container"),
    ];

    let general: &[&str] = match location {
        StorageLocation::Fridge => &[
            "Store in airtight container to prevent moisture loss",
            "Keep away from strong-smelling foods",
            "Check regularly for signs of spoilage",
        ],
        StorageLocation::Counter => &[
            "Keep in cool, dry place away from direct sunlight",
            "Ensure good air circulation",
            "Store away from heat sources",
        ],
        StorageLocation::Freezer => &[
            "Wrap tightly to prevent freezer burn",
            "Label with date for easy tracking",
            "Use freezer-safe containers",
        ],
        StorageLocation::Pantry | StorageLocation::CookedFridge => &[],
    };

    SPECIFIC
        .iter()
        .filter(|(key, _)| ingredient.contains(key))
        .map(|(_, tip)| *tip)
        .take(1)
        .chain(general.iter().copied())
        .take(MAX_STORAGE_TIPS)
        .collect()
}
