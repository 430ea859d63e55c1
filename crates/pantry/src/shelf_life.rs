use foodcoach_shared::overlaps;
use serde::{Deserialize, Serialize};

/// Where an ingredient is kept. Unrecognised values fall back to the fridge.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StorageLocation {
    #[default]
    Fridge,
    Counter,
    Freezer,
    Pantry,
    CookedFridge,
}

impl StorageLocation {
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

/// Shelf life in days per location, plus what spoilage looks like.
pub(crate) struct ShelfLife {
    pub fridge: Option<f32>,
    pub counter: Option<f32>,
    pub freezer: Option<f32>,
    pub pantry: Option<f32>,
    pub cooked_fridge: Option<f32>,
    pub signs: &'static [&'static str],
}

impl ShelfLife {
    const fn new(signs: &'static [&'static str]) -> Self {
        Self {
            fridge: None,
            counter: None,
            freezer: None,
            pantry: None,
            cooked_fridge: None,
            signs,
        }
    }

    const fn fridge(mut self, days: f32) -> Self {
        self.fridge = Some(days);
        self
    }

    const fn counter(mut self, days: f32) -> Self {
        self.counter = Some(days);
        self
    }

    const fn freezer(mut self, days: f32) -> Self {
        self.freezer = Some(days);
        self
    }

    const fn pantry(mut self, days: f32) -> Self {
        self.pantry = Some(days);
        self
    }

    const fn cooked_fridge(mut self, days: f32) -> Self {
        self.cooked_fridge = Some(days);
        self
    }

    /// Days at `location`, else the fridge value, else a week.
    pub fn days_at(&self, location: StorageLocation) -> f32 {
        let at = match location {
            StorageLocation::Fridge => self.fridge,
            StorageLocation::Counter => self.counter,
            StorageLocation::Freezer => self.freezer,
            StorageLocation::Pantry => self.pantry,
            StorageLocation::CookedFridge => self.cooked_fridge,
        };
        at.or(self.fridge).unwrap_or(7.0)
    }
}

const SHELF_LIFE: &[(&str, ShelfLife)] = &[
    ("tomato", ShelfLife::new(&["soft spots", "wrinkled skin", "mold"]).fridge(7.0).counter(3.0)),
    ("banana", ShelfLife::new(&["brown spots", "mushy texture", "strong odor"]).fridge(10.0).counter(4.0)),
    ("apple", ShelfLife::new(&["brown spots", "soft texture", "wrinkled skin"]).fridge(30.0).counter(7.0)),
    ("lettuce", ShelfLife::new(&["wilted leaves", "brown edges", "slimy texture"]).fridge(10.0).counter(2.0)),
    ("carrot", ShelfLife::new(&["white spots", "rubbery texture", "black spots"]).fridge(21.0).counter(7.0)),
    ("onion", ShelfLife::new(&["soft spots", "sprouting", "mold"]).fridge(30.0).counter(14.0)),
    ("potato", ShelfLife::new(&["green spots", "sprouting", "soft spots"]).fridge(14.0).counter(21.0)),
    ("milk", ShelfLife::new(&["sour smell", "chunky texture", "separation"]).fridge(7.0).counter(0.5)),
    ("cheese", ShelfLife::new(&["mold growth", "strong odor", "hard texture"]).fridge(14.0).counter(2.0)),
    ("yogurt", ShelfLife::new(&["separation", "mold", "off smell"]).fridge(14.0).counter(1.0)),
    ("chicken", ShelfLife::new(&["gray color", "slimy texture", "off odor"]).fridge(2.0).freezer(180.0)),
    ("beef", ShelfLife::new(&["brown color", "sticky texture", "sour smell"]).fridge(3.0).freezer(240.0)),
    ("fish", ShelfLife::new(&["fishy odor", "slimy texture", "cloudy eyes"]).fridge(2.0).freezer(90.0)),
    ("eggs", ShelfLife::new(&["cracked shell", "floating in water", "sulfur smell"]).fridge(28.0).counter(7.0)),
    ("rice", ShelfLife::new(&["insects", "musty smell", "hard texture"]).pantry(365.0).cooked_fridge(3.0)),
    ("pasta", ShelfLife::new(&["insects", "stale smell", "brittle texture"]).pantry(730.0).cooked_fridge(5.0)),
    ("bread", ShelfLife::new(&["mold spots", "hard texture", "stale smell"]).counter(5.0).fridge(10.0).freezer(90.0)),
];

static DEFAULT_SHELF_LIFE: ShelfLife =
    ShelfLife::new(&["changes in texture", "off odor", "discoloration"]).fridge(7.0).counter(3.0);

/// First table entry overlapping `ingredient`, or a generic estimate.
pub(crate) fn shelf_life_for(ingredient: &str) -> &'static ShelfLife {
    SHELF_LIFE
        .iter()
        .find(|(key, _)| overlaps(key, ingredient))
        .map(|(_, life)| life)
        .unwrap_or(&DEFAULT_SHELF_LIFE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parsing() {
        assert_eq!(StorageLocation::parse_or_default("counter"), StorageLocation::Counter);
        assert_eq!(
            StorageLocation::parse_or_default("cooked_fridge"),
            StorageLocation::CookedFridge
        );
        assert_eq!(StorageLocation::parse_or_default("FREEZER"), StorageLocation::Freezer);
        assert_eq!(StorageLocation::parse_or_default("garage"), StorageLocation::Fridge);
    }

    #[test]
    fn test_days_at_falls_back_to_fridge() {
        assert_eq!(shelf_life_for("chicken").days_at(StorageLocation::Counter), 2.0);
        assert_eq!(shelf_life_for("rice").days_at(StorageLocation::Counter), 7.0);
        assert_eq!(shelf_life_for("milk").days_at(StorageLocation::Counter), 0.5);
    }

    #[test]
    fn test_unknown_ingredient_uses_default() {
        let life = shelf_life_for("dragonfruit");
        assert_eq!(life.days_at(StorageLocation::Fridge), 7.0);
        assert_eq!(life.days_at(StorageLocation::Counter), 3.0);
        assert_eq!(life.signs[0], "changes in texture");
    }
}
