use foodcoach_shared::{IngredientToken, title_case};
use serde::Serialize;

use crate::{AchievementTiers, constants_for};

const CO2_PER_TREE_KG: f64 = 22.0;
const LITERS_PER_SHOWER: f64 = 50.0;
const USD_PER_MEAL: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSettings {
    /// Weight assumed for every resolved ingredient.
    pub portion_kg: f64,
    pub water_goal_liters: f64,
    pub co2_goal_kg: f64,
    pub money_goal_usd: f64,
    pub tier_thresholds_kg: [f64; 4],
}

impl Default for ImpactSettings {
    fn default() -> Self {
        Self {
            portion_kg: 0.5,
            water_goal_liters: 10_000.0,
            co2_goal_kg: 100.0,
            money_goal_usd: 50.0,
            tier_thresholds_kg: [5.0, 10.0, 20.0, 50.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientImpact {
    pub ingredient: String,
    pub weight_kg: f64,
    pub water_saved_liters: f64,
    pub co2_reduced_kg: f64,
    pub land_saved_m2: f64,
    pub money_saved_usd: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactTotals {
    pub water_saved_liters: f64,
    pub co2_reduced_kg: f64,
    pub land_saved_m2: f64,
    pub money_saved_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equivalents {
    pub trees_planted: f64,
    pub showers_saved: u32,
    pub meals_funded: u32,
}

/// Share of each weekly goal reached, in percent, capped at 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub water: f64,
    pub co2: f64,
    pub money: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub ingredients: Vec<IngredientImpact>,
    pub totals: ImpactTotals,
    pub equivalents: Equivalents,
    pub percentage_of_goal: GoalProgress,
    /// Ingredients with no impact data; they add nothing to the totals.
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImpactEstimator {
    settings: ImpactSettings,
}

impl ImpactEstimator {
    pub fn new(settings: ImpactSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ImpactSettings {
        &self.settings
    }

    pub fn tiers(&self) -> AchievementTiers {
        AchievementTiers::new(self.settings.tier_thresholds_kg)
    }

    pub fn estimate(&self, ingredients: &[IngredientToken]) -> ImpactReport {
        let weight = self.settings.portion_kg;
        let mut impacts = Vec::new();
        let mut unresolved = Vec::new();
        let mut totals = ImpactTotals::default();

        for ingredient in ingredients {
            let Some(constants) = constants_for(ingredient) else {
                unresolved.push(ingredient.as_str().to_string());
                continue;
            };

            let impact = IngredientImpact {
                ingredient: title_case(ingredient.as_str()),
                weight_kg: weight,
                water_saved_liters: round_to(constants.water_liters * weight, 1),
                co2_reduced_kg: round_to(constants.co2_kg * weight, 2),
                land_saved_m2: round_to(constants.land_m2 * weight, 3),
                money_saved_usd: round_to(constants.cost_usd * weight, 2),
            };

            totals.water_saved_liters += impact.water_saved_liters;
            totals.co2_reduced_kg += impact.co2_reduced_kg;
            totals.land_saved_m2 += impact.land_saved_m2;
            totals.money_saved_usd += impact.money_saved_usd;
            impacts.push(impact);
        }

        let totals = ImpactTotals {
            water_saved_liters: round_to(totals.water_saved_liters, 1),
            co2_reduced_kg: round_to(totals.co2_reduced_kg, 2),
            land_saved_m2: round_to(totals.land_saved_m2, 3),
            money_saved_usd: round_to(totals.money_saved_usd, 2),
        };

        let equivalents = Equivalents {
            trees_planted: round_to(totals.co2_reduced_kg / CO2_PER_TREE_KG, 1),
            showers_saved: (totals.water_saved_liters / LITERS_PER_SHOWER).round() as u32,
            meals_funded: (totals.money_saved_usd / USD_PER_MEAL).round() as u32,
        };

        let percentage_of_goal = GoalProgress {
            water: percentage(totals.water_saved_liters, self.settings.water_goal_liters),
            co2: percentage(totals.co2_reduced_kg, self.settings.co2_goal_kg),
            money: percentage(totals.money_saved_usd, self.settings.money_goal_usd),
        };

        ImpactReport {
            ingredients: impacts,
            totals,
            equivalents,
            percentage_of_goal,
            unresolved,
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn percentage(value: f64, goal: f64) -> f64 {
    round_to(value / goal * 100.0, 2).min(100.0)
}
