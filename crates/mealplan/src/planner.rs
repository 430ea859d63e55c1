use chrono::{Datelike, Duration, NaiveDate};
use foodcoach_impact::{WeeklyChallenge, weekly_challenge};
use foodcoach_shared::{IngredientToken, overlaps};
use serde::Serialize;

use crate::{
    MealSlot, Season, ShoppingGroup, shopping_list,
    templates::MealTemplate,
};

const DAYS: usize = 7;
const FOOD_PER_MATCH_KG: f64 = 0.2;
const USD_PER_KG: f64 = 5.0;
const CO2_PER_KG: f64 = 2.5;
const MAX_WASTE_REDUCTION_PERCENT: f64 = 95.0;

/// Pads the featured-ingredient rotation when fewer than seven are supplied.
const VARIETY: &[&str] = &[
    "seasonal vegetables",
    "beans",
    "eggs",
    "rice",
    "spinach",
    "chicken",
    "pasta",
];

const WASTE_REDUCTION_TIPS: &[&str] = &[
    "Buy only what you need for the week",
    "Use older ingredients first (FIFO method)",
    "Transform leftovers into new meals",
    "Prep vegetables when you get home",
    "Freeze items before they spoil",
    "Make soup or smoothies with wilting produce",
    "Use herb stems in stocks and broths",
    "Keep a 'eat first' section in your fridge",
];

const PLANNING_TIPS: &[&str] = &[
    "Plan meals around ingredients you already have",
    "Cook larger portions and use leftovers creatively",
    "Prep ingredients in advance to save time",
    "Keep a flexible attitude - substitute similar ingredients",
    "Use seasonal produce for better flavor and lower cost",
    "Batch cook grains and proteins for the week",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub prep_time: u32,
    pub ingredient_match_score: u32,
    /// Template ingredients covered by what the user already has.
    pub waste_reduction_potential: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMeals {
    pub breakfast: PlannedMeal,
    pub lunch: PlannedMeal,
    pub dinner: PlannedMeal,
}

impl DayMeals {
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &PlannedMeal)> {
        [
            (MealSlot::Breakfast, &self.breakfast),
            (MealSlot::Lunch, &self.lunch),
            (MealSlot::Dinner, &self.dinner),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day_name: String,
    pub date: NaiveDate,
    /// Joined with " & " when more than seven ingredients share the week.
    pub featured_ingredient: String,
    pub meals: DayMeals,
    pub daily_tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteReduction {
    pub food_saved_kg: f64,
    pub money_saved_usd: f64,
    pub co2_reduced_kg: f64,
    pub waste_reduction_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
    pub shopping_list: Vec<ShoppingGroup>,
    pub waste_reduction: WasteReduction,
    pub season: Season,
    pub seasonal_focus: &'static [&'static str],
    pub planning_tips: &'static [&'static str],
    pub challenge: WeeklyChallenge,
}

/// Fixed-template weekly planner. Not an optimiser: every choice is a
/// deterministic function of the ingredients and the start date.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealPlanner;

impl MealPlanner {
    pub fn plan(&self, available: &[IngredientToken], start: NaiveDate) -> WeeklyPlan {
        let featured = featured_rotation(available);
        let mut days = Vec::with_capacity(DAYS);

        for day in 0..DAYS {
            let date = start + Duration::days(day as i64);
            let todays = &featured[day];

            let meals = DayMeals {
                breakfast: select_meal(MealSlot::Breakfast, available, todays, day),
                lunch: select_meal(MealSlot::Lunch, available, todays, day),
                dinner: select_meal(MealSlot::Dinner, available, todays, day),
            };

            let tip_index = (start.ordinal0() as usize + day) % WASTE_REDUCTION_TIPS.len();

            days.push(DayPlan {
                day_name: date.format("%A").to_string(),
                date,
                featured_ingredient: todays.join(" & "),
                meals,
                daily_tip: WASTE_REDUCTION_TIPS[tip_index],
            });
        }

        let season = Season::of(start);

        WeeklyPlan {
            waste_reduction: waste_reduction(&days),
            shopping_list: shopping_list(available),
            days,
            season,
            seasonal_focus: season.produce(),
            planning_tips: PLANNING_TIPS,
            challenge: weekly_challenge(start),
        }
    }
}

/// Featured ingredients for each of the seven days.
///
/// Supplied ingredients are dealt out in order, one per day, wrapping around
/// so that an eighth ingredient shares the first day. Fewer than seven are
/// topped up from [`VARIETY`].
fn featured_rotation(available: &[IngredientToken]) -> Vec<Vec<String>> {
    let mut pool: Vec<String> = available.iter().map(|i| i.as_str().to_string()).collect();

    for extra in VARIETY {
        if pool.len() >= DAYS {
            break;
        }
        if !pool.iter().any(|have| have == extra) {
            pool.push(extra.to_string());
        }
    }

    let mut days = vec![Vec::new(); DAYS];
    for (index, ingredient) in pool.into_iter().enumerate() {
        days[index % DAYS].push(ingredient);
    }
    days
}

fn covered(template: &MealTemplate, available: &[IngredientToken]) -> u32 {
    template
        .ingredients
        .iter()
        .filter(|needed| available.iter().any(|have| overlaps(needed, have.as_str())))
        .count() as u32
}

fn select_meal(
    slot: MealSlot,
    available: &[IngredientToken],
    featured: &[String],
    day: usize,
) -> PlannedMeal {
    let scored: Vec<(&MealTemplate, u32, u32)> = slot
        .templates()
        .iter()
        .map(|template| {
            let matches = covered(template, available);
            let bonus = template
                .ingredients
                .iter()
                .any(|needed| featured.iter().any(|f| overlaps(needed, f))) as u32;
            (template, matches + bonus, matches)
        })
        .collect();

    let best_score = scored.iter().map(|(_, score, _)| *score).max().unwrap_or(0);
    let best: Vec<&(&MealTemplate, u32, u32)> = scored
        .iter()
        .filter(|(_, score, _)| *score == best_score)
        .collect();

    let (template, score, matches) = *best[day % best.len()];

    PlannedMeal {
        name: template.name,
        ingredients: template.ingredients,
        prep_time: template.prep_time,
        ingredient_match_score: score,
        waste_reduction_potential: matches,
    }
}

fn waste_reduction(days: &[DayPlan]) -> WasteReduction {
    let total_meals = (days.len() * 3) as f64;
    let matches: u32 = days
        .iter()
        .flat_map(|day| day.meals.iter())
        .map(|(_, meal)| meal.waste_reduction_potential)
        .sum();

    let food_saved_kg = round_to(f64::from(matches) * FOOD_PER_MATCH_KG, 1);
    let percentage = if total_meals > 0.0 {
        round_to(f64::from(matches) / total_meals * 100.0, 1)
    } else {
        0.0
    };

    WasteReduction {
        food_saved_kg,
        money_saved_usd: round_to(food_saved_kg * USD_PER_KG, 2),
        co2_reduced_kg: round_to(food_saved_kg * CO2_PER_KG, 2),
        waste_reduction_percentage: percentage.min(MAX_WASTE_REDUCTION_PERCENT),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
