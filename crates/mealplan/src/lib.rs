//! Weekly meal planning around the ingredients already in the kitchen.

mod planner;
mod season;
mod shopping;
mod templates;

pub use planner::{DayMeals, DayPlan, MealPlanner, PlannedMeal, WasteReduction, WeeklyPlan};
pub use season::Season;
pub use shopping::{ShoppingGroup, shopping_list};
pub use templates::MealSlot;
