//! Environmental and economic impact of using food instead of wasting it.

mod achievement;
mod challenge;
mod constants;
mod estimator;
mod tips;

pub use achievement::{Achievement, AchievementTiers};
pub use challenge::{WeeklyChallenge, weekly_challenge};
pub use constants::{ImpactConstants, constants_for};
pub use estimator::{
    Equivalents, GoalProgress, ImpactEstimator, ImpactReport, ImpactSettings, ImpactTotals,
    IngredientImpact,
};
pub use tips::{SustainabilityTip, daily_tip, did_you_know};
