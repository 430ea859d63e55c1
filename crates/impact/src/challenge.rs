use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyChallenge {
    pub title: &'static str,
    pub description: &'static str,
    pub target: &'static str,
}

const CHALLENGES: [WeeklyChallenge; 4] = [
    WeeklyChallenge {
        title: "Zero Vegetable Waste",
        description: "Use every part of your vegetables this week",
        target: "Save 10kg CO2 with vegetable scraps",
    },
    WeeklyChallenge {
        title: "Leftover Master",
        description: "Transform all leftovers into new meals",
        target: "Create 5 new recipes from leftovers",
    },
    WeeklyChallenge {
        title: "Storage Optimizer",
        description: "Perfect your food storage techniques",
        target: "Extend food life by 3+ days",
    },
    WeeklyChallenge {
        title: "Portion Pro",
        description: "Cook exact portions to minimize waste",
        target: "Zero plate waste for 7 days",
    },
];

/// The challenge for the ISO week containing `date`.
pub fn weekly_challenge(date: NaiveDate) -> WeeklyChallenge {
    let week = date.iso_week().week() as usize;
    CHALLENGES[week % CHALLENGES.len()]
}
