use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A sustainability fact with a matching action, as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SustainabilityTip {
    pub fact: &'static str,
    pub action: &'static str,
    pub impact_level: &'static str,
    pub date: String,
}

const FACTS: [(&str, &str, &str); 4] = [
    (
        "Food waste accounts for 8-10% of global greenhouse gas emissions",
        "Plan your meals to reduce waste",
        "High",
    ),
    (
        "Composting food scraps can reduce methane emissions by 50%",
        "Start a compost bin for vegetable scraps",
        "Medium",
    ),
    (
        "Buying seasonal produce reduces carbon footprint by 30%",
        "Choose seasonal ingredients when shopping",
        "Medium",
    ),
    (
        "Proper food storage can extend freshness by 50%",
        "Learn optimal storage methods for each ingredient",
        "High",
    ),
];

const DID_YOU_KNOW: [&str; 10] = [
    "🌍 Food waste accounts for 8-10% of global greenhouse gas emissions!",
    "💧 Throwing away 1kg of beef wastes 15,000 liters of water used in production.",
    "🍞 Reducing bread waste by 10% could save 3 million slices daily worldwide.",
    "🍅 You can save up to 150 liters of water by not wasting 1kg of tomatoes.",
    "🥬 Storing leafy greens properly can extend their life by 5-7 days.",
    "🧄 One rotten onion can spoil an entire bag - always remove damaged ones first.",
    "🥕 Carrot tops are edible and nutritious - perfect for making pesto or salads!",
    "🍌 Overripe bananas are perfect for baking and contain more antioxidants.",
    "🧀 Cheese rinds can be added to soups for extra flavor instead of throwing away.",
    "🥔 Potato skins contain most of the nutrients - clean and cook them instead of peeling.",
];

/// Tip of the day; stable for a whole calendar day.
pub fn daily_tip(date: NaiveDate) -> SustainabilityTip {
    let (fact, action, impact_level) = FACTS[date.ordinal0() as usize % FACTS.len()];

    SustainabilityTip {
        fact,
        action,
        impact_level,
        date: date.format("%Y-%m-%d").to_string(),
    }
}

pub fn did_you_know(date: NaiveDate) -> &'static str {
    DID_YOU_KNOW[date.ordinal0() as usize % DID_YOU_KNOW.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_tip_for_new_year() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let tip = daily_tip(date);

        assert_eq!(tip.impact_level, "High");
        assert!(tip.fact.starts_with("Food waste accounts"));
        assert_eq!(tip.date, "2026-01-01");
    }

    #[test]
    fn test_tips_rotate_daily() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let tomorrow = today.succ_opt().unwrap();

        assert_ne!(daily_tip(today).fact, daily_tip(tomorrow).fact);
        assert_ne!(did_you_know(today), did_you_know(tomorrow));
    }
}
