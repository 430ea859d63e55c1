use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub level: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
}

const LEVELS: [Achievement; 5] = [
    Achievement {
        level: "Getting Started",
        badge: "🌿",
        description: "Keep up the good work!",
    },
    Achievement {
        level: "Earth Friend",
        badge: "🌍",
        description: "Every action counts!",
    },
    Achievement {
        level: "Green Champion",
        badge: "🌱",
        description: "Making a positive difference!",
    },
    Achievement {
        level: "Eco Warrior",
        badge: "🌿",
        description: "Great contribution to sustainability!",
    },
    Achievement {
        level: "Climate Hero",
        badge: "🌟",
        description: "Outstanding environmental impact!",
    },
];

/// Step function from kilograms of CO2 saved to a named level.
///
/// Each threshold is the lower bound (inclusive) of the next level up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementTiers {
    thresholds_kg: [f64; 4],
}

impl AchievementTiers {
    pub fn new(thresholds_kg: [f64; 4]) -> Self {
        Self { thresholds_kg }
    }

    pub fn level_for(&self, co2_saved_kg: f64) -> Achievement {
        let reached = self
            .thresholds_kg
            .iter()
            .take_while(|threshold| co2_saved_kg >= **threshold)
            .count();

        LEVELS[reached]
    }
}

impl Default for AchievementTiers {
    fn default() -> Self {
        Self::new([5.0, 10.0, 20.0, 50.0])
    }
}
