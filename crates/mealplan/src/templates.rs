use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

pub(crate) struct MealTemplate {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub prep_time: u32,
}

const BREAKFAST: &[MealTemplate] = &[
    MealTemplate {
        name: "Veggie Omelet",
        ingredients: &["eggs", "onion", "bell pepper", "cheese"],
        prep_time: 10,
    },
    MealTemplate {
        name: "Fruit Smoothie Bowl",
        ingredients: &["banana", "berries", "yogurt", "oats"],
        prep_time: 5,
    },
    MealTemplate {
        name: "Avocado Toast",
        ingredients: &["bread", "avocado", "tomato", "eggs"],
        prep_time: 8,
    },
    MealTemplate {
        name: "Leftover Fried Rice",
        ingredients: &["rice", "eggs", "vegetables", "soy sauce"],
        prep_time: 12,
    },
];

const LUNCH: &[MealTemplate] = &[
    MealTemplate {
        name: "Quick Stir Fry",
        ingredients: &["vegetables", "protein", "rice", "garlic"],
        prep_time: 15,
    },
    MealTemplate {
        name: "Soup & Salad",
        ingredients: &["broth", "vegetables", "greens", "bread"],
        prep_time: 20,
    },
    MealTemplate {
        name: "Grain Bowl",
        ingredients: &["quinoa", "roasted vegetables", "protein", "dressing"],
        prep_time: 25,
    },
    MealTemplate {
        name: "Leftover Remix",
        ingredients: &["yesterday dinner", "fresh herbs", "new sauce"],
        prep_time: 8,
    },
];

const DINNER: &[MealTemplate] = &[
    MealTemplate {
        name: "One-Pan Roasted Meal",
        ingredients: &["protein", "root vegetables", "herbs", "olive oil"],
        prep_time: 35,
    },
    MealTemplate {
        name: "Pasta Primavera",
        ingredients: &["pasta", "seasonal vegetables", "garlic", "cheese"],
        prep_time: 20,
    },
    MealTemplate {
        name: "Sheet Pan Fish",
        ingredients: &["fish", "vegetables", "lemon", "herbs"],
        prep_time: 25,
    },
    MealTemplate {
        name: "Curry Night",
        ingredients: &["protein", "vegetables", "coconut milk", "spices"],
        prep_time: 30,
    },
];

impl MealSlot {
    pub(crate) fn templates(&self) -> &'static [MealTemplate] {
        match self {
            MealSlot::Breakfast => BREAKFAST,
            MealSlot::Lunch => LUNCH,
            MealSlot::Dinner => DINNER,
        }
    }
}
