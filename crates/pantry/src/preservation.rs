use foodcoach_shared::IngredientToken;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PreservationGroup {
    Fruits,
    Vegetables,
    Herbs,
    Bread,
    General,
}

impl PreservationGroup {
    pub fn of(ingredient: &str) -> Self {
        let has_any = |words: &[&str]| words.iter().any(|word| ingredient.contains(word));

        if has_any(&["apple", "banana", "berry", "orange", "grape"]) {
            PreservationGroup::Fruits
        } else if has_any(&["carrot", "celery", "onion", "potato", "tomato"]) {
            PreservationGroup::Vegetables
        } else if has_any(&["basil", "parsley", "cilantro", "mint"]) {
            PreservationGroup::Herbs
        } else if ingredient.contains("bread") {
            PreservationGroup::Bread
        } else {
            PreservationGroup::General
        }
    }

    pub fn methods(&self) -> &'static [&'static str] {
        match self {
            PreservationGroup::Fruits => &[
                "Freeze overripe fruits for smoothies",
                "Make fruit leather or dried fruit",
                "Create fruit compotes or jams",
                "Blend into ice cream or sorbet",
            ],
            PreservationGroup::Vegetables => &[
                "Blanch and freeze for later use",
                "Make vegetable stock from scraps",
                "Pickle vegetables for preservation",
                "Dehydrate for veggie chips",
            ],
            PreservationGroup::Herbs => &[
                "Freeze in ice cubes with oil",
                "Dry herbs for seasoning blends",
                "Make herb-infused oils",
                "Create pesto or herb butter",
            ],
            PreservationGroup::Bread => &[
                "Make breadcrumbs for coating",
                "Create croutons for salads",
                "Transform into bread pudding",
                "Use for stuffing or dressing",
            ],
            PreservationGroup::General => &[
                "Store properly to extend freshness",
                "Use in multiple recipes to avoid waste",
                "Share with neighbors or friends",
                "Compost if no longer edible",
            ],
        }
    }
}

/// Preservation methods for each ingredient, in input order.
pub fn preservation_strategies(
    ingredients: &[IngredientToken],
) -> Vec<(IngredientToken, &'static [&'static str])> {
    ingredients
        .iter()
        .map(|ingredient| {
            let group = PreservationGroup::of(ingredient.as_str());
            (ingredient.clone(), group.methods())
        })
        .collect()
}
