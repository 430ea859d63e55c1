//! Markdown-flavoured chat replies, one template per intent.

use foodcoach_impact::{Achievement, ImpactReport, WeeklyChallenge};
use foodcoach_mealplan::WeeklyPlan;
use foodcoach_nutrition::{Lookup, NutritionRecord};
use foodcoach_recipe::{Recipe, RecipeMatch, SmartRecipeEngine};
use foodcoach_shared::{IngredientToken, title_case};

const SECTION_BREAK: &str = "\n\n";
const INGREDIENT_PREVIEW_CHARS: usize = 80;
const PLAN_DAYS_SHOWN: usize = 3;
const PLAN_TIPS_SHOWN: usize = 3;
const PRESERVATION_METHODS_SHOWN: usize = 3;
const COOKING_TIPS_SHOWN: usize = 2;

pub const HELP: &str = "👋 **Hello! I'm your AI Food Waste and Nutrition Coach!**

I help you reduce food waste and improve nutrition by finding recipes for your leftover ingredients.

**How to use me:**
- List your ingredients separated by commas (e.g., \"tomato, bread, cheese\")
- I'll find recipes, provide nutrition facts, and give storage tips
- Ask for a \"weekly meal plan\" or the \"impact\" of your ingredients

**Try saying:**
- \"tomato, onion, garlic\"
- \"leftover chicken, rice, vegetables\"
- \"meal plan for eggs, spinach, bread\"

What ingredients do you have available? 🥬🍅🧄";

/// Everything gathered for a plain ingredient query.
pub struct IngredientFindings<'a> {
    pub smart_recipes: &'a [RecipeMatch],
    pub recipes: &'a [Recipe],
    pub nutrition: &'a [(IngredientToken, Lookup<'a>)],
    pub preservation: &'a [(IngredientToken, &'static [&'static str])],
    pub impact: &'a ImpactReport,
    pub achievement: Achievement,
    pub did_you_know: &'a str,
}

pub fn ingredient_reply(findings: &IngredientFindings<'_>) -> String {
    let sections = [
        smart_recipes(findings.smart_recipes),
        recipes(findings.recipes),
        nutrition(findings.nutrition),
        storage_tips(findings.nutrition),
        preservation(findings.preservation),
        Some(impact(findings.impact, findings.achievement)),
        Some(format!("💡 **Did You Know?**\n{}", findings.did_you_know)),
    ];

    sections
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(SECTION_BREAK)
}

pub fn impact_reply(
    report: &ImpactReport,
    achievement: Achievement,
    challenge: WeeklyChallenge,
) -> String {
    let progress = &report.percentage_of_goal;
    let goals = format!(
        "📊 **Progress Toward Weekly Goals:**\n\
         💧 Water: {}%\n\
         🌱 CO₂: {}%\n\
         💰 Money: {}%",
        progress.water, progress.co2, progress.money
    );

    [
        impact(report, achievement),
        goals,
        weekly_challenge(challenge),
    ]
    .join(SECTION_BREAK)
}

pub fn meal_plan_reply(plan: &WeeklyPlan) -> String {
    let mut sections = vec!["📅 **Your Personalized Weekly Meal Plan**".to_string()];

    for day in plan.days.iter().take(PLAN_DAYS_SHOWN) {
        let mut lines = vec![format!(
            "**{}** ({}) · featuring {}:",
            day.day_name,
            day.date,
            title_case(&day.featured_ingredient)
        )];
        for (slot, meal) in day.meals.iter() {
            lines.push(format!("• {slot}: {} ({} min)", meal.name, meal.prep_time));
        }
        lines.push(format!("💡 *{}*", day.daily_tip));
        sections.push(lines.join("\n"));
    }

    if !plan.shopping_list.is_empty() {
        let mut lines = vec!["🛒 **Smart Shopping List:**".to_string()];
        for group in &plan.shopping_list {
            lines.push(format!(
                "**{}:** {}",
                title_case(group.category.as_ref()),
                group.items.join(", ")
            ));
        }
        sections.push(lines.join("\n"));
    }

    let waste = &plan.waste_reduction;
    sections.push(format!(
        "🌱 **Waste Reduction Potential:**\n\
         • Food Saved: {} kg\n\
         • Money Saved: ${}\n\
         • CO₂ Reduced: {} kg\n\
         • Waste Reduction: {}%",
        waste.food_saved_kg,
        waste.money_saved_usd,
        waste.co2_reduced_kg,
        waste.waste_reduction_percentage
    ));

    sections.push(format!(
        "🍂 **In Season ({}):** {}",
        title_case(&plan.season.to_string()),
        plan.seasonal_focus.join(", ")
    ));

    let mut tips = vec!["📋 **Pro Tips:**".to_string()];
    tips.extend(
        plan.planning_tips
            .iter()
            .take(PLAN_TIPS_SHOWN)
            .map(|tip| format!("• {tip}")),
    );
    sections.push(tips.join("\n"));

    sections.push(weekly_challenge(plan.challenge));

    sections.join(SECTION_BREAK)
}

fn smart_recipes(matches: &[RecipeMatch]) -> Option<String> {
    if matches.is_empty() {
        return None;
    }

    let blocks: Vec<String> = matches
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let mut lines = vec![
                format!(
                    "**{}. {}** ⭐ {}% Match",
                    i + 1,
                    recipe.name,
                    recipe.match_score
                ),
                format!("🍽️ *{} Cuisine*", recipe.cuisine),
                format!(
                    "⏱️ Prep Time: {} minutes | Difficulty: {}",
                    recipe.prep_time, recipe.difficulty
                ),
            ];

            let available = recipe.available_ingredients();
            if !available.is_empty() {
                lines.push(format!("✅ **You have:** {}", available.join(", ")));
            }
            if !recipe.missing_ingredients.is_empty() {
                lines.push(format!(
                    "🛒 **Need to buy:** {}",
                    recipe.missing_ingredients.join(", ")
                ));
            }

            lines.push("**Instructions:**".to_string());
            lines.extend(
                recipe
                    .instructions
                    .iter()
                    .enumerate()
                    .map(|(step, instruction)| format!("{}. {instruction}", step + 1)),
            );

            lines.push("💡 **Pro Tips:**".to_string());
            lines.extend(
                SmartRecipeEngine::cooking_tips(recipe.cuisine)
                    .into_iter()
                    .take(COOKING_TIPS_SHOWN)
                    .map(|tip| format!("• {tip}")),
            );

            lines.push(format!(
                "🌱 **Waste Reduction Score:** {}%",
                recipe.waste_reduction_score
            ));
            lines.join("\n")
        })
        .collect();

    Some(format!(
        "👨‍🍳 **Smart Recipe Recommendations:**\n\n{}",
        blocks.join("\n---\n")
    ))
}

fn recipes(recipes: &[Recipe]) -> Option<String> {
    if recipes.is_empty() {
        return None;
    }

    let mut lines = vec!["🍳 **Recipes You Can Try:**".to_string()];
    for (i, recipe) in recipes.iter().enumerate() {
        lines.push(format!("{}. **{}**", i + 1, recipe.name));
        lines.push(format!(
            "   *Ingredients: {}*",
            preview(&recipe.ingredients.join(", "))
        ));
        match &recipe.url {
            Some(url) => lines.push(format!("   [📖 View Recipe]({url})")),
            None => {
                if let Some(minutes) = recipe.prep_time {
                    lines.push(format!("   ⏱️ {minutes} min"));
                }
                if !recipe.instructions.is_empty() {
                    lines.push(format!("   {}", recipe.instructions.join(" ")));
                }
            }
        }
    }
    Some(lines.join("\n"))
}

fn preview(text: &str) -> String {
    if text.chars().count() <= INGREDIENT_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(INGREDIENT_PREVIEW_CHARS).collect();
    format!("{cut}...")
}

fn nutrition(entries: &[(IngredientToken, Lookup<'_>)]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut lines = vec!["🥗 **Nutrition Facts (per 100g):**".to_string()];
    for (token, lookup) in entries {
        let name = title_case(token.as_str());
        let line = match lookup {
            Lookup::Exact(record) => format!("**{name}**: {}", facts(record)),
            Lookup::Approximate { record, .. } => {
                format!("**{name}** (as {}): {}", record.name, facts(record))
            }
            Lookup::Miss => format!("**{name}**: no data available"),
        };
        lines.push(line);
    }
    Some(lines.join("\n"))
}

fn facts(record: &NutritionRecord) -> String {
    format!(
        "{} kcal, {} protein, {} carbs, {} fat",
        NutritionRecord::display_value(record.calories),
        grams(record.protein_g),
        grams(record.carbs_g),
        grams(record.fat_g),
    )
}

fn grams(value: Option<f32>) -> String {
    match value {
        Some(_) => format!("{}g", NutritionRecord::display_value(value)),
        None => NutritionRecord::display_value(value),
    }
}

fn storage_tips(entries: &[(IngredientToken, Lookup<'_>)]) -> Option<String> {
    let tips: Vec<String> = entries
        .iter()
        .filter_map(|(token, lookup)| {
            let tip = lookup.record()?.storage_tip()?;
            Some(format!("**{}**: {tip}", title_case(token.as_str())))
        })
        .collect();

    if tips.is_empty() {
        return None;
    }
    Some(format!("📦 **Storage Tips:**\n{}", tips.join("\n")))
}

fn preservation(strategies: &[(IngredientToken, &'static [&'static str])]) -> Option<String> {
    if strategies.is_empty() {
        return None;
    }

    let blocks: Vec<String> = strategies
        .iter()
        .map(|(token, methods)| {
            let mut lines = vec![format!("**{}:**", title_case(token.as_str()))];
            lines.extend(
                methods
                    .iter()
                    .take(PRESERVATION_METHODS_SHOWN)
                    .map(|method| format!("• {method}")),
            );
            lines.join("\n")
        })
        .collect();

    Some(format!(
        "🥫 **Food Preservation Strategies:**\n\n{}",
        blocks.join("\n\n")
    ))
}

fn impact(report: &ImpactReport, achievement: Achievement) -> String {
    let totals = &report.totals;
    let equivalents = &report.equivalents;

    let mut text = format!(
        "🌍 **Environmental Impact Analysis:**\n\n\
         **Your Waste Reduction Impact:**\n\
         💧 Water Saved: {} liters\n\
         🌱 CO₂ Reduced: {} kg\n\
         💰 Money Saved: ${}\n\n\
         **That's equivalent to:**\n\
         🚿 {} shower(s) worth of water\n\
         🌳 Planting {} tree(s)\n\
         🍽️ Funding {} meal(s) for someone in need\n\n\
         **Achievement Unlocked:** {} {}\n\
         *{}*",
        totals.water_saved_liters,
        totals.co2_reduced_kg,
        totals.money_saved_usd,
        equivalents.showers_saved,
        equivalents.trees_planted,
        equivalents.meals_funded,
        achievement.badge,
        achievement.level,
        achievement.description,
    );

    if !report.unresolved.is_empty() {
        let names: Vec<String> = report.unresolved.iter().map(|n| title_case(n)).collect();
        text.push_str(&format!("\n_No impact data for: {}_", names.join(", ")));
    }
    text
}

fn weekly_challenge(challenge: WeeklyChallenge) -> String {
    format!(
        "🏆 **This Week's Challenge:** {}\n*{}*\n**Target:** {}",
        challenge.title, challenge.description, challenge.target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "a".repeat(100);
        let short = preview(&long);

        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), INGREDIENT_PREVIEW_CHARS + 3);
        assert_eq!(preview("tomato"), "tomato");
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        assert!(smart_recipes(&[]).is_none());
        assert!(recipes(&[]).is_none());
        assert!(nutrition(&[]).is_none());
        assert!(preservation(&[]).is_none());
    }

    #[test]
    fn test_nutrition_reports_miss_as_no_data() {
        let token = IngredientToken::new("xyzzyx").unwrap();
        let text = nutrition(&[(token, Lookup::Miss)]).unwrap();

        assert!(text.contains("**Xyzzyx**: no data available"));
    }

    #[test]
    fn test_nutrition_names_the_approximate_match() {
        let record = NutritionRecord {
            name: "Tomato".to_string(),
            calories: Some(18.0),
            protein_g: Some(0.9),
            carbs_g: Some(3.9),
            fat_g: None,
            storage_tip: None,
        };
        let token = IngredientToken::new("tomatoe").unwrap();
        let entries = [(
            token,
            Lookup::Approximate {
                record: &record,
                score: 92,
            },
        )];

        let text = nutrition(&entries).unwrap();
        assert!(text.contains("**Tomatoe** (as Tomato): 18 kcal, 0.9g protein, 3.9g carbs, N/A fat"));
        assert!(storage_tips(&entries).is_none());
    }
}
