use anyhow::{Result, anyhow};
use chrono::Local;
use foodcoach::{Config, agent::FoodCoach};
use foodcoach_nutrition::{Lookup, NutritionRecord};
use foodcoach_shared::IngredientToken;

/// Run one message through the chat pipeline and print the reply.
pub async fn ask(config: Config, message: String) -> Result<()> {
    let coach = FoodCoach::from_config(&config)?;
    let reply = coach.respond(&message, Local::now().date_naive()).await;

    println!("{reply}");

    Ok(())
}

/// Print the nutrition record matched for one ingredient.
pub fn lookup(config: Config, ingredient: String) -> Result<()> {
    let token =
        IngredientToken::new(&ingredient).ok_or_else(|| anyhow!("ingredient name is empty"))?;
    let coach = FoodCoach::from_config(&config)?;

    let record = match coach.lookup(&token) {
        Lookup::Exact(record) => record,
        Lookup::Approximate { record, score } => {
            println!("No exact entry for '{token}', closest is '{}' ({score}%)", record.name);
            record
        }
        Lookup::Miss => {
            println!("No nutrition data available for '{token}'");
            return Ok(());
        }
    };

    println!("{} (per 100g)", record.name);
    println!("  Calories: {}", NutritionRecord::display_value(record.calories));
    println!("  Protein:  {}", NutritionRecord::display_value(record.protein_g));
    println!("  Carbs:    {}", NutritionRecord::display_value(record.carbs_g));
    println!("  Fat:      {}", NutritionRecord::display_value(record.fat_g));
    if let Some(tip) = record.storage_tip() {
        println!("  Storage:  {tip}");
    }

    Ok(())
}
