//! Plain-text views of ingredient lists and recipe results.

use crate::expiration::{days_until, expiration_timeline};
use crate::model::{IngredientRecord, RecipeResult};
use chrono::NaiveDate;
use std::fmt::Write;

const UNKNOWN_DATE: &str = "unknown";
const MAX_BAR_WIDTH: i64 = 30;

fn date_cell(record: &IngredientRecord) -> String {
    record
        .expiration_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Two-column table of ingredients and expiration dates.
pub fn ingredient_table(records: &[&IngredientRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Ingredient".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  Expiration Date", "Ingredient");
    let _ = writeln!(out, "{}  {}", "-".repeat(width), "-".repeat(15));
    for record in records {
        let _ = writeln!(out, "{:<width$}  {}", record.name, date_cell(record));
    }
    out
}

/// Horizontal bars showing how many days each ingredient has left.
pub fn expiration_timeline_chart(records: &[IngredientRecord], today: NaiveDate) -> String {
    let timeline = expiration_timeline(records);
    let width = timeline
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in timeline {
        let Some(days) = days_until(record, today) else {
            continue;
        };
        let label = match days {
            d if d < 0 => format!("expired {} day(s) ago", -d),
            0 => "expires today".to_string(),
            d => format!("{} day(s) left", d),
        };
        let bar = "#".repeat(days.clamp(0, MAX_BAR_WIDTH) as usize);
        let _ = writeln!(
            out,
            "{:<width$} {} |{} {}",
            record.name,
            date_cell(record),
            bar,
            label
        );
    }
    out
}

/// Numbered recipe listing with used and missing ingredient lines.
pub fn recipe_list(recipes: &[RecipeResult]) -> String {
    let mut out = String::new();
    for (idx, recipe) in recipes.iter().enumerate() {
        let _ = writeln!(out, "Recipe {}: {}", idx + 1, recipe.title);
        if let Some(image) = &recipe.image {
            let _ = writeln!(out, "Image: {}", image);
        }
        let _ = writeln!(out, "Recipe ID: {}", recipe.id);
        let _ = writeln!(out, "Used Ingredients ({}):", recipe.used_count());
        for line in &recipe.used_ingredients {
            let _ = writeln!(out, "- {}", line);
        }
        let _ = writeln!(out, "Missing Ingredients ({}):", recipe.missed_count());
        for line in &recipe.missed_ingredients {
            let _ = writeln!(out, "- {}", line);
        }
        let _ = writeln!(out, "---");
    }
    out
}
