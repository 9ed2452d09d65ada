//! The five user-facing actions. Each one runs a single pantry operation and
//! writes its result, or its error, to `out`. Errors never escape: the caller
//! only sees I/O failures of `out` itself.

use crate::error::PantryError;
use crate::expiration::records_expiring_within;
use crate::model::{normalize_name, IngredientRecord};
use crate::pantry::Pantry;
use crate::render;
use chrono::NaiveDate;
use log::debug;
use std::io::{self, Write};

/// Parse a user-entered `YYYY-MM-DD` date.
pub fn parse_user_date(input: &str) -> Result<NaiveDate, PantryError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PantryError::ValidationError(format!(
            "'{}' is not a valid date, expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Show an error inline. The user already sees it, so the log only gets it at
/// debug level.
pub(crate) fn report(out: &mut impl Write, err: &PantryError) -> io::Result<()> {
    debug!("{}", err);
    writeln!(out, "Error: {}", err)
}

pub fn add(
    pantry: &Pantry,
    out: &mut impl Write,
    name: &str,
    date_input: &str,
    today: NaiveDate,
) -> io::Result<()> {
    let result = parse_user_date(date_input)
        .and_then(|date| pantry.add_ingredient(name, date, today));
    match result {
        Ok(record) => writeln!(out, "Ingredient '{}' added successfully!", record.name),
        Err(e) => report(out, &e),
    }
}

pub fn view(pantry: &Pantry, out: &mut impl Write, today: NaiveDate) -> io::Result<()> {
    let (records, read_error) = pantry.store().load_or_empty();
    if let Some(e) = read_error {
        report(out, &e)?;
    }
    if records.is_empty() {
        return writeln!(out, "No ingredients found. Please add some.");
    }

    let rows: Vec<&IngredientRecord> = records.iter().collect();
    write!(out, "{}", render::ingredient_table(&rows))?;
    writeln!(out)?;
    writeln!(out, "Ingredient Expiration Timeline")?;
    write!(out, "{}", render::expiration_timeline_chart(&records, today))
}

pub fn expiring(
    pantry: &Pantry,
    out: &mut impl Write,
    today: NaiveDate,
    window_days: u32,
) -> io::Result<()> {
    let (records, read_error) = pantry.store().load_or_empty();
    if let Some(e) = read_error {
        report(out, &e)?;
    }
    if records.is_empty() {
        return writeln!(out, "No ingredients found.");
    }

    let expiring = records_expiring_within(&records, today, window_days);
    if expiring.is_empty() {
        return writeln!(
            out,
            "No ingredients are expiring in the next {} day(s).",
            window_days
        );
    }
    writeln!(out, "The following ingredients are expiring soon:")?;
    write!(out, "{}", render::ingredient_table(&expiring))
}

pub fn remove(pantry: &Pantry, out: &mut impl Write, name: &str) -> io::Result<()> {
    match pantry.remove_ingredient(name) {
        Ok(0) => writeln!(out, "No ingredient named '{}' was found.", name.trim()),
        Ok(_) => writeln!(
            out,
            "Ingredient '{}' has been removed.",
            normalize_name(name)
        ),
        Err(e) => report(out, &e),
    }
}

pub async fn find_recipes(pantry: &Pantry, out: &mut impl Write) -> io::Result<()> {
    match pantry.ingredients() {
        Ok(records) if records.is_empty() => {
            return writeln!(out, "Please add some ingredients first!");
        }
        Ok(_) => {}
        Err(e) => return report(out, &e),
    }

    match pantry.find_recipes().await {
        Ok(search) if search.recipes.is_empty() => {
            writeln!(out, "Ingredients sent to API: {}", search.ingredients)?;
            writeln!(out, "No recipes found with the provided ingredients.")
        }
        Ok(search) => {
            writeln!(out, "Ingredients sent to API: {}", search.ingredients)?;
            writeln!(out, "The API returned {} recipes.", search.recipes.len())?;
            writeln!(out)?;
            write!(out, "{}", render::recipe_list(&search.recipes))
        }
        Err(e) => {
            report(out, &e)?;
            writeln!(out, "No recipes to show.")
        }
    }
}
