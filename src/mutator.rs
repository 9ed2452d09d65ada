use crate::error::PantryError;
use crate::model::{normalize_name, IngredientRecord};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Append a record for `name`. Duplicates are allowed.
///
/// The name is normalized first and must not end up empty. Nothing is
/// persisted here; the caller saves the returned list.
pub fn add(
    records: &[IngredientRecord],
    name: &str,
    expiration_date: NaiveDate,
) -> Result<Vec<IngredientRecord>, PantryError> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Err(PantryError::ValidationError(
            "Ingredient name cannot be empty".to_string(),
        ));
    }

    let mut updated = records.to_vec();
    updated.push(IngredientRecord::new(name, expiration_date));
    Ok(updated)
}

/// Drop every record named `name`, duplicates included.
pub fn remove(records: &[IngredientRecord], name: &str) -> Vec<IngredientRecord> {
    records
        .iter()
        .filter(|record| record.name != name)
        .cloned()
        .collect()
}

/// The distinct ingredient names in the list, sorted.
pub fn distinct_names(records: &[IngredientRecord]) -> BTreeSet<String> {
    records.iter().map(|record| record.name.clone()).collect()
}
