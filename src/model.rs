use chrono::NaiveDate;

/// A tracked pantry item.
///
/// `expiration_date` is `None` when the stored date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub name: String,
    pub expiration_date: Option<NaiveDate>,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>, expiration_date: NaiveDate) -> Self {
        IngredientRecord {
            name: name.into(),
            expiration_date: Some(expiration_date),
        }
    }
}

/// A recipe suggestion returned by the recipe API. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeResult {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    /// Ingredient lines the recipe uses that are already in the pantry
    pub used_ingredients: Vec<String>,
    /// Ingredient lines the recipe needs that the pantry lacks
    pub missed_ingredients: Vec<String>,
}

impl RecipeResult {
    pub fn used_count(&self) -> usize {
        self.used_ingredients.len()
    }

    pub fn missed_count(&self) -> usize {
        self.missed_ingredients.len()
    }
}

/// Trim and lower-case an ingredient name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Milk "), "milk");
        assert_eq!(normalize_name("GREEN Onion"), "green onion");
        assert_eq!(normalize_name(" \t "), "");
    }

    #[test]
    fn test_recipe_counts() {
        let recipe = RecipeResult {
            id: 1,
            title: "Omelette".to_string(),
            used_ingredients: vec!["2 eggs".to_string(), "1 cup milk".to_string()],
            missed_ingredients: vec!["chives".to_string()],
            ..Default::default()
        };
        assert_eq!(recipe.used_count(), 2);
        assert_eq!(recipe.missed_count(), 1);
    }
}
