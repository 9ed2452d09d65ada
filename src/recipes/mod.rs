mod spoonacular;

pub use spoonacular::SpoonacularClient;

use crate::error::PantryError;
use crate::model::RecipeResult;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Maximum number of recipes requested per query
pub const MAX_RECIPES: u32 = 5;

/// Source of recipe suggestions for a set of ingredients
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    /// Find recipes that use the given ingredients.
    ///
    /// `Ok(vec![])` means the provider found nothing; a failed request is
    /// always an `Err`.
    async fn find_recipes(
        &self,
        ingredient_names: &[String],
    ) -> Result<Vec<RecipeResult>, PantryError>;
}

/// Deduplicate ingredient names and join them with commas.
pub fn ingredient_query(ingredient_names: &[String]) -> String {
    let unique: BTreeSet<&str> = ingredient_names.iter().map(String::as_str).collect();
    unique.into_iter().collect::<Vec<_>>().join(",")
}
