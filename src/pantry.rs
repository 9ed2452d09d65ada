use crate::error::PantryError;
use crate::expiration::records_expiring_within;
use crate::model::{normalize_name, IngredientRecord, RecipeResult};
use crate::mutator;
use crate::recipes::{ingredient_query, RecipeProvider};
use crate::store::RecordStore;
use chrono::NaiveDate;
use log::info;

/// Outcome of a recipe search
#[derive(Debug, Clone, Default)]
pub struct RecipeSearch {
    /// Comma-joined ingredient string sent to the provider
    pub ingredients: String,
    pub recipes: Vec<RecipeResult>,
}

/// The operations behind each menu action.
///
/// Each mutation is one load, one in-memory change and one full save.
pub struct Pantry {
    store: RecordStore,
    provider: Box<dyn RecipeProvider>,
    lookahead_days: u32,
}

impl Pantry {
    pub fn new(store: RecordStore, provider: Box<dyn RecipeProvider>, lookahead_days: u32) -> Self {
        Pantry {
            store,
            provider,
            lookahead_days,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// Add an ingredient and persist the list.
    ///
    /// Dates before `today` are rejected.
    pub fn add_ingredient(
        &self,
        name: &str,
        expiration_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<IngredientRecord, PantryError> {
        if expiration_date < today {
            return Err(PantryError::ValidationError(format!(
                "Expiration date {} is in the past",
                expiration_date
            )));
        }

        let records = self.store.load()?;
        let updated = mutator::add(&records, name, expiration_date)?;
        self.store.save(&updated)?;

        let added = IngredientRecord::new(normalize_name(name), expiration_date);
        info!("Added '{}' expiring {}", added.name, expiration_date);
        Ok(added)
    }

    pub fn ingredients(&self) -> Result<Vec<IngredientRecord>, PantryError> {
        self.store.load()
    }

    /// Records expiring within the configured lookahead window
    pub fn expiring(&self, today: NaiveDate) -> Result<Vec<IngredientRecord>, PantryError> {
        let records = self.store.load()?;
        Ok(records_expiring_within(&records, today, self.lookahead_days)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Remove every record with this name and persist the list.
    ///
    /// Returns how many records were removed.
    pub fn remove_ingredient(&self, name: &str) -> Result<usize, PantryError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(PantryError::ValidationError(
                "Ingredient name cannot be empty".to_string(),
            ));
        }

        let records = self.store.load()?;
        let remaining = mutator::remove(&records, &name);
        self.store.save(&remaining)?;

        let removed = records.len() - remaining.len();
        info!("Removed {} record(s) named '{}'", removed, name);
        Ok(removed)
    }

    /// Ask the recipe provider for recipes using every distinct ingredient.
    pub async fn find_recipes(&self) -> Result<RecipeSearch, PantryError> {
        let records = self.store.load()?;
        let names: Vec<String> = mutator::distinct_names(&records).into_iter().collect();
        let recipes = self.provider.find_recipes(&names).await?;
        info!(
            "{} returned {} recipes",
            self.provider.provider_name(),
            recipes.len()
        );

        Ok(RecipeSearch {
            ingredients: ingredient_query(&names),
            recipes,
        })
    }
}
