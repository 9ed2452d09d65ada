pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod expiration;
pub mod menu;
pub mod model;
pub mod mutator;
pub mod pantry;
pub mod recipes;
pub mod render;
pub mod store;

pub use crate::config::{PantryConfig, RecipeApiConfig};
pub use crate::error::PantryError;
pub use crate::expiration::records_expiring_within;
pub use crate::model::{IngredientRecord, RecipeResult};
pub use crate::pantry::{Pantry, RecipeSearch};
pub use crate::recipes::{RecipeProvider, SpoonacularClient};
pub use crate::store::RecordStore;

/// Wire a [`Pantry`] to the configured CSV file and the Spoonacular API.
pub fn pantry_from_config(config: &PantryConfig) -> Pantry {
    Pantry::new(
        RecordStore::new(&config.store_path),
        Box::new(SpoonacularClient::new(&config.api)),
        config.lookahead_days,
    )
}
