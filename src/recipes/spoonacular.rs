use crate::config::RecipeApiConfig;
use crate::error::PantryError;
use crate::model::RecipeResult;
use crate::recipes::{ingredient_query, RecipeProvider, MAX_RECIPES};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

const FIND_BY_INGREDIENTS_PATH: &str = "/recipes/findByIngredients";

/// Rank by fewest missing ingredients rather than most used ones
const RANKING_MINIMIZE_MISSING: u32 = 2;

/// One element of the findByIngredients response array
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRecipe {
    id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    used_ingredients: Vec<ApiIngredient>,
    #[serde(default)]
    missed_ingredients: Vec<ApiIngredient>,
}

#[derive(Debug, Deserialize)]
struct ApiIngredient {
    original: String,
}

impl From<ApiRecipe> for RecipeResult {
    fn from(recipe: ApiRecipe) -> Self {
        RecipeResult {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image.filter(|url| !url.is_empty()),
            used_ingredients: recipe
                .used_ingredients
                .into_iter()
                .map(|i| i.original)
                .collect(),
            missed_ingredients: recipe
                .missed_ingredients
                .into_iter()
                .map(|i| i.original)
                .collect(),
        }
    }
}

/// Client for the Spoonacular findByIngredients endpoint.
///
/// One request per call; no retries.
pub struct SpoonacularClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SpoonacularClient {
    /// Create a new client from configuration
    pub fn new(config: &RecipeApiConfig) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn find_recipes(
        &self,
        ingredient_names: &[String],
    ) -> Result<Vec<RecipeResult>, PantryError> {
        let api_key = self.api_key.as_deref().ok_or(PantryError::MissingApiKey)?;

        let ingredients = ingredient_query(ingredient_names);
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }
        debug!("Querying recipes for ingredients: {}", ingredients);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, FIND_BY_INGREDIENTS_PATH))
            .query(&[
                ("ingredients", ingredients),
                ("number", MAX_RECIPES.to_string()),
                ("ranking", RANKING_MINIMIZE_MISSING.to_string()),
                ("ignorePantry", "true".to_string()),
                ("apiKey", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(PantryError::NetworkError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PantryError::HttpError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(PantryError::NetworkError)?;
        debug!("{}", body);
        let recipes: Vec<ApiRecipe> =
            serde_json::from_str(&body).map_err(|e| PantryError::ParseError(e.to_string()))?;

        Ok(recipes.into_iter().map(RecipeResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const RECIPES_BODY: &str = r#"[
        {
            "id": 641803,
            "title": "Easy Scrambled Eggs",
            "image": "https://img.spoonacular.com/recipes/641803-312x231.jpg",
            "imageType": "jpg",
            "usedIngredientCount": 2,
            "missedIngredientCount": 1,
            "usedIngredients": [
                {"id": 1123, "name": "eggs", "original": "4 large eggs"},
                {"id": 1077, "name": "milk", "original": "1/4 cup milk"}
            ],
            "missedIngredients": [
                {"id": 1001, "name": "butter", "original": "1 tbsp butter"}
            ],
            "unusedIngredients": [],
            "likes": 3
        },
        {
            "id": 12,
            "title": "Plain Milk",
            "usedIngredients": [{"original": "1 cup milk"}],
            "missedIngredients": []
        }
    ]"#;

    #[tokio::test]
    async fn test_find_recipes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ingredients".into(), "eggs,milk".into()),
                Matcher::UrlEncoded("number".into(), "5".into()),
                Matcher::UrlEncoded("ranking".into(), "2".into()),
                Matcher::UrlEncoded("ignorePantry".into(), "true".into()),
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RECIPES_BODY)
            .create_async()
            .await;

        let client =
            SpoonacularClient::with_base_url(Some("fake_api_key".to_string()), server.url());
        let recipes = client
            .find_recipes(&names(&["milk", "eggs", "milk"]))
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, 641803);
        assert_eq!(recipes[0].title, "Easy Scrambled Eggs");
        assert_eq!(
            recipes[0].image.as_deref(),
            Some("https://img.spoonacular.com/recipes/641803-312x231.jpg")
        );
        assert_eq!(recipes[0].used_ingredients, vec!["4 large eggs", "1/4 cup milk"]);
        assert_eq!(recipes[0].missed_ingredients, vec!["1 tbsp butter"]);
        assert_eq!(recipes[1].image, None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_result_is_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(Some("key".to_string()), server.url());
        let recipes = client.find_recipes(&names(&["durian"])).await.unwrap();

        assert!(recipes.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(Some("key".to_string()), server.url());
        let result = client.find_recipes(&names(&["milk"])).await;

        assert!(matches!(result, Err(PantryError::HttpError { status: 500 })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_is_http_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status":"failure","code":401}"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(Some("bad".to_string()), server.url());
        let result = client.find_recipes(&names(&["milk"])).await;
        assert!(matches!(result, Err(PantryError::HttpError { status: 401 })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"recipes": "not an array"}"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(Some("key".to_string()), server.url());
        let result = client.find_recipes(&names(&["milk"])).await;
        assert!(matches!(result, Err(PantryError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = SpoonacularClient::with_base_url(
            Some("key".to_string()),
            "http://127.0.0.1:1".to_string(),
        );
        let result = client.find_recipes(&names(&["milk"])).await;
        assert!(matches!(result, Err(PantryError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = SpoonacularClient::new(&RecipeApiConfig::default());
        let result = client.find_recipes(&names(&["milk"])).await;
        assert!(matches!(result, Err(PantryError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_no_ingredients_skips_request() {
        let client = SpoonacularClient::with_base_url(
            Some("key".to_string()),
            "http://127.0.0.1:1".to_string(),
        );
        let recipes = client.find_recipes(&[]).await.unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_provider_name() {
        let client = SpoonacularClient::new(&RecipeApiConfig::default());
        assert_eq!(client.provider_name(), "spoonacular");
    }
}
