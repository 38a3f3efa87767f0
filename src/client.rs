use log::debug;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use crate::model::{is_present, AlternativesRequest, MealType, RecipeDocument, RecipeRequest};
use crate::ChefError;

/// HTTP client for the recipe API
#[derive(Debug, Clone)]
pub struct ChefClient {
    client: Client,
    base_url: String,
}

impl ChefClient {
    /// Create a client for the API rooted at `base_url`, optionally with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ChefError> {
        let mut builder = Client::builder().user_agent("leftover-chef/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `POST /api/recipes`: the best recipe for these ingredients.
    ///
    /// Fails on a non-success status, a body that is not JSON, or a falsy document.
    /// The body text is kept as received.
    pub async fn request_recipe(
        &self,
        ingredients: &[String],
        meal_type: Option<MealType>,
    ) -> Result<RecipeDocument, ChefError> {
        let body = RecipeRequest {
            ingredients: ingredients.to_vec(),
            meal_type,
        };
        debug!("Making API call with ingredients: {:?}", body.ingredients);

        let response = self
            .client
            .post(format!("{}/api/recipes", self.base_url))
            .json(&body)
            .send()
            .await?;
        let body = read_body(response).await?;
        debug!("Received recipe: {}", body);
        let value: Value = serde_json::from_str(&body)?;

        if !is_present(&value) {
            return Err(ChefError::EmptyRecipe);
        }
        Ok(RecipeDocument { value, body })
    }

    /// `POST /api/recipes/alternatives`: other recipes that use these ingredients
    pub async fn request_alternatives(
        &self,
        ingredients: &[String],
        meal_type: Option<MealType>,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, ChefError> {
        let body = AlternativesRequest {
            ingredients: ingredients.to_vec(),
            meal_type,
            limit,
        };

        let response = self
            .client
            .post(format!("{}/api/recipes/alternatives", self.base_url))
            .json(&body)
            .send()
            .await?;
        let recipes = read_json(response).await?;
        Ok(serde_json::from_value(recipes)?)
    }

    /// `GET /api/recipes/mealtype/{type}`
    pub async fn recipes_by_meal_type(&self, meal_type: MealType) -> Result<Vec<Value>, ChefError> {
        let response = self
            .client
            .get(format!(
                "{}/api/recipes/mealtype/{}",
                self.base_url,
                meal_type.as_str().to_ascii_lowercase()
            ))
            .send()
            .await?;
        let recipes = read_json(response).await?;
        Ok(serde_json::from_value(recipes)?)
    }

    /// `GET /api/food-saved`: total pounds of food saved, as a bare JSON number
    pub async fn food_saved(&self) -> Result<f64, ChefError> {
        let response = self
            .client
            .get(format!("{}/api/food-saved", self.base_url))
            .send()
            .await?;
        let pounds = read_json(response).await?;
        Ok(serde_json::from_value(pounds)?)
    }
}

/// Check the status, then read the body text
async fn read_body(response: Response) -> Result<String, ChefError> {
    let status = response.status();
    debug!("API Response status: {}", status);
    if !status.is_success() {
        return Err(ChefError::StatusError(status));
    }

    Ok(response.text().await?)
}

async fn read_json(response: Response) -> Result<Value, ChefError> {
    let body = read_body(response).await?;
    Ok(serde_json::from_str(&body)?)
}
