use thiserror::Error;

/// Errors that can occur while collecting ingredients or talking to the recipe API
#[derive(Error, Debug)]
pub enum ChefError {
    /// The ingredient input contained nothing after trimming
    #[error("Please enter at least one ingredient")]
    NoIngredients,

    /// Meal type was not one of breakfast, lunch, dinner or any
    #[error("Invalid meal type: {0}")]
    InvalidMealType(String),

    /// Failed to reach the API or read its response
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP error! status: {0}")]
    StatusError(reqwest::StatusCode),

    /// The API answered successfully but without a recipe
    #[error("No recipe found")]
    EmptyRecipe,

    /// Response or stored document was not valid JSON
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Nothing stored under the requested key
    #[error("Nothing stored under '{0}'")]
    MissingItem(String),

    /// Reading or writing the local storage file failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
