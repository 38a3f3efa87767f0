//! Client for the leftover-chef recipe API.
//!
//! Collects leftover ingredients, asks the API for a recipe, keeps the
//! answer in client-local storage and reports how much food has been saved.
//!
//! # Example
//! ```no_run
//! use leftover_chef::{ChefClient, LocalStorage, RecipeForm, Submission, TerminalPage};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChefClient::new("http://localhost:8080", None)?;
//! let mut storage = LocalStorage::open(".leftover-chef/storage.json").await?;
//! let mut page = TerminalPage::new();
//!
//! let mut form = RecipeForm::new(&client, &mut storage, "recipe.html");
//! form.load(&mut page).await;
//! if let Submission::Navigated(_) = form.generate_meal(&mut page, "egg, flour, milk", None).await {
//!     println!("{}", leftover_chef::show_current_recipe(&storage)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod page;
pub mod results;
pub mod storage;

pub use client::ChefClient;
pub use config::ChefConfig;
pub use error::ChefError;
pub use ingredients::{collect_ingredients, parse_ingredients};
pub use model::{format_food_saved, MealType, RecipeDocument};
pub use page::{update_food_saved, Page, RecipeForm, Submission, TerminalPage};
pub use results::{render_recipe, render_recipe_list, show_current_recipe};
pub use storage::{LocalStorage, CURRENT_RECIPE_KEY};
