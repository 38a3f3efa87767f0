use log::{debug, error, info};

use crate::client::ChefClient;
use crate::model::{format_food_saved, MealType, RecipeDocument};
use crate::storage::{LocalStorage, CURRENT_RECIPE_KEY};
use crate::{collect_ingredients, ChefError};

/// Alert shown when the ingredient input is empty
pub const NO_INGREDIENTS_MESSAGE: &str = "Please enter at least one ingredient";

/// Alert shown for any failure while requesting a recipe
pub const NO_RECIPE_MESSAGE: &str =
    "No recipe found for these ingredients. Please try different ingredients.";

/// What a flow can do to the page the user is looking at
pub trait Page {
    /// Show a blocking message
    fn alert(&mut self, message: &str);

    /// Leave for another page
    fn navigate(&mut self, location: &str);

    /// Replace the text of the food-saved display element
    fn set_food_saved(&mut self, text: &str);

    /// Current text of the food-saved display element
    fn food_saved(&self) -> &str;
}

/// How a recipe submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input had no ingredients; nothing was sent
    Blocked,
    /// The request failed or returned no recipe
    NoRecipe,
    /// A recipe was stored and the page moved to this location
    Navigated(String),
}

/// Fetch the food-saved total into the page's display element.
///
/// Failures are logged only; the display keeps whatever it showed before.
pub async fn update_food_saved<P: Page>(client: &ChefClient, page: &mut P) {
    match client.food_saved().await {
        Ok(pounds) => page.set_food_saved(&format_food_saved(pounds)),
        Err(e) => error!("Error fetching food saved: {}", e),
    }
}

/// The ingredient form: food-saved counter plus the "generate meal" action
pub struct RecipeForm<'a> {
    client: &'a ChefClient,
    storage: &'a mut LocalStorage,
    results_page: String,
}

impl<'a> RecipeForm<'a> {
    pub fn new(
        client: &'a ChefClient,
        storage: &'a mut LocalStorage,
        results_page: impl Into<String>,
    ) -> Self {
        Self {
            client,
            storage,
            results_page: results_page.into(),
        }
    }

    /// Page load: refresh the food-saved counter
    pub async fn load<P: Page>(&self, page: &mut P) {
        update_food_saved(self.client, page).await
    }

    /// The "generate meal" action.
    ///
    /// Stores the recipe under `currentRecipe` and navigates once on success.
    /// Every failure ends in an alert with no storage write and no navigation.
    pub async fn generate_meal<P: Page>(
        &mut self,
        page: &mut P,
        raw_input: &str,
        meal_type: Option<MealType>,
    ) -> Submission {
        debug!("Generate Meal requested");
        let ingredients = match collect_ingredients(raw_input) {
            Ok(ingredients) => ingredients,
            Err(_) => {
                page.alert(NO_INGREDIENTS_MESSAGE);
                return Submission::Blocked;
            }
        };

        let stored = match self.client.request_recipe(&ingredients, meal_type).await {
            Ok(recipe) => self.store_recipe(&recipe).await,
            Err(e) => Err(e),
        };
        if let Err(e) = stored {
            error!("Error: {}", e);
            page.alert(NO_RECIPE_MESSAGE);
            return Submission::NoRecipe;
        }

        info!("Navigating to {}", self.results_page);
        page.navigate(&self.results_page);
        Submission::Navigated(self.results_page.clone())
    }

    async fn store_recipe(&mut self, recipe: &RecipeDocument) -> Result<(), ChefError> {
        self.storage
            .set_item(CURRENT_RECIPE_KEY, recipe.body.as_str())
            .await?;
        info!("Stored recipe under '{}'", CURRENT_RECIPE_KEY);
        Ok(())
    }
}

/// Page rendered to a terminal: alerts go to stderr, navigation is recorded
/// so the caller can open the next view.
#[derive(Debug)]
pub struct TerminalPage {
    food_saved: String,
    location: Option<String>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self {
            food_saved: "0.0".to_string(),
            location: None,
        }
    }

    /// Where the page navigated to, if anywhere
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for TerminalPage {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }

    fn set_food_saved(&mut self, text: &str) {
        self.food_saved = text.to_string();
    }

    fn food_saved(&self) -> &str {
        &self.food_saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[derive(Default)]
    struct RecordingPage {
        alerts: Vec<String>,
        navigations: Vec<String>,
        food_saved: String,
    }

    impl Page for RecordingPage {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn navigate(&mut self, location: &str) {
            self.navigations.push(location.to_string());
        }

        fn set_food_saved(&mut self, text: &str) {
            self.food_saved = text.to_string();
        }

        fn food_saved(&self) -> &str {
            &self.food_saved
        }
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_the_server() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/recipes")
            .expect(0)
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let mut storage = LocalStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();
        let client = ChefClient::new(server.url(), None).unwrap();
        let mut page = RecordingPage::default();

        let mut form = RecipeForm::new(&client, &mut storage, "recipe.html");
        let outcome = form.generate_meal(&mut page, "  , ,", None).await;

        assert_eq!(outcome, Submission::Blocked);
        assert_eq!(page.alerts, vec![NO_INGREDIENTS_MESSAGE]);
        assert!(page.navigations.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_keeps_display_on_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/food-saved")
            .with_status(500)
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let mut storage = LocalStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();
        let client = ChefClient::new(server.url(), None).unwrap();
        let mut page = RecordingPage {
            food_saved: "12.0".to_string(),
            ..Default::default()
        };

        RecipeForm::new(&client, &mut storage, "recipe.html")
            .load(&mut page)
            .await;

        assert_eq!(page.food_saved(), "12.0");
        assert!(page.alerts.is_empty());
    }

    #[test]
    fn test_terminal_page_records_navigation() {
        let mut page = TerminalPage::new();
        assert_eq!(page.food_saved(), "0.0");
        assert_eq!(page.location(), None);

        page.set_food_saved("3.5");
        page.navigate("recipe.html");

        assert_eq!(page.food_saved(), "3.5");
        assert_eq!(page.location(), Some("recipe.html"));
    }
}
