use serde_json::Value;

use crate::model::RecipeSummary;
use crate::storage::{LocalStorage, CURRENT_RECIPE_KEY};
use crate::{parse_ingredients, ChefError};

/// Render a recipe document for the terminal.
///
/// Documents without a name, ingredients or instructions are printed as JSON.
pub fn render_recipe(recipe: &Value) -> Result<String, ChefError> {
    let summary: RecipeSummary = serde_json::from_value(recipe.clone()).unwrap_or_default();
    if summary.is_empty() {
        return Ok(serde_json::to_string_pretty(recipe)?);
    }

    let mut out = String::new();
    if let Some(name) = &summary.name {
        out.push_str(&format!("# {}\n", name));
    }
    if let Some(ingredients) = &summary.ingredients {
        out.push_str("\n## Ingredients\n");
        for ingredient in parse_ingredients(ingredients) {
            out.push_str(&format!("- {}\n", ingredient));
        }
    }
    if let Some(instructions) = &summary.instructions {
        out.push_str("\n## Instructions\n");
        out.push_str(instructions.trim());
        out.push('\n');
    }

    Ok(out)
}

/// Render a list of recipes as a numbered list of names
pub fn render_recipe_list(recipes: &[Value]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n".to_string();
    }

    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let name = recipe
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("(unnamed recipe)");
            format!("{}. {}\n", i + 1, name)
        })
        .collect()
}

/// The results page: read the stored recipe and render it
pub fn show_current_recipe(storage: &LocalStorage) -> Result<String, ChefError> {
    let stored = storage
        .get_item(CURRENT_RECIPE_KEY)
        .ok_or_else(|| ChefError::MissingItem(CURRENT_RECIPE_KEY.to_string()))?;
    let recipe: Value = serde_json::from_str(stored)?;
    render_recipe(&recipe)
}
