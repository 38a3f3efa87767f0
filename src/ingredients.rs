use log::debug;

use crate::ChefError;

/// Split raw input on commas, trimming each piece and dropping empty ones.
///
/// Order and duplicates are kept as typed; case is left alone.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(String::from)
        .collect()
}

/// Parse the input and refuse an empty list.
pub fn collect_ingredients(raw: &str) -> Result<Vec<String>, ChefError> {
    debug!("Raw ingredients text: {:?}", raw);
    let ingredients = parse_ingredients(raw);
    debug!("Processed ingredients: {:?}", ingredients);

    if ingredients.is_empty() {
        return Err(ChefError::NoIngredients);
    }
    Ok(ingredients)
}
