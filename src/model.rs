use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::ChefError;

/// Meal the recipe should fit, as the API spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Any,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Any => "ANY",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ChefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BREAKFAST" => Ok(MealType::Breakfast),
            "LUNCH" => Ok(MealType::Lunch),
            "DINNER" => Ok(MealType::Dinner),
            "ANY" => Ok(MealType::Any),
            _ => Err(ChefError::InvalidMealType(s.to_string())),
        }
    }
}

/// Body of `POST /api/recipes`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

/// Body of `POST /api/recipes/alternatives`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesRequest {
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// A recipe as the API returned it: the parsed document and the body text it came from
#[derive(Debug, Clone)]
pub struct RecipeDocument {
    pub value: Value,
    pub body: String,
}

/// The fields of a recipe document the results view knows how to show.
///
/// The document itself stays opaque; anything else the server sends is ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeSummary {
    pub name: Option<String>,
    /// Comma-separated list
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

impl RecipeSummary {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none() && self.instructions.is_none()
    }
}

/// A recipe response counts only if it is truthy: not `null`, `false`, `0` or `""`.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a food-saved quantity fixed to one decimal place.
///
/// Exact ties (only possible for quarters) round away from zero, everything
/// else follows the exact binary value, so `0.15` gives `0.1` and `0.25` gives `0.3`.
/// Magnitudes of `1e21` and up switch to exponent form (`1e+21`).
pub fn format_food_saved(pounds: f64) -> String {
    if pounds.is_nan() {
        return "NaN".to_string();
    }
    if pounds.is_infinite() {
        return if pounds > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if pounds == 0.0 {
        return "0.0".to_string();
    }
    if pounds.abs() >= 1e21 {
        return format!("{:e}", pounds).replacen('e', "e+", 1);
    }
    if (pounds * 4.0).fract() == 0.0 && (pounds * 2.0).fract() != 0.0 {
        let tenths = (pounds * 10.0).round();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{:.1}", pounds)
}
