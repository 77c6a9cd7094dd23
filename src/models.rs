//! Frontend Models
//!
//! Data structures matching backend entities. Field renames mirror the JSON
//! keys the backend emits; unknown keys (moderation fields etc.) are ignored.

use serde::{Deserialize, Serialize};

/// Recipe detail (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "RecipeID")]
    pub recipe_id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,
    #[serde(rename = "Serving_Size")]
    pub serving_size: u32,
    #[serde(rename = "TotalCalories")]
    pub total_calories: u32,
    #[serde(rename = "ImageURL", default)]
    pub image_url: Option<String>,
}

/// Ingredient row for a recipe (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredientID")]
    pub ingredient_id: u32,
    pub name: String,
    pub calories: u32,
    pub unit: String,
}

/// Category tag attached to a recipe (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryID")]
    pub category_id: u32,
    pub name: String,
}

/// A recipe as it appears in a member's calorie tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedRecipe {
    pub id: u32,
    pub name: String,
    pub calories: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_parses_backend_json() {
        // Shape as served by /api/recipes/{id}, moderation keys included
        let json = r#"{
            "RecipeID": 42,
            "Title": "Lentil Soup",
            "Description": "Simmer everything for an hour.",
            "TimeStamp": "2024-03-11 18:02:44",
            "Serving_Size": 4,
            "TotalCalories": 620,
            "AdderID": 7,
            "Approved_ModID": 2,
            "Approved_Status": 1
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_id, 42);
        assert_eq!(recipe.title, "Lentil Soup");
        assert_eq!(recipe.serving_size, 4);
        assert_eq!(recipe.total_calories, 620);
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_ingredient_and_category_parse() {
        let ingredient: Ingredient = serde_json::from_str(
            r#"{"ingredientID": 3, "name": "Red Lentils", "calories": 340, "unit": "cup"}"#,
        )
        .unwrap();
        assert_eq!(ingredient.ingredient_id, 3);
        assert_eq!(ingredient.unit, "cup");

        let category: Category =
            serde_json::from_str(r#"{"categoryID": 9, "name": "Vegan"}"#).unwrap();
        assert_eq!(category.category_id, 9);
        assert_eq!(category.name, "Vegan");
    }
}
