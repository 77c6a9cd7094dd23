//! Detail Load State
//!
//! Three-way all-or-nothing join for the recipe detail page, plus the local
//! serving-size check. Kept free of Leptos so the transitions are unit
//! testable.

use crate::api::ApiError;
use crate::models::{Category, Ingredient, Recipe};

/// Everything the detail page renders once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct DetailData {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
}

/// Load lifecycle of the detail page
///
/// `Ready` means all three reads succeeded; there is no partial state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(DetailData),
    Error(String),
}

/// Join the three concurrent reads into one state transition.
///
/// Any non-success status on the recipe itself reads as "Recipe not found",
/// regardless of how the other two requests fared.
pub fn join_loads(
    recipe: Result<Recipe, ApiError>,
    ingredients: Result<Vec<Ingredient>, ApiError>,
    categories: Result<Vec<Category>, ApiError>,
) -> DetailState {
    let recipe = match recipe {
        Ok(recipe) => recipe,
        Err(ApiError::Status(_)) => return DetailState::Error("Recipe not found".to_string()),
        Err(err) => return DetailState::Error(err.to_string()),
    };
    match (ingredients, categories) {
        (Ok(ingredients), Ok(categories)) => DetailState::Ready(DetailData {
            recipe,
            ingredients,
            categories,
        }),
        (Err(err), _) | (_, Err(err)) => DetailState::Error(err.to_string()),
    }
}

/// Local check before the track POST; anything below one serving never
/// reaches the network.
pub fn validate_serving_size(serving_size: i32) -> Result<u32, &'static str> {
    if serving_size < 1 {
        Err("Serving size must be at least 1.")
    } else {
        Ok(serving_size as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe() -> Recipe {
        Recipe {
            recipe_id: 42,
            title: "Lentil Soup".to_string(),
            description: "Simmer everything for an hour.".to_string(),
            timestamp: "2024-03-11 18:02:44".to_string(),
            serving_size: 4,
            total_calories: 620,
            image_url: None,
        }
    }

    fn make_ingredients() -> Vec<Ingredient> {
        vec![Ingredient {
            ingredient_id: 3,
            name: "Red Lentils".to_string(),
            calories: 340,
            unit: "cup".to_string(),
        }]
    }

    fn make_categories() -> Vec<Category> {
        vec![Category {
            category_id: 9,
            name: "Vegan".to_string(),
        }]
    }

    #[test]
    fn test_all_success_is_ready_with_exact_data() {
        let state = join_loads(
            Ok(make_recipe()),
            Ok(make_ingredients()),
            Ok(make_categories()),
        );
        assert_eq!(
            state,
            DetailState::Ready(DetailData {
                recipe: make_recipe(),
                ingredients: make_ingredients(),
                categories: make_categories(),
            })
        );
    }

    #[test]
    fn test_recipe_not_found_wins_regardless_of_others() {
        let state = join_loads(
            Err(ApiError::Status(404)),
            Ok(make_ingredients()),
            Ok(make_categories()),
        );
        assert_eq!(state, DetailState::Error("Recipe not found".to_string()));

        // Same outcome when the other reads failed too
        let state = join_loads(
            Err(ApiError::Status(404)),
            Err(ApiError::Network("connection refused".to_string())),
            Err(ApiError::Status(500)),
        );
        assert_eq!(state, DetailState::Error("Recipe not found".to_string()));
    }

    #[test]
    fn test_any_recipe_status_error_reads_as_not_found() {
        let state = join_loads(
            Err(ApiError::Status(500)),
            Ok(make_ingredients()),
            Ok(make_categories()),
        );
        assert_eq!(state, DetailState::Error("Recipe not found".to_string()));
    }

    #[test]
    fn test_ingredient_failure_is_error_with_no_data() {
        let state = join_loads(
            Ok(make_recipe()),
            Err(ApiError::Network("connection refused".to_string())),
            Ok(make_categories()),
        );
        match state {
            DetailState::Error(message) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn test_category_failure_is_error() {
        let state = join_loads(
            Ok(make_recipe()),
            Ok(make_ingredients()),
            Err(ApiError::Status(503)),
        );
        assert!(matches!(state, DetailState::Error(_)));
    }

    #[test]
    fn test_serving_size_boundary() {
        assert_eq!(validate_serving_size(1), Ok(1));
        assert_eq!(validate_serving_size(6), Ok(6));
        assert_eq!(
            validate_serving_size(0),
            Err("Serving size must be at least 1.")
        );
        assert_eq!(
            validate_serving_size(-4),
            Err("Serving size must be at least 1.")
        );
    }
}
