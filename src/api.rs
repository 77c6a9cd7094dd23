//! REST API Client
//!
//! Typed wrappers around the NutriSync backend endpoints. The request
//! builders never inspect the response status; the endpoint functions do.

use std::fmt;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::models::{Category, Ingredient, Recipe, TrackedRecipe};

/// Base URL override baked in at build time; empty means same-origin
/// relative paths.
pub fn api_base() -> &'static str {
    option_env!("NUTRISYNC_API_URL").unwrap_or("")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Plain request against the API base.
pub fn request(method: Method, path: &str) -> RequestBuilder {
    RequestBuilder::new(&api_url(path)).method(method)
}

/// Request that always carries the session cookie. Member/tracker endpoints
/// need it; the public recipe endpoints do not.
pub fn session_request(method: Method, path: &str) -> RequestBuilder {
    request(method, path).credentials(RequestCredentials::Include)
}

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The fetch itself failed (network down, CORS, aborted).
    Network(String),
    /// A response arrived with a non-success status.
    Status(u16),
    /// The body was not the JSON shape we expect.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Status(code) => write!(f, "request failed with status {code}"),
            ApiError::Decode(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(
    builder: RequestBuilder,
) -> Result<T, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)?
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Recipe Endpoints
// ========================

pub async fn fetch_recipe(id: &str) -> Result<Recipe, ApiError> {
    get_json(request(Method::GET, &format!("/api/recipes/{id}"))).await
}

pub async fn fetch_ingredients(id: &str) -> Result<Vec<Ingredient>, ApiError> {
    get_json(request(Method::GET, &format!("/api/recipe/{id}/ingredients"))).await
}

pub async fn fetch_categories(id: &str) -> Result<Vec<Category>, ApiError> {
    get_json(request(Method::GET, &format!("/api/recipe/{id}/categories"))).await
}

pub async fn like_recipe(id: &str) -> Result<(), ApiError> {
    let response = request(Method::POST, &format!("/api/recipe/{id}/like"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).map(|_| ())
}

#[derive(Serialize)]
pub struct TrackArgs {
    #[serde(rename = "servingSize")]
    pub serving_size: u32,
}

pub async fn track_recipe(id: &str, serving_size: u32) -> Result<(), ApiError> {
    let req = request(Method::POST, &format!("/api/recipe/{id}/track"))
        .json(&TrackArgs { serving_size })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).map(|_| ())
}

// ========================
// Member Tracker Endpoints
// ========================

pub async fn fetch_tracked_recipes(member_id: &str) -> Result<Vec<TrackedRecipe>, ApiError> {
    get_json(session_request(
        Method::GET,
        &format!("/api/member/{member_id}/tracker/recipe"),
    ))
    .await
}

/// The calorie endpoint responds with a one-element array whose first value
/// is the aggregate total. Normalized to a scalar here; empty reads as zero.
pub async fn fetch_calorie_total(member_id: &str) -> Result<u32, ApiError> {
    let readings: Vec<u32> = get_json(session_request(
        Method::GET,
        &format!("/api/member/{member_id}/calorie"),
    ))
    .await?;
    Ok(first_reading(readings))
}

pub fn first_reading(readings: Vec<u32>) -> u32 {
    readings.into_iter().next().unwrap_or(0)
}

pub async fn remove_tracked_recipe(member_id: &str, recipe_id: u32) -> Result<(), ApiError> {
    let response = session_request(
        Method::DELETE,
        &format!("/api/member/{member_id}/tracker/delete/{recipe_id}"),
    )
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_args_wire_shape() {
        let body = serde_json::to_string(&TrackArgs { serving_size: 3 }).unwrap();
        assert_eq!(body, r#"{"servingSize":3}"#);
    }

    #[test]
    fn test_first_reading_takes_head_or_zero() {
        assert_eq!(first_reading(vec![1840]), 1840);
        assert_eq!(first_reading(vec![]), 0);
        assert_eq!(first_reading(vec![500, 9999]), 500);
    }

    #[test]
    fn test_api_url_joins_base_and_path() {
        assert_eq!(
            api_url("/api/recipes/42"),
            format!("{}/api/recipes/42", api_base())
        );
    }
}
