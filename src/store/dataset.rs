// ABOUTME: Serializable dataset of recipes, categories and user data
// ABOUTME: Loads and saves JSON fixture files for the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use super::InMemoryStore;
use crate::errors::{AppResult, StoreError};
use crate::models::{CategoryTable, Favorite, IngredientPreference, Rating, Recipe};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Everything an in-memory store holds, in its on-disk JSON shape
///
/// Missing top-level keys decode as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Recipe catalog
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Category name to ingredient names
    #[serde(default)]
    pub categories: CategoryTable,
    /// Raw preference rows for every user
    #[serde(default)]
    pub preferences: Vec<IngredientPreference>,
    /// Favorites for every user
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    /// Ratings for every user
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Dataset {
    /// Decode a dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the JSON does not match the dataset
    /// shape or a rating is out of range
    pub fn from_json(origin: &str, json: &str) -> AppResult<Self> {
        let dataset: Self = serde_json::from_str(json)
            .map_err(|e| StoreError::malformed(origin, e.to_string()))?;
        for rating in &dataset.ratings {
            rating
                .validate()
                .map_err(|e| StoreError::malformed(origin, e.message))?;
        }
        debug!(
            origin,
            recipes = dataset.recipes.len(),
            categories = dataset.categories.len(),
            "Decoded dataset"
        );
        Ok(dataset)
    }

    /// Read a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` when the file cannot be read and
    /// the [`Dataset::from_json`] errors for invalid content
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::unavailable(origin.clone(), e.to_string()))?;
        let dataset = Self::from_json(&origin, &json)?;
        info!(path = %origin, recipes = dataset.recipes.len(), "Loaded dataset");
        Ok(dataset)
    }

    /// Write the dataset as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` when the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .await
            .map_err(|e| StoreError::request_failed("save_dataset", e.to_string()))?;
        debug!(path = %path.display(), "Saved dataset");
        Ok(())
    }

    /// Move the dataset into a fresh in-memory store
    #[must_use]
    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore::from_dataset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::Preference;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_json("inline", r#"{"recipes": [{"name": "Lecsó"}]}"#).unwrap();
        assert_eq!(dataset.recipes.len(), 1);
        assert!(dataset.categories.is_empty());
        assert!(dataset.preferences.is_empty());
    }

    #[test]
    fn test_unknown_preference_value_is_neutral() {
        let json = r#"{
            "preferences": [{
                "user_id": "6f1c6d2e-5c1b-4d3e-9a55-1f0f3b8c2d11",
                "category": "Zöldség",
                "ingredient": "hagyma",
                "preference": "maybe"
            }]
        }"#;
        let dataset = Dataset::from_json("inline", json).unwrap();
        assert_eq!(dataset.preferences[0].preference, Preference::Neutral);
    }

    #[test]
    fn test_null_and_numeric_preferences_are_neutral() {
        let json = r#"{
            "recipes": [{"name": "Lecsó"}],
            "preferences": [
                {
                    "user_id": "6f1c6d2e-5c1b-4d3e-9a55-1f0f3b8c2d11",
                    "category": "Zöldség",
                    "ingredient": "hagyma",
                    "preference": null
                },
                {
                    "user_id": "6f1c6d2e-5c1b-4d3e-9a55-1f0f3b8c2d11",
                    "category": "Zöldség",
                    "ingredient": "paprika",
                    "preference": 2
                },
                {
                    "user_id": "6f1c6d2e-5c1b-4d3e-9a55-1f0f3b8c2d11",
                    "category": "Hús",
                    "ingredient": "kolbász",
                    "preference": "dislike"
                }
            ]
        }"#;
        let dataset = Dataset::from_json("inline", json).unwrap();
        assert_eq!(dataset.recipes.len(), 1);
        let preferences: Vec<Preference> =
            dataset.preferences.iter().map(|p| p.preference).collect();
        assert_eq!(
            preferences,
            [Preference::Neutral, Preference::Neutral, Preference::Dislike]
        );
    }

    #[test]
    fn test_out_of_range_rating_is_malformed() {
        let json = r#"{
            "ratings": [{
                "user_id": "6f1c6d2e-5c1b-4d3e-9a55-1f0f3b8c2d11",
                "recipe_name": "Lecsó",
                "stars": 9,
                "created_at": "2025-03-01T12:00:00Z"
            }]
        }"#;
        let err = Dataset::from_json("inline", json).unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = Dataset::from_json("inline", "{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
        assert!(err.message.contains("inline"));
    }
}
