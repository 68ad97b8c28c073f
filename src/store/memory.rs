// ABOUTME: In-memory recipe store guarded by a tokio RwLock
// ABOUTME: Backs tests and the CLI; snapshots back into a serializable Dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use super::{Dataset, RecipeStore};
use crate::errors::{AppResult, StoreError};
use crate::models::{CategoryTable, Favorite, IngredientPreference, Rating, Recipe};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    recipes: Vec<Recipe>,
    categories: CategoryTable,
    preferences: Vec<IngredientPreference>,
    favorites: Vec<Favorite>,
    ratings: Vec<Rating>,
}

/// Shared in-process store
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given dataset
    #[must_use]
    pub fn from_dataset(dataset: Dataset) -> Self {
        let state = StoreState {
            recipes: dataset.recipes,
            categories: dataset.categories,
            preferences: dataset.preferences,
            favorites: dataset.favorites,
            ratings: dataset.ratings,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Replace the recipe catalog
    pub async fn set_recipes(&self, recipes: Vec<Recipe>) {
        self.state.write().await.recipes = recipes;
    }

    /// Replace the category table
    pub async fn set_categories(&self, categories: CategoryTable) {
        self.state.write().await.categories = categories;
    }

    /// Copy of the full store contents
    pub async fn snapshot(&self) -> Dataset {
        let state = self.state.read().await;
        Dataset {
            recipes: state.recipes.clone(),
            categories: state.categories.clone(),
            preferences: state.preferences.clone(),
            favorites: state.favorites.clone(),
            ratings: state.ratings.clone(),
        }
    }
}

#[async_trait]
impl RecipeStore for InMemoryStore {
    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.state.read().await.recipes.clone())
    }

    async fn fetch_categories(&self) -> AppResult<CategoryTable> {
        Ok(self.state.read().await.categories.clone())
    }

    async fn fetch_user_preferences(&self, user_id: Uuid) -> AppResult<Vec<IngredientPreference>> {
        let state = self.state.read().await;
        Ok(state
            .preferences
            .iter()
            .filter(|pref| pref.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn upsert_preference(&self, preference: IngredientPreference) -> AppResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state
            .preferences
            .iter_mut()
            .find(|existing| existing.same_key(&preference))
        {
            debug!(
                ingredient = %preference.ingredient,
                preference = ?preference.preference,
                "Replacing ingredient preference"
            );
            *existing = preference;
        } else {
            state.preferences.push(preference);
        }
        Ok(())
    }

    async fn fetch_user_favorites(&self, user_id: Uuid) -> AppResult<Vec<Favorite>> {
        let state = self.state.read().await;
        Ok(state
            .favorites
            .iter()
            .filter(|favorite| favorite.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add_favorite(&self, favorite: Favorite) -> AppResult<()> {
        let mut state = self.state.write().await;
        let exists = state.favorites.iter().any(|existing| {
            existing.user_id == favorite.user_id
                && existing.category == favorite.category
                && existing.ingredient == favorite.ingredient
        });
        if !exists {
            state.favorites.push(favorite);
        }
        Ok(())
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        category: &str,
        ingredient: &str,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;
        let before = state.favorites.len();
        state.favorites.retain(|favorite| {
            !(favorite.user_id == user_id
                && favorite.category == category
                && favorite.ingredient == ingredient)
        });
        if state.favorites.len() == before {
            return Err(
                StoreError::record_not_found("favorite", format!("{category}/{ingredient}")).into(),
            );
        }
        Ok(())
    }

    async fn append_rating(&self, rating: Rating) -> AppResult<()> {
        rating.validate()?;
        self.state.write().await.ratings.push(rating);
        Ok(())
    }

    async fn fetch_ratings(&self) -> AppResult<Vec<Rating>> {
        Ok(self.state.read().await.ratings.clone())
    }
}
