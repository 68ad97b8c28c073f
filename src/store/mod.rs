// ABOUTME: Recipe data-access abstraction consumed by the planner
// ABOUTME: Async trait over recipes, preferences, favorites, categories and ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Recipe store layer
//!
//! Every read returns an owned snapshot; the planner never holds a borrow
//! into the backend across calls.

use crate::errors::AppResult;
use crate::models::{CategoryTable, Favorite, IngredientPreference, Rating, Recipe};
use async_trait::async_trait;
use uuid::Uuid;

/// JSON fixture files loaded into an in-memory store
pub mod dataset;
/// `RwLock`-guarded in-process backend
pub mod memory;

pub use dataset::Dataset;
pub use memory::InMemoryStore;

/// Backend holding the recipe catalog and per-user preference data
///
/// Implementations report failures as `StoreError` converted into
/// `AppError`; an empty collection is a valid answer, not an error.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    // ================================
    // Catalog
    // ================================

    /// All recipes in backend order
    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Ingredient category table
    async fn fetch_categories(&self) -> AppResult<CategoryTable>;

    // ================================
    // Preferences
    // ================================

    /// Raw preference rows for a user, possibly with several writes per key
    async fn fetch_user_preferences(&self, user_id: Uuid) -> AppResult<Vec<IngredientPreference>>;

    /// Insert or replace the preference for its (user, category, ingredient)
    async fn upsert_preference(&self, preference: IngredientPreference) -> AppResult<()>;

    /// Favorites for a user
    async fn fetch_user_favorites(&self, user_id: Uuid) -> AppResult<Vec<Favorite>>;

    /// Add a favorite; adding an existing favorite is a no-op
    async fn add_favorite(&self, favorite: Favorite) -> AppResult<()>;

    /// Remove a favorite
    ///
    /// Fails with `ResourceNotFound` when the favorite does not exist.
    async fn remove_favorite(&self, user_id: Uuid, category: &str, ingredient: &str)
        -> AppResult<()>;

    // ================================
    // Ratings
    // ================================

    /// Append a validated rating
    async fn append_rating(&self, rating: Rating) -> AppResult<()>;

    /// Every recorded rating in insertion order
    async fn fetch_ratings(&self) -> AppResult<Vec<Rating>>;
}
