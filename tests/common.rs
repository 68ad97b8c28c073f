// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides a seeded recipe catalog, in-memory stores and a failing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `mealplan`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use async_trait::async_trait;
use mealplan::errors::{AppResult, StoreError};
use mealplan::models::{
    CategoryTable, Favorite, IngredientPreference, Nutrition, Preference, Rating, Recipe,
};
use mealplan::store::{InMemoryStore, RecipeStore};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Small Hungarian catalog covering every default meal slot
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Rántotta")
            .with_ingredients(["tojás", "vaj", "só"])
            .with_meal_type("reggeli")
            .with_nutrition(Nutrition::new(13.0, 1.0, 15.0)),
        Recipe::new("Zabkása")
            .with_ingredients(["zabpehely", "tej", "méz"])
            .with_meal_type("reggeli")
            .with_nutrition(Nutrition::new(8.0, 45.0, 6.0)),
        Recipe::new("Gulyásleves")
            .with_ingredients(["marhahús", "burgonya", "paprika", "hagyma"])
            .with_meal_type("leves")
            .with_meal_type("ebéd")
            .with_nutrition(Nutrition::new(25.0, 20.0, 12.0)),
        Recipe::new("Paprikás csirke")
            .with_ingredients(["csirke", "paprika", "tejföl", "hagyma"])
            .with_meal_type("ebéd")
            .with_nutrition(Nutrition::new(30.0, 8.0, 18.0)),
        Recipe::new("Lecsó")
            .with_ingredients(["paprika", "paradicsom", "hagyma", "kolbász"])
            .with_meal_type("vacsora")
            .with_nutrition(Nutrition::new(10.0, 12.0, 20.0)),
        Recipe::new("Túrós csusza")
            .with_ingredients(["tészta", "túró", "tejföl", "szalonna"])
            .with_meal_type("vacsora")
            .with_nutrition(Nutrition::new(22.0, 60.0, 25.0)),
        Recipe::new("Rakott krumpli")
            .with_ingredients(["burgonya", "tojás", "kolbász", "tejföl"])
            .with_meal_type("vacsora")
            .with_meal_type("ebéd")
            .with_nutrition(Nutrition::new(20.0, 40.0, 30.0)),
    ]
}

/// Category table matching [`sample_recipes`]
pub fn sample_categories() -> CategoryTable {
    CategoryTable::new()
        .with_category("Zöldség", ["paprika", "hagyma", "burgonya", "paradicsom"])
        .with_category("Hús", ["csirke", "marhahús", "kolbász", "szalonna"])
        .with_category("Tejtermék", ["tej", "tejföl", "túró", "vaj"])
}

/// Store seeded with the sample catalog and no user data
pub async fn sample_store() -> InMemoryStore {
    init_test_logging();
    let store = InMemoryStore::new();
    store.set_recipes(sample_recipes()).await;
    store.set_categories(sample_categories()).await;
    store
}

/// Record a preference for `user`
pub async fn prefer(
    store: &InMemoryStore,
    user: Uuid,
    category: &str,
    ingredient: &str,
    preference: Preference,
) {
    store
        .upsert_preference(IngredientPreference::new(
            user, category, ingredient, preference,
        ))
        .await
        .unwrap();
}

/// Record a favorite for `user`
pub async fn favorite(store: &InMemoryStore, user: Uuid, category: &str, ingredient: &str) {
    store
        .add_favorite(Favorite::new(user, category, ingredient))
        .await
        .unwrap();
}

/// Names of `recipes` in order
pub fn names(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.name.as_str()).collect()
}

/// Store whose every call fails as unavailable
pub struct FailingStore;

fn unavailable<T>() -> AppResult<T> {
    Err(StoreError::unavailable("failing", "connection refused").into())
}

#[async_trait]
impl RecipeStore for FailingStore {
    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        unavailable()
    }

    async fn fetch_categories(&self) -> AppResult<CategoryTable> {
        unavailable()
    }

    async fn fetch_user_preferences(&self, _user_id: Uuid) -> AppResult<Vec<IngredientPreference>> {
        unavailable()
    }

    async fn upsert_preference(&self, _preference: IngredientPreference) -> AppResult<()> {
        unavailable()
    }

    async fn fetch_user_favorites(&self, _user_id: Uuid) -> AppResult<Vec<Favorite>> {
        unavailable()
    }

    async fn add_favorite(&self, _favorite: Favorite) -> AppResult<()> {
        unavailable()
    }

    async fn remove_favorite(
        &self,
        _user_id: Uuid,
        _category: &str,
        _ingredient: &str,
    ) -> AppResult<()> {
        unavailable()
    }

    async fn append_rating(&self, _rating: Rating) -> AppResult<()> {
        unavailable()
    }

    async fn fetch_ratings(&self) -> AppResult<Vec<Rating>> {
        unavailable()
    }
}
