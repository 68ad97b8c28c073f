// ABOUTME: Integration tests for the planner query operations
// ABOUTME: Covers meal-type, category, ingredient and random queries against a seeded store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{favorite, names, prefer, sample_store, FailingStore};
use mealplan::config::PlannerConfig;
use mealplan::errors::ErrorCode;
use mealplan::models::{CategoryTable, Preference};
use mealplan::planner::MealPlanner;
use mealplan::store::RecipeStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use uuid::Uuid;

// ============================================================================
// Meal Type Queries
// ============================================================================

#[tokio::test]
async fn test_meal_type_without_preferences_keeps_catalog_order() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let recipes = planner
        .recipes_by_meal_type(Uuid::new_v4(), "vacsora")
        .await
        .unwrap();
    assert_eq!(names(&recipes), ["Lecsó", "Túrós csusza", "Rakott krumpli"]);
}

#[tokio::test]
async fn test_meal_type_accepts_english_name() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let user = Uuid::new_v4();
    let english = planner.recipes_by_meal_type(user, "lunch").await.unwrap();
    assert_eq!(
        names(&english),
        ["Gulyásleves", "Paprikás csirke", "Rakott krumpli"]
    );

    let dinner_meat = planner
        .recipes_by_category(user, "Hús", None, Some("Dinner"))
        .await
        .unwrap();
    assert_eq!(names(&dinner_meat), ["Lecsó", "Túrós csusza", "Rakott krumpli"]);

    assert!(planner
        .recipes_by_meal_type(user, "brunch")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_meal_type_excludes_dislikes_and_ranks_likes_first() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    prefer(&store, user, "Zöldség", "paprika", Preference::Dislike).await;
    prefer(&store, user, "Zöldség", "burgonya", Preference::Like).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let recipes = planner.recipes_by_meal_type(user, "vacsora").await.unwrap();
    assert_eq!(names(&recipes), ["Rakott krumpli", "Túrós csusza"]);

    let lunch = planner.recipes_by_meal_type(user, "ebéd").await.unwrap();
    assert_eq!(names(&lunch), ["Rakott krumpli"]);
}

#[tokio::test]
async fn test_preferences_are_per_user() {
    let store = sample_store().await;
    let picky = Uuid::new_v4();
    prefer(&store, picky, "Zöldség", "paprika", Preference::Dislike).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let other = planner
        .recipes_by_meal_type(Uuid::new_v4(), "ebéd")
        .await
        .unwrap();
    assert_eq!(other.len(), 3);
}

#[tokio::test]
async fn test_later_preference_write_wins() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    prefer(&store, user, "Hús", "kolbász", Preference::Dislike).await;
    prefer(&store, user, "Hús", "kolbász", Preference::Neutral).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let recipes = planner.recipes_by_meal_type(user, "vacsora").await.unwrap();
    assert_eq!(recipes.len(), 3);
}

#[tokio::test]
async fn test_favorite_promotes_without_overriding_dislike() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    favorite(&store, user, "Tejtermék", "túró").await;
    favorite(&store, user, "Hús", "kolbász").await;
    prefer(&store, user, "Hús", "kolbász", Preference::Dislike).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let recipes = planner.recipes_by_meal_type(user, "vacsora").await.unwrap();
    assert_eq!(names(&recipes), ["Túrós csusza"]);
}

// ============================================================================
// Category Queries
// ============================================================================

#[tokio::test]
async fn test_category_with_ingredient_and_meal_type() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let user = Uuid::new_v4();

    let csirke = planner
        .recipes_by_category(user, "Hús", Some("csirke"), None)
        .await
        .unwrap();
    assert_eq!(names(&csirke), ["Paprikás csirke"]);

    let dinner_meat = planner
        .recipes_by_category(user, "hus", None, Some("vacsora"))
        .await
        .unwrap();
    assert_eq!(names(&dinner_meat), ["Lecsó", "Túrós csusza", "Rakott krumpli"]);

    let unknown = planner
        .recipes_by_category(user, "Gomba", None, None)
        .await
        .unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_category_applies_dislikes() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    prefer(&store, user, "Tejtermék", "tejföl", Preference::Dislike).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let recipes = planner
        .recipes_by_category(user, "Hús", None, None)
        .await
        .unwrap();
    assert_eq!(names(&recipes), ["Gulyásleves", "Lecsó"]);
}

#[tokio::test]
async fn test_filtered_ingredients_drop_exact_dislikes_only() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    prefer(&store, user, "Tejtermék", "tej", Preference::Dislike).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let ingredients = planner.filtered_ingredients(user, "Tejtermék").await.unwrap();
    assert_eq!(ingredients, ["tejföl", "túró", "vaj"]);

    assert!(planner
        .filtered_ingredients(user, "Gomba")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_category_table_is_cached_until_invalidated() {
    let store = sample_store().await;
    let planner = MealPlanner::new(store.clone(), PlannerConfig::default());
    let user = Uuid::new_v4();

    assert_eq!(planner.filtered_ingredients(user, "Hús").await.unwrap().len(), 4);

    store.set_categories(CategoryTable::new()).await;
    assert_eq!(planner.filtered_ingredients(user, "Hús").await.unwrap().len(), 4);

    planner.invalidate_categories().await;
    assert!(planner.filtered_ingredients(user, "Hús").await.unwrap().is_empty());
}

// ============================================================================
// Random Selection
// ============================================================================

#[tokio::test]
async fn test_random_recipe_never_returns_disliked() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    prefer(&store, user, "Zöldség", "hagyma", Preference::Dislike).await;
    let planner = MealPlanner::new(store, PlannerConfig::default());

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let recipe = planner.random_recipe(user, &mut rng).await.unwrap().unwrap();
        assert!(!recipe.ingredients.iter().any(|i| i == "hagyma"));
        seen.insert(recipe.name);
    }
    assert_eq!(seen.len(), 4);
}

#[tokio::test]
async fn test_random_recipe_is_reproducible_with_seed() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let user = Uuid::new_v4();
    let first = planner
        .random_recipe(user, &mut ChaCha8Rng::seed_from_u64(3))
        .await
        .unwrap();
    let second = planner
        .random_recipe(user, &mut ChaCha8Rng::seed_from_u64(3))
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_random_recipe_none_when_everything_disliked() {
    let store = sample_store().await;
    let user = Uuid::new_v4();
    for ingredient in ["tojás", "tej", "paprika", "tészta"] {
        prefer(&store, user, "Mind", ingredient, Preference::Dislike).await;
    }
    let planner = MealPlanner::new(store, PlannerConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(planner.random_recipe(user, &mut rng).await.unwrap().is_none());
}

// ============================================================================
// Writes and Failures
// ============================================================================

#[tokio::test]
async fn test_set_preference_rejects_blank_ingredient() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let err = planner
        .set_preference(Uuid::new_v4(), "Zöldség", "  ", Preference::Like)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_favorite_round_trip_through_planner() {
    let planner = MealPlanner::new(sample_store().await, PlannerConfig::default());
    let user = Uuid::new_v4();
    planner.add_favorite(user, "Hús", "csirke").await.unwrap();
    assert_eq!(planner.store().fetch_user_favorites(user).await.unwrap().len(), 1);

    planner.remove_favorite(user, "Hús", "csirke").await.unwrap();
    let err = planner.remove_favorite(user, "Hús", "csirke").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let planner = MealPlanner::new(FailingStore, PlannerConfig::default());
    let user = Uuid::new_v4();

    let err = planner.recipes_by_meal_type(user, "reggeli").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);

    let err = planner.filtered_ingredients(user, "Hús").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(planner.random_recipe(user, &mut rng).await.is_err());
}
