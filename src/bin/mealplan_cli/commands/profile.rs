// ABOUTME: Preference, favorite and rating commands for mealplan-cli
// ABOUTME: Each write is persisted back to the dataset file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use super::CliContext;
use crate::helpers::output::print_json;
use mealplan::errors::AppResult;
use mealplan::models::Preference;
use serde_json::json;
use tracing::info;

/// Rate a recipe and persist the rating
pub async fn rate(ctx: &CliContext, recipe: &str, stars: u8) -> AppResult<()> {
    let rating = ctx.planner.rate_recipe(ctx.user, recipe, stars).await?;
    ctx.persist().await?;
    print_json(&rating)
}

/// Print the best rated recipes
pub async fn top(ctx: &CliContext, limit: usize) -> AppResult<()> {
    let log = ctx.planner.ratings().await?;
    print_json(&log.top_rated(limit))
}

/// Record a preference and persist it
pub async fn prefer(
    ctx: &CliContext,
    category: &str,
    ingredient: &str,
    preference: &str,
) -> AppResult<()> {
    let preference: Preference = preference.parse()?;
    ctx.planner
        .set_preference(ctx.user, category, ingredient, preference)
        .await?;
    ctx.persist().await?;
    info!(category, ingredient, ?preference, "Preference recorded");
    print_json(&json!({
        "category": category,
        "ingredient": ingredient,
        "preference": preference,
    }))
}

/// Add a favorite and persist it
pub async fn favorite_add(ctx: &CliContext, category: &str, ingredient: &str) -> AppResult<()> {
    ctx.planner.add_favorite(ctx.user, category, ingredient).await?;
    ctx.persist().await?;
    print_json(&json!({ "category": category, "ingredient": ingredient, "favorite": true }))
}

/// Remove a favorite and persist the change
pub async fn favorite_remove(ctx: &CliContext, category: &str, ingredient: &str) -> AppResult<()> {
    ctx.planner
        .remove_favorite(ctx.user, category, ingredient)
        .await?;
    ctx.persist().await?;
    print_json(&json!({ "category": category, "ingredient": ingredient, "favorite": false }))
}
