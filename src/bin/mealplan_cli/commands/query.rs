// ABOUTME: Recipe query commands for mealplan-cli
// ABOUTME: Random pick, meal-type, category and ingredient listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use super::CliContext;
use crate::helpers::output::print_json;
use mealplan::errors::AppResult;
use tracing::warn;

/// Print one random recipe, or `null` when nothing survives filtering
pub async fn random(ctx: &mut CliContext) -> AppResult<()> {
    let recipe = ctx.planner.random_recipe(ctx.user, &mut ctx.rng).await?;
    if recipe.is_none() {
        warn!("No recipe left after preference filtering");
    }
    print_json(&recipe)
}

/// Print recipes for a meal type tag
pub async fn meal_type(ctx: &CliContext, meal_type: &str) -> AppResult<()> {
    let recipes = ctx.planner.recipes_by_meal_type(ctx.user, meal_type).await?;
    print_json(&recipes)
}

/// Print recipes matching a category, optionally one ingredient and meal type
pub async fn category(
    ctx: &CliContext,
    category: &str,
    ingredient: Option<&str>,
    meal_type: Option<&str>,
) -> AppResult<()> {
    let recipes = ctx
        .planner
        .recipes_by_category(ctx.user, category, ingredient, meal_type)
        .await?;
    print_json(&recipes)
}

/// Print a category's ingredients minus the disliked ones
pub async fn ingredients(ctx: &CliContext, category: &str) -> AppResult<()> {
    let ingredients = ctx.planner.filtered_ingredients(ctx.user, category).await?;
    print_json(&ingredients)
}
