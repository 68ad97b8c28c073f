// ABOUTME: Core data models for the mealplan recipe planner
// ABOUTME: Re-exports Recipe, MealType, IngredientPreference, Favorite and Rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! # Data Models
//!
//! Explicit records for the reference data loaded from the recipe backend
//! and the per-user preference data. Validation happens when records are
//! constructed or decoded at the data-access boundary; the filtering
//! pipeline takes these as already-valid snapshots.

mod category;
mod meal_type;
mod preference;
mod rating;
mod recipe;

pub use category::CategoryTable;
pub use meal_type::MealType;
pub use preference::{Favorite, IngredientPreference, Preference};
pub use rating::Rating;
pub use recipe::{Nutrition, Recipe};
