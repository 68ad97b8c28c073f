// ABOUTME: Recipe matching and filtering pipeline for preference-aware meal planning
// ABOUTME: Normalizer, ingredient matcher, preference ranking, category filters and selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

#![deny(unsafe_code)]

//! # Mealplan Matching
//!
//! Pure, synchronous transformations over caller-supplied recipe snapshots.
//! Nothing in this crate performs I/O or holds state between calls; the
//! planner fetches data, builds a [`PreferenceProfile`] and feeds slices of
//! recipes through these functions.
//!
//! Pipeline:
//!
//! 1. [`normalize`] folds case, diacritics and punctuation
//! 2. [`matches`] compares an ingredient line against a query name
//! 3. [`filter_and_rank`] drops disliked recipes and moves liked ones first
//! 4. [`by_meal_type`] / [`by_category_ingredient`] restrict candidates
//! 5. [`pick_random`] / [`pick_biased`] choose one candidate

/// Ingredient-level matching
pub mod matcher;
/// Diacritic and punctuation folding
pub mod normalize;
/// Resolved per-user preference view
pub mod profile;
/// Meal-type, category and preference filters
pub mod filter;
/// Random selection over filtered candidates
pub mod selection;

pub use filter::{
    by_category_ingredient, by_meal_type, filter_and_rank, find_category, has_meal_type,
    rank_partition, RankedRecipes,
};
pub use matcher::{matches, recipe_contains};
pub use normalize::{normalize, normalize_compact};
pub use profile::{PreferenceProfile, RecipeSignal};
pub use selection::{pick_biased, pick_random};
