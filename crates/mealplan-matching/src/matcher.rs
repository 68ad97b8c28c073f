// ABOUTME: Permissive ingredient matcher used by every recipe filter
// ABOUTME: Equality or two-way substring test over whitespace-insensitive normalized text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Ingredient matching
//!
//! A recipe ingredient line and a query name match when, after
//! [`normalize_compact`], they are equal or either contains the other.
//! This over-matches on purpose (`alma` matches `almapüré` and `almaecet`);
//! recipe lines carry quantities and adjectives ("2 dl tej", "reszelt sajt")
//! that must still match the bare ingredient name.

use crate::normalize::normalize_compact;
use mealplan_core::models::Recipe;

/// Match two already-normalized strings
///
/// An empty side never matches, otherwise `""` would be a substring of
/// everything.
#[must_use]
pub(crate) fn matches_normalized(ingredient: &str, query: &str) -> bool {
    if ingredient.is_empty() || query.is_empty() {
        return false;
    }
    ingredient == query || ingredient.contains(query) || query.contains(ingredient)
}

/// Whether a recipe ingredient line matches an ingredient name
///
/// ```
/// use mealplan_matching::matches;
///
/// assert!(matches("2 db Tojás", "tojás"));
/// assert!(matches("Csirke máj", "csirkemáj"));
/// assert!(!matches("liszt", "cukor"));
/// ```
#[must_use]
pub fn matches(recipe_ingredient: &str, query: &str) -> bool {
    matches_normalized(
        &normalize_compact(recipe_ingredient),
        &normalize_compact(query),
    )
}

/// Whether any of the recipe's ingredient lines matches `ingredient`
#[must_use]
pub fn recipe_contains(recipe: &Recipe, ingredient: &str) -> bool {
    let query = normalize_compact(ingredient);
    if query.is_empty() {
        return false;
    }
    recipe
        .ingredients
        .iter()
        .any(|line| matches_normalized(&normalize_compact(line), &query))
}

/// Normalize every ingredient line of a recipe once, for repeated matching
#[must_use]
pub(crate) fn normalized_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|line| normalize_compact(line))
        .filter(|line| !line.is_empty())
        .collect()
}
