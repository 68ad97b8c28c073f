// ABOUTME: Recipe filters over caller-supplied snapshots
// ABOUTME: Preference exclusion and liked-first ranking, meal-type and category restriction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::matcher::recipe_contains;
use crate::normalize::normalize;
use crate::profile::{PreferenceProfile, RecipeSignal};
use mealplan_core::models::{CategoryTable, Recipe};
use std::collections::HashSet;
use tracing::trace;
use uuid::Uuid;

/// Recipes left after dislike exclusion, split by preference signal
///
/// Both partitions keep the relative input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedRecipes<'a> {
    /// Recipes containing a liked or favorite ingredient
    pub liked: Vec<&'a Recipe>,
    /// Recipes with no preference signal
    pub neutral: Vec<&'a Recipe>,
}

impl<'a> RankedRecipes<'a> {
    /// Number of candidates across both partitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.liked.len() + self.neutral.len()
    }

    /// True when nothing survived the exclusion step
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.liked.is_empty() && self.neutral.is_empty()
    }

    /// Liked partition followed by the neutral partition
    #[must_use]
    pub fn into_ordered(self) -> Vec<&'a Recipe> {
        let mut ordered = self.liked;
        ordered.extend(self.neutral);
        ordered
    }

    /// Copy without the recipes whose id is in `used`
    #[must_use]
    pub fn without(&self, used: &HashSet<Uuid>) -> Self {
        let keep = |recipes: &[&'a Recipe]| -> Vec<&'a Recipe> {
            recipes
                .iter()
                .copied()
                .filter(|recipe| !used.contains(&recipe.id))
                .collect()
        };
        Self {
            liked: keep(&self.liked),
            neutral: keep(&self.neutral),
        }
    }
}

/// Drop disliked recipes and stable-partition the rest into liked and neutral
pub fn rank_partition<'a, I>(recipes: I, profile: &PreferenceProfile) -> RankedRecipes<'a>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut ranked = RankedRecipes::default();
    let mut excluded = 0_usize;

    for recipe in recipes {
        match profile.signal(recipe) {
            RecipeSignal::Excluded => excluded += 1,
            RecipeSignal::Liked => ranked.liked.push(recipe),
            RecipeSignal::Neutral => ranked.neutral.push(recipe),
        }
    }

    trace!(
        liked = ranked.liked.len(),
        neutral = ranked.neutral.len(),
        excluded,
        "Ranked recipe candidates"
    );
    ranked
}

/// Exclude recipes with a disliked ingredient and put liked recipes first
///
/// The result preserves input order within the liked and the unsigned group,
/// so applying it twice gives the same list.
///
/// ```
/// use mealplan_core::models::{IngredientPreference, Preference, Recipe};
/// use mealplan_matching::{filter_and_rank, PreferenceProfile};
/// use uuid::Uuid;
///
/// let user = Uuid::new_v4();
/// let recipes = vec![
///     Recipe::new("A").with_ingredients(["tojás", "liszt"]),
///     Recipe::new("B").with_ingredients(["csirke"]),
/// ];
/// let profile = PreferenceProfile::from_records(
///     &[IngredientPreference::new(user, "Pékáru", "liszt", Preference::Dislike)],
///     &[],
/// );
/// let names: Vec<_> = filter_and_rank(&recipes, &profile)
///     .iter()
///     .map(|r| r.name.as_str())
///     .collect();
/// assert_eq!(names, ["B"]);
/// ```
pub fn filter_and_rank<'a, I>(recipes: I, profile: &PreferenceProfile) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    rank_partition(recipes, profile).into_ordered()
}

/// True when one of the recipe's tags equals `tag` after normalization
#[must_use]
pub fn has_meal_type(recipe: &Recipe, tag: &str) -> bool {
    let wanted = normalize(tag);
    !wanted.is_empty() && recipe.meal_types.iter().any(|t| normalize(t) == wanted)
}

/// Recipes tagged with `meal_type`, compared after normalization
pub fn by_meal_type<'a, I>(recipes: I, meal_type: &str) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let wanted = normalize(meal_type);
    if wanted.is_empty() {
        return Vec::new();
    }
    recipes
        .into_iter()
        .filter(|recipe| recipe.meal_types.iter().any(|tag| normalize(tag) == wanted))
        .collect()
}

/// Look up a category by normalized name
#[must_use]
pub fn find_category<'t>(categories: &'t CategoryTable, category: &str) -> Option<&'t [String]> {
    if let Some(ingredients) = categories.get(category) {
        return Some(ingredients);
    }
    let wanted = normalize(category);
    categories
        .iter()
        .find(|(name, _)| normalize(name) == wanted)
        .map(|(_, ingredients)| ingredients)
}

/// Recipes matching one ingredient, or any ingredient of a category
///
/// With `ingredient` set only that ingredient is matched. Without it every
/// ingredient listed for `category` is tried; an unknown category yields
/// no recipes.
pub fn by_category_ingredient<'a, I>(
    recipes: I,
    categories: &CategoryTable,
    category: &str,
    ingredient: Option<&str>,
) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    if let Some(ingredient) = ingredient {
        return recipes
            .into_iter()
            .filter(|recipe| recipe_contains(recipe, ingredient))
            .collect();
    }

    let Some(members) = find_category(categories, category) else {
        trace!(category, "Unknown category, no recipes match");
        return Vec::new();
    };
    recipes
        .into_iter()
        .filter(|recipe| members.iter().any(|member| recipe_contains(recipe, member)))
        .collect()
}
