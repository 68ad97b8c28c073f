// ABOUTME: Resolved view over a user's ingredient preferences and favorites
// ABOUTME: Applies last-write-wins per (category, ingredient) and folds favorites into likes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Preference profile
//!
//! Raw preference rows may contain several writes for the same
//! (category, ingredient) pair. The profile keeps only the latest one
//! (by `updated_at`, then by position) and marks favorites as implicit
//! likes. An explicit dislike is never overridden by a favorite.

use crate::matcher::{matches_normalized, normalized_ingredients};
use crate::normalize::normalize_compact;
use chrono::{DateTime, Utc};
use mealplan_core::models::{Favorite, IngredientPreference, Preference, Recipe};
use std::collections::BTreeMap;

/// How a profile classifies a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSignal {
    /// Contains a disliked ingredient; must not be surfaced
    Excluded,
    /// Contains a liked or favorite ingredient
    Liked,
    /// No preference signal
    Neutral,
}

#[derive(Debug, Clone)]
struct ProfileEntry {
    ingredient: String,
    key: String,
    preference: Preference,
    favorite: bool,
    updated_at: Option<DateTime<Utc>>,
}

impl ProfileEntry {
    fn effective(&self) -> Preference {
        match self.preference {
            Preference::Dislike => Preference::Dislike,
            Preference::Like => Preference::Like,
            Preference::Neutral if self.favorite => Preference::Like,
            Preference::Neutral => Preference::Neutral,
        }
    }
}

/// A user's resolved preferences, keyed by normalized ingredient name
#[derive(Debug, Clone, Default)]
pub struct PreferenceProfile {
    entries: BTreeMap<(String, String), ProfileEntry>,
}

impl PreferenceProfile {
    /// Profile with no preferences; every recipe is neutral
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve raw preference and favorite rows into a profile
    #[must_use]
    pub fn from_records(preferences: &[IngredientPreference], favorites: &[Favorite]) -> Self {
        let mut entries: BTreeMap<(String, String), ProfileEntry> = BTreeMap::new();

        for pref in preferences {
            let key = normalize_compact(&pref.ingredient);
            if key.is_empty() {
                continue;
            }
            let slot = (normalize_compact(&pref.category), key.clone());
            let candidate = ProfileEntry {
                ingredient: pref.ingredient.clone(),
                key,
                preference: pref.preference,
                favorite: false,
                updated_at: pref.updated_at,
            };
            match entries.get_mut(&slot) {
                // Later position wins ties, so `>=`
                Some(existing) if candidate.updated_at >= existing.updated_at => {
                    *existing = candidate;
                }
                Some(_) => {}
                None => {
                    entries.insert(slot, candidate);
                }
            }
        }

        for favorite in favorites {
            let key = normalize_compact(&favorite.ingredient);
            if key.is_empty() {
                continue;
            }
            let slot = (normalize_compact(&favorite.category), key.clone());
            entries
                .entry(slot)
                .or_insert_with(|| ProfileEntry {
                    ingredient: favorite.ingredient.clone(),
                    key,
                    preference: Preference::Neutral,
                    favorite: false,
                    updated_at: None,
                })
                .favorite = true;
        }

        tracing::trace!(entries = entries.len(), "Resolved preference profile");
        Self { entries }
    }

    /// True when no preference or favorite is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entries_with(&self, preference: Preference) -> impl Iterator<Item = &ProfileEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.effective() == preference)
    }

    /// Original names of disliked ingredients
    pub fn disliked(&self) -> impl Iterator<Item = &str> {
        self.entries_with(Preference::Dislike)
            .map(|entry| entry.ingredient.as_str())
    }

    /// Original names of liked ingredients, favorites included
    pub fn liked(&self) -> impl Iterator<Item = &str> {
        self.entries_with(Preference::Like)
            .map(|entry| entry.ingredient.as_str())
    }

    /// Whether this exact ingredient name (normalized) is disliked in any category
    #[must_use]
    pub fn is_disliked(&self, ingredient: &str) -> bool {
        let key = normalize_compact(ingredient);
        self.entries_with(Preference::Dislike).any(|entry| entry.key == key)
    }

    /// Whether this exact ingredient name (normalized) is liked or a favorite
    #[must_use]
    pub fn is_liked(&self, ingredient: &str) -> bool {
        let key = normalize_compact(ingredient);
        self.entries_with(Preference::Like).any(|entry| entry.key == key)
    }

    /// Preference for an ingredient within a category, `Neutral` when unknown
    #[must_use]
    pub fn preference_for(&self, category: &str, ingredient: &str) -> Preference {
        let slot = (normalize_compact(category), normalize_compact(ingredient));
        self.entries
            .get(&slot)
            .map_or(Preference::Neutral, ProfileEntry::effective)
    }

    /// Classify a recipe using the permissive ingredient matcher
    ///
    /// Dislikes are checked first, so a recipe with both a disliked and a
    /// liked ingredient is `Excluded`.
    #[must_use]
    pub fn signal(&self, recipe: &Recipe) -> RecipeSignal {
        if self.entries.is_empty() {
            return RecipeSignal::Neutral;
        }
        let lines = normalized_ingredients(recipe);
        let hit = |entry: &ProfileEntry| {
            lines
                .iter()
                .any(|line| matches_normalized(line, &entry.key))
        };

        if self.entries_with(Preference::Dislike).any(hit) {
            RecipeSignal::Excluded
        } else if self.entries_with(Preference::Like).any(hit) {
            RecipeSignal::Liked
        } else {
            RecipeSignal::Neutral
        }
    }
}
