// ABOUTME: Ingredient preference and favorite records for a user
// ABOUTME: Like/dislike/neutral tags over (category, ingredient) pairs plus boosted favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use uuid::Uuid;

/// User-declared stance on an ingredient
///
/// Unknown values decode as `Neutral` so a malformed record never excludes
/// or promotes anything. User input goes through the strict `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Recipes containing the ingredient are promoted
    Like,
    /// Recipes containing the ingredient are never surfaced
    Dislike,
    /// No signal
    #[default]
    #[serde(other)]
    Neutral,
}

impl Preference {
    /// Parse from string, falling back to `Neutral`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "like" => Self::Like,
            "dislike" => Self::Dislike,
            _ => Self::Neutral,
        }
    }
}

impl FromStr for Preference {
    type Err = AppError;

    /// Strict parse for user input: only like, dislike or neutral
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "neutral" => Ok(Self::Neutral),
            other => Err(AppError::invalid_input(format!(
                "unknown preference '{other}', expected like, dislike or neutral"
            ))),
        }
    }
}

/// Any value that is not a like/dislike string decodes as `Neutral`,
/// including null, numbers and objects
fn deserialize_lossy<'de, D>(deserializer: D) -> Result<Preference, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .map_or(Preference::Neutral, Preference::from_str_lossy))
}

/// One (user, category, ingredient) preference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientPreference {
    /// Owner of the preference
    pub user_id: Uuid,
    /// Ingredient category name
    pub category: String,
    /// Ingredient name within the category
    pub ingredient: String,
    /// Declared preference
    #[serde(default, deserialize_with = "deserialize_lossy")]
    pub preference: Preference,
    /// Time of the last write; later writes win
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IngredientPreference {
    /// Create a preference stamped with the current time
    #[must_use]
    pub fn new(
        user_id: Uuid,
        category: impl Into<String>,
        ingredient: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            user_id,
            category: category.into(),
            ingredient: ingredient.into(),
            preference,
            updated_at: Some(Utc::now()),
        }
    }

    /// Override the write timestamp
    #[must_use]
    pub const fn at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// True when this record addresses the same (user, category, ingredient)
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.category == other.category
            && self.ingredient == other.ingredient
    }
}

/// A boosted-priority ingredient; implies an implicit like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Owner of the favorite
    pub user_id: Uuid,
    /// Ingredient category name
    pub category: String,
    /// Ingredient name within the category
    pub ingredient: String,
    /// When the favorite was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Favorite {
    /// Create a favorite stamped with the current time
    #[must_use]
    pub fn new(user_id: Uuid, category: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self {
            user_id,
            category: category.into(),
            ingredient: ingredient.into(),
            created_at: Some(Utc::now()),
        }
    }
}
