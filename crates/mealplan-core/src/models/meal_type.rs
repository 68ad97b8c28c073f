// ABOUTME: Meal-type slots used to bucket recipes for planning
// ABOUTME: Maps between planner slots and the backend's meal-type tag strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::constants::meal_tags;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Soup course
    Soup,
}

impl MealType {
    /// All meal types in declaration order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Soup,
    ];

    /// Tag string the recipe backend stores for this meal type
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Breakfast => meal_tags::BREAKFAST,
            Self::Lunch => meal_tags::LUNCH,
            Self::Dinner => meal_tags::DINNER,
            Self::Snack => meal_tags::SNACK,
            Self::Soup => meal_tags::SOUP,
        }
    }

    /// English name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Soup => "soup",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    /// Accepts the English name or the backend tag, with or without accents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "reggeli" => Ok(Self::Breakfast),
            "lunch" | "ebéd" | "ebed" => Ok(Self::Lunch),
            "dinner" | "vacsora" => Ok(Self::Dinner),
            "snack" | "uzsonna" | "tízórai" | "tizorai" => Ok(Self::Snack),
            "soup" | "leves" => Ok(Self::Soup),
            other => Err(AppError::invalid_input(format!(
                "unknown meal type '{other}'"
            ))),
        }
    }
}
