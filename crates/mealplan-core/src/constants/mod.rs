// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Planner defaults, cache TTLs, meal-type tags and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Cache-related constants
pub mod cache;
/// Planning defaults and limits
pub mod planning;

/// Canonical meal-type tags as stored by the recipe backend
pub mod meal_tags {
    /// Breakfast
    pub const BREAKFAST: &str = "reggeli";
    /// Lunch
    pub const LUNCH: &str = "ebéd";
    /// Dinner
    pub const DINNER: &str = "vacsora";
    /// Snack
    pub const SNACK: &str = "uzsonna";
    /// Soup
    pub const SOUP: &str = "leves";
}

/// Service names for structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const MEALPLAN: &str = "mealplan";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Comma separated meal types for a daily plan
    pub const DAILY_SLOTS: &str = "MEALPLAN_DAILY_SLOTS";
    /// Default number of days for a multi-day plan
    pub const DEFAULT_DAYS: &str = "MEALPLAN_DEFAULT_DAYS";
    /// Upper bound on the number of days in a plan
    pub const MAX_DAYS: &str = "MEALPLAN_MAX_DAYS";
    /// Avoid repeating recipes inside one plan
    pub const AVOID_REPEATS: &str = "MEALPLAN_AVOID_REPEATS";
    /// Probability of drawing from liked recipes
    pub const LIKED_BIAS: &str = "MEALPLAN_LIKED_BIAS";
    /// Category cache TTL in seconds (0 disables expiry)
    pub const CATEGORY_CACHE_TTL_SECS: &str = "MEALPLAN_CATEGORY_CACHE_TTL_SECS";
    /// Path to a JSON dataset used by the CLI
    pub const DATA_PATH: &str = "MEALPLAN_DATA_PATH";
}
