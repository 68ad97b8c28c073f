// ABOUTME: Planning constants for daily and multi-day meal plans
// ABOUTME: Day limits, selection bias and rating bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

/// Default length of a multi-day plan (one week)
pub const DEFAULT_PLAN_DAYS: u8 = 7;

/// Longest plan the planner will generate
pub const MAX_PLAN_DAYS: u8 = 14;

/// Probability of drawing a slot's recipe from the liked partition
pub const DEFAULT_LIKED_BIAS: f64 = 0.7;

/// Lowest accepted star rating
pub const MIN_RATING_STARS: u8 = 1;

/// Highest accepted star rating
pub const MAX_RATING_STARS: u8 = 5;

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrates (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
