// ABOUTME: Main library entry point for the mealplan recipe planner
// ABOUTME: Wires the matching pipeline to a recipe store, planning modes, ratings and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Mealplan
//!
//! Filters and prioritizes recipes according to a user's ingredient
//! preferences, then serves them by meal type, by ingredient category, at
//! random, or as daily and multi-day plans.
//!
//! ## Architecture
//!
//! - **Matching** (`mealplan-matching`): pure normalizer, matcher, ranking and selection
//! - **Store**: async data-access trait with an in-memory backend and JSON fixtures
//! - **Planner**: combines store snapshots with a user's preference profile
//! - **Planning**: daily and multi-day plans with nutrition totals
//! - **Config**: `MEALPLAN_*` environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan::config::PlannerConfig;
//! use mealplan::errors::AppResult;
//! use mealplan::planner::MealPlanner;
//! use mealplan::store::Dataset;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let store = Dataset::from_path("recipes.json").await?.into_store();
//!     let planner = MealPlanner::new(store, config);
//!
//!     let breakfasts = planner.recipes_by_meal_type(Uuid::nil(), "reggeli").await?;
//!     println!("{} breakfast candidates", breakfasts.len());
//!     Ok(())
//! }
//! ```

pub use mealplan_core::{constants, errors, models};
pub use mealplan_matching as matching;

/// Caller-owned category table cache
pub mod cache;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Preference-aware recipe queries over a store
pub mod planner;

/// Daily and multi-day plan types and assembly
pub mod planning;

/// Rating aggregation
pub mod ratings;

/// Recipe data-access layer
pub mod store;
