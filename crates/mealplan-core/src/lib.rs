// ABOUTME: Core types and constants for the mealplan recipe planner
// ABOUTME: Foundation crate with error handling, recipe/preference models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

#![deny(unsafe_code)]

//! # Mealplan Core
//!
//! Foundation crate providing shared types and constants for the mealplan
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and store errors
//! - **constants**: Planner defaults, cache TTLs and canonical meal-type tags
//! - **models**: Recipes, ingredient preferences, favorites, ratings and categories

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (Recipe, `IngredientPreference`, Favorite, Rating, etc.)
pub mod models;
