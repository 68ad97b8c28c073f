// ABOUTME: Environment configuration for planner behavior and data locations
// ABOUTME: Parses MEALPLAN_* variables into a validated PlannerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Environment-based configuration for the planner

use crate::errors::{AppError, AppResult};
use mealplan_core::constants::cache::DEFAULT_CATEGORY_CACHE_TTL_SECS;
use mealplan_core::constants::env_config;
use mealplan_core::constants::planning::{DEFAULT_LIKED_BIAS, DEFAULT_PLAN_DAYS, MAX_PLAN_DAYS};
use mealplan_core::models::MealType;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Planner settings shared by every planning mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Meal slots filled by a daily plan, in order
    pub daily_slots: Vec<MealType>,
    /// Number of days when a multi-day plan does not specify one
    pub default_days: u8,
    /// Longest accepted multi-day plan
    pub max_days: u8,
    /// Skip recipes already used in the plan while alternatives remain
    pub avoid_repeats: bool,
    /// Probability of drawing a slot from liked recipes
    pub liked_bias: f64,
    /// Category table cache lifetime; `None` keeps it until invalidated
    pub category_cache_ttl: Option<Duration>,
    /// JSON dataset location for the CLI
    pub data_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_slots: vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner],
            default_days: DEFAULT_PLAN_DAYS,
            max_days: MAX_PLAN_DAYS,
            avoid_repeats: true,
            liked_bias: DEFAULT_LIKED_BIAS,
            category_cache_ttl: Some(Duration::from_secs(DEFAULT_CATEGORY_CACHE_TTL_SECS)),
            data_path: None,
        }
    }
}

fn parse_number<T: FromStr>(variable: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::config_invalid(variable, format!("'{raw}' is not a valid number")))
}

fn parse_bool(variable: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config_invalid(
            variable,
            format!("'{raw}' is not a boolean"),
        )),
    }
}

fn parse_slots(raw: &str) -> AppResult<Vec<MealType>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<MealType>()
                .map_err(|e| AppError::config_invalid(env_config::DAILY_SLOTS, e.message))
        })
        .collect()
}

impl PlannerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed or
    /// the resulting configuration is inconsistent
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PlannerConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(env_config::DAILY_SLOTS) {
            config.daily_slots = parse_slots(&raw)?;
        }
        if let Some(raw) = lookup(env_config::DEFAULT_DAYS) {
            config.default_days = parse_number(env_config::DEFAULT_DAYS, &raw)?;
        }
        if let Some(raw) = lookup(env_config::MAX_DAYS) {
            config.max_days = parse_number(env_config::MAX_DAYS, &raw)?;
        }
        if let Some(raw) = lookup(env_config::AVOID_REPEATS) {
            config.avoid_repeats = parse_bool(env_config::AVOID_REPEATS, &raw)?;
        }
        if let Some(raw) = lookup(env_config::LIKED_BIAS) {
            config.liked_bias = parse_number(env_config::LIKED_BIAS, &raw)?;
        }
        if let Some(raw) = lookup(env_config::CATEGORY_CACHE_TTL_SECS) {
            let secs: u64 = parse_number(env_config::CATEGORY_CACHE_TTL_SECS, &raw)?;
            config.category_cache_ttl = (secs > 0).then_some(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(env_config::DATA_PATH) {
            let trimmed = raw.trim();
            config.data_path = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
        }

        config.validate()?;
        debug!(
            slots = config.daily_slots.len(),
            default_days = config.default_days,
            max_days = config.max_days,
            avoid_repeats = config.avoid_repeats,
            liked_bias = config.liked_bias,
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field consistency
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first violated constraint
    pub fn validate(&self) -> AppResult<()> {
        if self.daily_slots.is_empty() {
            return Err(AppError::config_invalid(
                env_config::DAILY_SLOTS,
                "at least one meal slot is required",
            ));
        }
        if self.max_days == 0 || self.max_days > MAX_PLAN_DAYS {
            return Err(AppError::config_invalid(
                env_config::MAX_DAYS,
                format!("must be between 1 and {MAX_PLAN_DAYS}"),
            ));
        }
        if self.default_days == 0 || self.default_days > self.max_days {
            return Err(AppError::config_invalid(
                env_config::DEFAULT_DAYS,
                format!("must be between 1 and {}", self.max_days),
            ));
        }
        if !(0.0..=1.0).contains(&self.liked_bias) {
            return Err(AppError::config_invalid(
                env_config::LIKED_BIAS,
                "must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
