// ABOUTME: Configuration management module for planner settings
// ABOUTME: Environment-only configuration: no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Configuration module
//!
//! - **Environment**: planner behavior and dataset location from `MEALPLAN_*` variables
//! - **Logging**: lives in [`crate::logging`] and reads the standard `RUST_LOG` family

/// Environment and planner configuration
pub mod environment;

pub use environment::PlannerConfig;
