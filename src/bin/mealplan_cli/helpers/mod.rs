// ABOUTME: Re-exports helper modules for mealplan-cli
// ABOUTME: Provides JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

pub mod output;
