// ABOUTME: Cache-related constants for the category table cache
// ABOUTME: TTL defaults for request-scoped memoization of backend lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

/// Category table cache TTL (10 minutes) - categories change only through admin edits
pub const DEFAULT_CATEGORY_CACHE_TTL_SECS: u64 = 600;
