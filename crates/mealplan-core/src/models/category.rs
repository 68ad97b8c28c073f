// ABOUTME: Ingredient category table fetched from the recipe backend
// ABOUTME: Category name to ingredient name list, kept in backend order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name → ingredient names belonging to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: BTreeMap<String, Vec<String>>,
}

impl CategoryTable {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Insert or replace a category's ingredient list
    pub fn insert<I, S>(&mut self, category: impl Into<String>, ingredients: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.insert(
            category.into(),
            ingredients.into_iter().map(Into::into).collect(),
        );
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_category<I, S>(mut self, category: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, ingredients);
        self
    }

    /// Exact-name lookup
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterate categories in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, ingredients)| (name.as_str(), ingredients.as_slice()))
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when no categories are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<K, V, S> FromIterator<(K, V)> for CategoryTable
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (category, ingredients) in iter {
            table.insert(category, ingredients);
        }
        table
    }
}
