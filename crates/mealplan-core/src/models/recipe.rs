// ABOUTME: Recipe reference data model with nutrition and meal-type tags
// ABOUTME: Immutable snapshot of a backend recipe row used by the filtering pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::constants::planning::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use uuid::Uuid;

/// Macronutrients per serving, as recorded by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

impl Nutrition {
    /// Create nutrition with all three macros known
    #[must_use]
    pub const fn new(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g: Some(protein_g),
            carbs_g: Some(carbs_g),
            fat_g: Some(fat_g),
        }
    }

    /// Estimated energy in kcal (4/4/9 kcal per gram); missing macros count as zero
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.protein_g.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g.unwrap_or(0.0) * KCAL_PER_GRAM_CARBS
            + self.fat_g.unwrap_or(0.0) * KCAL_PER_GRAM_FAT
    }

    /// True when no macro is recorded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.protein_g.is_none() && self.carbs_g.is_none() && self.fat_g.is_none()
    }
}

impl AddAssign<&Self> for Nutrition {
    fn add_assign(&mut self, other: &Self) {
        let add = |lhs: Option<f64>, rhs: Option<f64>| match (lhs, rhs) {
            (None, None) => None,
            (l, r) => Some(l.unwrap_or(0.0) + r.unwrap_or(0.0)),
        };
        self.protein_g = add(self.protein_g, other.protein_g);
        self.carbs_g = add(self.carbs_g, other.carbs_g);
        self.fat_g = add(self.fat_g, other.fat_g);
    }
}

/// A recipe with its ordered ingredient list and meal-type tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: String,
    /// Nutrition per serving
    #[serde(default, skip_serializing_if = "Nutrition::is_empty")]
    pub nutrition: Nutrition,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Meal-type tags (reggeli, ebéd, vacsora, ...)
    #[serde(default, alias = "tags")]
    pub meal_types: Vec<String>,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Create a recipe with a fresh identifier and no content
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            instructions: String::new(),
            nutrition: Nutrition::default(),
            ingredients: Vec::new(),
            meal_types: Vec::new(),
            image_url: None,
        }
    }

    /// Set instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set nutrition
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add a meal-type tag
    #[must_use]
    pub fn with_meal_type(mut self, tag: impl Into<String>) -> Self {
        self.meal_types.push(tag.into());
        self
    }

    /// Set image URL
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_from_macros() {
        let nutrition = Nutrition::new(30.0, 50.0, 10.0);
        assert!((nutrition.calories() - 410.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nutrition_sum_keeps_unknown_as_none() {
        let mut total = Nutrition::default();
        total += &Nutrition {
            protein_g: Some(12.0),
            carbs_g: None,
            fat_g: None,
        };
        total += &Nutrition::default();
        assert_eq!(total.protein_g, Some(12.0));
        assert_eq!(total.carbs_g, None);
    }

    #[test]
    fn test_recipe_deserializes_tags_alias() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"name":"Rántotta","ingredients":["tojás","vaj"],"tags":["reggeli"]}"#,
        )
        .unwrap();
        assert_eq!(recipe.meal_types, vec!["reggeli"]);
        assert!(recipe.nutrition.is_empty());
        assert!(recipe.image_url.is_none());
    }
}
