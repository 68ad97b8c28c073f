// ABOUTME: Star rating aggregation per recipe
// ABOUTME: Averages, counts and a top-rated ranking over an append-only log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::errors::AppResult;
use crate::matching::normalize;
use crate::models::Rating;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Aggregated ratings of one recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Recipe name as first rated
    pub recipe_name: String,
    /// Mean stars
    pub average: f64,
    /// Number of ratings
    pub count: u32,
}

/// Append-only rating log
///
/// Recipes are identified by name, compared in normalized form.
#[derive(Debug, Clone, Default)]
pub struct RatingLog {
    ratings: Vec<Rating>,
}

fn rating_key(name: &str) -> String {
    normalize(name)
}

impl RatingLog {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log built from stored ratings, skipping invalid ones
    #[must_use]
    pub fn from_ratings(ratings: Vec<Rating>) -> Self {
        Self {
            ratings: ratings
                .into_iter()
                .filter(|rating| rating.validate().is_ok())
                .collect(),
        }
    }

    /// Append a rating
    ///
    /// # Errors
    ///
    /// Returns the validation error of an out-of-range or unnamed rating
    pub fn record(&mut self, rating: Rating) -> AppResult<()> {
        rating.validate()?;
        self.ratings.push(rating);
        Ok(())
    }

    /// Number of recorded ratings
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// True when nothing is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    fn stars_for<'a>(&'a self, recipe_name: &str) -> impl Iterator<Item = u8> + 'a {
        let key = rating_key(recipe_name);
        self.ratings
            .iter()
            .filter(move |rating| rating_key(&rating.recipe_name) == key)
            .map(|rating| rating.stars)
    }

    /// Mean stars for a recipe, `None` when unrated
    #[must_use]
    pub fn average_for(&self, recipe_name: &str) -> Option<f64> {
        let (sum, count) = self
            .stars_for(recipe_name)
            .fold((0_u32, 0_u32), |(sum, count), stars| {
                (sum + u32::from(stars), count + 1)
            });
        (count > 0).then(|| f64::from(sum) / f64::from(count))
    }

    /// Number of ratings for a recipe
    #[must_use]
    pub fn count_for(&self, recipe_name: &str) -> usize {
        self.stars_for(recipe_name).count()
    }

    /// Up to `n` recipes by average descending, ties broken by name
    #[must_use]
    pub fn top_rated(&self, n: usize) -> Vec<RatingSummary> {
        let mut totals: BTreeMap<String, (String, u32, u32)> = BTreeMap::new();
        for rating in &self.ratings {
            let entry = totals
                .entry(rating_key(&rating.recipe_name))
                .or_insert_with(|| (rating.recipe_name.trim().to_owned(), 0, 0));
            entry.1 += u32::from(rating.stars);
            entry.2 += 1;
        }

        let mut summaries: Vec<RatingSummary> = totals
            .into_values()
            .map(|(recipe_name, sum, count)| RatingSummary {
                recipe_name,
                average: f64::from(sum) / f64::from(count),
                count,
            })
            .collect();
        summaries.sort_by(|a, b| {
            b.average
                .partial_cmp(&a.average)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.recipe_name.cmp(&b.recipe_name))
        });
        summaries.truncate(n);
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn log(entries: &[(&str, u8)]) -> RatingLog {
        let user = Uuid::new_v4();
        let mut log = RatingLog::new();
        for (name, stars) in entries {
            log.record(Rating::new(user, *name, *stars).unwrap()).unwrap();
        }
        log
    }

    #[test]
    fn test_average_and_count() {
        let log = log(&[("Lecsó", 5), ("lecsó ", 4), ("Gulyás", 3)]);
        assert_eq!(log.average_for("LECSÓ"), Some(4.5));
        assert_eq!(log.count_for("Lecsó"), 2);
        assert_eq!(log.average_for("Pörkölt"), None);
        assert_eq!(log.count_for("Pörkölt"), 0);
    }

    #[test]
    fn test_names_compare_without_accents() {
        let log = log(&[("Lecsó", 4), ("Lecso", 2)]);
        assert_eq!(log.count_for("LECSÓ"), 2);
        assert_eq!(log.top_rated(5).len(), 1);
    }

    #[test]
    fn test_top_rated_orders_by_average_then_name() {
        let log = log(&[("Gulyás", 4), ("Bableves", 4), ("Lecsó", 5), ("Főzelék", 2)]);
        let names: Vec<_> = log
            .top_rated(3)
            .into_iter()
            .map(|s| s.recipe_name)
            .collect();
        assert_eq!(names, ["Lecsó", "Bableves", "Gulyás"]);
        assert!(log.top_rated(0).is_empty());
    }

    #[test]
    fn test_from_ratings_skips_invalid() {
        let user = Uuid::new_v4();
        let mut bad = Rating::new(user, "Lecsó", 3).unwrap();
        bad.stars = 0;
        let log = RatingLog::from_ratings(vec![bad, Rating::new(user, "Lecsó", 5).unwrap()]);
        assert_eq!(log.len(), 1);
        assert_eq!(log.average_for("Lecsó"), Some(5.0));
    }
}
