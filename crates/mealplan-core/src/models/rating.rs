// ABOUTME: Star rating record for a recipe
// ABOUTME: Append-only log entries validated to the 1-5 star range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::constants::planning::{MAX_RATING_STARS, MIN_RATING_STARS};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's star rating of a recipe, identified by recipe name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Who rated
    pub user_id: Uuid,
    /// Rated recipe's name
    pub recipe_name: String,
    /// 1-5 stars
    pub stars: u8,
    /// When the rating was recorded
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// Create a rating stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `stars` is outside 1-5 and
    /// `InvalidInput` when the recipe name is blank
    pub fn new(user_id: Uuid, recipe_name: impl Into<String>, stars: u8) -> AppResult<Self> {
        let rating = Self {
            user_id,
            recipe_name: recipe_name.into(),
            stars,
            created_at: Utc::now(),
        };
        rating.validate()?;
        Ok(rating)
    }

    /// Check the invariants of a decoded rating
    ///
    /// # Errors
    ///
    /// Same conditions as [`Rating::new`]
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_RATING_STARS..=MAX_RATING_STARS).contains(&self.stars) {
            return Err(AppError::value_out_of_range(
                "stars",
                format!(
                    "{} is not between {MIN_RATING_STARS} and {MAX_RATING_STARS}",
                    self.stars
                ),
            ));
        }
        if self.recipe_name.trim().is_empty() {
            return Err(AppError::invalid_input("recipe name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_rating_bounds() {
        let user = Uuid::new_v4();
        assert!(Rating::new(user, "Gulyásleves", 1).is_ok());
        assert!(Rating::new(user, "Gulyásleves", 5).is_ok());
        assert_eq!(
            Rating::new(user, "Gulyásleves", 0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            Rating::new(user, "Gulyásleves", 6).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            Rating::new(user, "  ", 3).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
}
