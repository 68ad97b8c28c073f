// ABOUTME: Preference-aware recipe queries and plan generation over a RecipeStore
// ABOUTME: Fetches snapshots, resolves the user's profile and runs the matching pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! # Meal Planner
//!
//! Every query fetches fresh recipe and preference snapshots from the store,
//! resolves them into a [`PreferenceProfile`] and hands them to the pure
//! matching functions. Only the category table is cached, in a cache owned
//! by the planner instance.

use crate::cache::CategoryCache;
use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::matching::{
    by_category_ingredient, by_meal_type, filter_and_rank, find_category, has_meal_type,
    normalize, pick_random, rank_partition, PreferenceProfile,
};
use crate::models::{Favorite, IngredientPreference, MealType, Preference, Rating, Recipe};
use crate::planning::{DailyPlan, MultiDayPlan, PlanBuilder, SlotCandidates};
use crate::ratings::RatingLog;
use crate::store::RecipeStore;
use chrono::NaiveDate;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Store snapshot plus the user's resolved profile
struct UserContext {
    recipes: Vec<Recipe>,
    profile: PreferenceProfile,
}

/// Recipes tagged with the query itself or, when it names a meal type,
/// with that type's backend tag
fn by_meal_query<'a, I>(recipes: I, meal_type: &str) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let backend_tag = meal_type.parse::<MealType>().ok().map(|parsed| parsed.tag());
    recipes
        .into_iter()
        .filter(|recipe| {
            has_meal_type(recipe, meal_type)
                || backend_tag.is_some_and(|tag| has_meal_type(recipe, tag))
        })
        .collect()
}

/// Recipe planner bound to one store
pub struct MealPlanner<S: RecipeStore> {
    store: S,
    config: PlannerConfig,
    categories: Mutex<CategoryCache>,
}

impl<S: RecipeStore> MealPlanner<S> {
    /// Create a planner with a cache sized by `config`
    #[must_use]
    pub fn new(store: S, config: PlannerConfig) -> Self {
        let categories = Mutex::new(CategoryCache::from_config(&config));
        Self {
            store,
            config,
            categories,
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Force the next category lookup to refetch
    pub async fn invalidate_categories(&self) {
        self.categories.lock().await.invalidate();
    }

    async fn context(&self, user_id: Uuid) -> AppResult<UserContext> {
        let (recipes, preferences, favorites) = tokio::try_join!(
            self.store.fetch_recipes(),
            self.store.fetch_user_preferences(user_id),
            self.store.fetch_user_favorites(user_id),
        )?;
        let profile = PreferenceProfile::from_records(&preferences, &favorites);
        debug!(
            %user_id,
            recipes = recipes.len(),
            preferences = preferences.len(),
            favorites = favorites.len(),
            "Loaded planning context"
        );
        Ok(UserContext { recipes, profile })
    }

    // ================================
    // Queries
    // ================================

    /// Recipes tagged `meal_type`, disliked ones removed and liked ones first
    ///
    /// An English meal-type name such as `lunch` also selects the recipes
    /// carrying that type's backend tag.
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn recipes_by_meal_type(
        &self,
        user_id: Uuid,
        meal_type: &str,
    ) -> AppResult<Vec<Recipe>> {
        let ctx = self.context(user_id).await?;
        let tagged = by_meal_query(&ctx.recipes, meal_type);
        let ranked = filter_and_rank(tagged.iter().copied(), &ctx.profile);
        debug!(
            meal_type,
            tagged = tagged.len(),
            candidates = ranked.len(),
            "Filtered by meal type"
        );
        Ok(ranked.into_iter().cloned().collect())
    }

    /// Recipes using an ingredient or any ingredient of a category
    ///
    /// `meal_type` further restricts the result when given.
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn recipes_by_category(
        &self,
        user_id: Uuid,
        category: &str,
        ingredient: Option<&str>,
        meal_type: Option<&str>,
    ) -> AppResult<Vec<Recipe>> {
        let ctx = self.context(user_id).await?;
        let mut cache = self.categories.lock().await;
        let table = cache.get_or_fetch(&self.store).await?;

        let mut matched = by_category_ingredient(&ctx.recipes, table, category, ingredient);
        if let Some(meal_type) = meal_type {
            matched = by_meal_query(matched, meal_type);
        }
        let ranked = filter_and_rank(matched.iter().copied(), &ctx.profile);
        debug!(
            category,
            ingredient,
            meal_type,
            matched = matched.len(),
            candidates = ranked.len(),
            "Filtered by category"
        );
        Ok(ranked.into_iter().cloned().collect())
    }

    /// A category's ingredient names without the ones the user dislikes
    ///
    /// Unknown categories yield an empty list.
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn filtered_ingredients(
        &self,
        user_id: Uuid,
        category: &str,
    ) -> AppResult<Vec<String>> {
        let (preferences, favorites) = tokio::try_join!(
            self.store.fetch_user_preferences(user_id),
            self.store.fetch_user_favorites(user_id),
        )?;
        let profile = PreferenceProfile::from_records(&preferences, &favorites);

        let mut cache = self.categories.lock().await;
        let table = cache.get_or_fetch(&self.store).await?;
        let Some(members) = find_category(table, category) else {
            debug!(category, "Unknown category");
            return Ok(Vec::new());
        };
        Ok(members
            .iter()
            .filter(|ingredient| !profile.is_disliked(ingredient))
            .cloned()
            .collect())
    }

    /// One uniformly random recipe among everything the user does not dislike
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn random_recipe<R>(&self, user_id: Uuid, rng: &mut R) -> AppResult<Option<Recipe>>
    where
        R: Rng + Send + ?Sized,
    {
        let ctx = self.context(user_id).await?;
        let candidates = filter_and_rank(&ctx.recipes, &ctx.profile);
        debug!(candidates = candidates.len(), "Picking random recipe");
        Ok(pick_random(&candidates, rng).cloned())
    }

    // ================================
    // Plans
    // ================================

    fn slot_candidates<'a>(&self, ctx: &'a UserContext) -> Vec<SlotCandidates<'a>> {
        self.config
            .daily_slots
            .iter()
            .map(|&meal_type| {
                let tagged = by_meal_type(&ctx.recipes, meal_type.tag());
                let ranked = rank_partition(tagged, &ctx.profile);
                debug!(
                    meal_type = %meal_type,
                    liked = ranked.liked.len(),
                    neutral = ranked.neutral.len(),
                    "Slot candidates"
                );
                SlotCandidates { meal_type, ranked }
            })
            .collect()
    }

    /// One recipe per configured meal slot for `date`
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn daily_plan<R>(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        rng: &mut R,
    ) -> AppResult<DailyPlan>
    where
        R: Rng + Send + ?Sized,
    {
        let ctx = self.context(user_id).await?;
        let slots = self.slot_candidates(&ctx);
        let plan = PlanBuilder::new(self.config.liked_bias, self.config.avoid_repeats)
            .build_day(date, &slots, rng);
        info!(
            %user_id,
            %date,
            meals = plan.meals.len(),
            calories = plan.calories,
            "Generated daily plan"
        );
        Ok(plan)
    }

    /// Consecutive daily plans starting at `start`
    ///
    /// `days` defaults to the configured default.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `days` is outside `1..=max_days` and
    /// propagates store failures
    pub async fn multi_day_plan<R>(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        days: Option<u8>,
        rng: &mut R,
    ) -> AppResult<MultiDayPlan>
    where
        R: Rng + Send + ?Sized,
    {
        let days = days.unwrap_or(self.config.default_days);
        if days == 0 || days > self.config.max_days {
            return Err(AppError::value_out_of_range(
                "days",
                format!("{days} is not between 1 and {}", self.config.max_days),
            ));
        }

        let ctx = self.context(user_id).await?;
        let slots = self.slot_candidates(&ctx);
        let plan = PlanBuilder::new(self.config.liked_bias, self.config.avoid_repeats)
            .build_days(start, days, &slots, rng);
        info!(
            %user_id,
            %start,
            days = plan.len(),
            avoid_repeats = self.config.avoid_repeats,
            "Generated multi-day plan"
        );
        Ok(plan)
    }

    // ================================
    // Preferences and ratings
    // ================================

    /// Record a like, dislike or neutral preference
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank ingredient and propagates store failures
    pub async fn set_preference(
        &self,
        user_id: Uuid,
        category: &str,
        ingredient: &str,
        preference: Preference,
    ) -> AppResult<()> {
        if ingredient.trim().is_empty() {
            return Err(AppError::invalid_input("ingredient must not be empty"));
        }
        self.store
            .upsert_preference(IngredientPreference::new(
                user_id, category, ingredient, preference,
            ))
            .await
    }

    /// Mark an ingredient as favorite
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank ingredient and propagates store failures
    pub async fn add_favorite(
        &self,
        user_id: Uuid,
        category: &str,
        ingredient: &str,
    ) -> AppResult<()> {
        if ingredient.trim().is_empty() {
            return Err(AppError::invalid_input("ingredient must not be empty"));
        }
        self.store
            .add_favorite(Favorite::new(user_id, category, ingredient))
            .await
    }

    /// Unmark a favorite ingredient
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when it was not a favorite
    pub async fn remove_favorite(
        &self,
        user_id: Uuid,
        category: &str,
        ingredient: &str,
    ) -> AppResult<()> {
        self.store
            .remove_favorite(user_id, category, ingredient)
            .await
    }

    /// Rate a recipe from the catalog
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for stars outside 1-5, `ResourceNotFound`
    /// when no recipe has that name and propagates store failures
    pub async fn rate_recipe(
        &self,
        user_id: Uuid,
        recipe_name: &str,
        stars: u8,
    ) -> AppResult<Rating> {
        let requested = Rating::new(user_id, recipe_name.trim(), stars)?;
        let wanted = normalize(recipe_name);
        let recipes = self.store.fetch_recipes().await?;
        let Some(recipe) = recipes
            .into_iter()
            .find(|recipe| normalize(&recipe.name) == wanted)
        else {
            return Err(AppError::not_found(format!(
                "recipe '{}'",
                requested.recipe_name
            )));
        };
        // Stored under the catalog spelling
        let rating = Rating {
            recipe_name: recipe.name,
            ..requested
        };
        self.store.append_rating(rating.clone()).await?;
        info!(%user_id, recipe = %rating.recipe_name, stars, "Recorded rating");
        Ok(rating)
    }

    /// Every stored rating, aggregated
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn ratings(&self) -> AppResult<RatingLog> {
        Ok(RatingLog::from_ratings(self.store.fetch_ratings().await?))
    }
}
