// ABOUTME: Daily and multi-day meal plan types with nutrition totals
// ABOUTME: PlanBuilder fills meal slots from ranked candidates while avoiding repeats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! # Planning modes
//!
//! A [`DailyPlan`] holds one optional recipe per configured meal slot; a
//! [`MultiDayPlan`] is a run of consecutive daily plans. Plans own cloned
//! recipes so they outlive the store snapshot they were drawn from.
//!
//! Slot selection never repeats a recipe within a day while another
//! candidate exists. With repeat avoidance enabled the same holds across
//! the whole plan; once a slot runs out of unused candidates it falls back
//! to the full candidate list rather than staying empty.

use crate::matching::{pick_biased, RankedRecipes};
use crate::models::{MealType, Nutrition, Recipe};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// One filled (or unfillable) meal slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Slot being filled
    pub meal_type: MealType,
    /// Chosen recipe, `None` when no candidate survived filtering
    pub recipe: Option<Recipe>,
}

/// Meals for one day with summed nutrition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    /// Calendar day
    pub date: NaiveDate,
    /// Meals in slot order
    pub meals: Vec<PlannedMeal>,
    /// Summed macros of the chosen recipes
    pub totals: Nutrition,
    /// Estimated kcal of `totals`
    pub calories: f64,
}

impl DailyPlan {
    /// Build a plan and compute its totals
    #[must_use]
    pub fn new(date: NaiveDate, meals: Vec<PlannedMeal>) -> Self {
        let mut totals = Nutrition::default();
        for recipe in meals.iter().filter_map(|meal| meal.recipe.as_ref()) {
            totals += &recipe.nutrition;
        }
        Self {
            date,
            meals,
            calories: totals.calories(),
            totals,
        }
    }

    /// Chosen recipes in slot order
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.meals.iter().filter_map(|meal| meal.recipe.as_ref())
    }

    /// Slots left without a recipe
    pub fn unfilled(&self) -> impl Iterator<Item = MealType> + '_ {
        self.meals
            .iter()
            .filter(|meal| meal.recipe.is_none())
            .map(|meal| meal.meal_type)
    }
}

/// Consecutive daily plans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiDayPlan {
    /// First day
    pub start: NaiveDate,
    /// One plan per day, starting at `start`
    pub days: Vec<DailyPlan>,
}

impl MultiDayPlan {
    /// Number of planned days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no day is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Macros summed across every day
    #[must_use]
    pub fn totals(&self) -> Nutrition {
        let mut totals = Nutrition::default();
        for day in &self.days {
            totals += &day.totals;
        }
        totals
    }
}

/// Ranked candidates for one meal slot
#[derive(Debug, Clone)]
pub struct SlotCandidates<'a> {
    /// Slot being filled
    pub meal_type: MealType,
    /// Candidates after preference ranking
    pub ranked: RankedRecipes<'a>,
}

/// Stateful slot filler shared by the days of one plan
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    liked_bias: f64,
    avoid_repeats: bool,
    used: HashSet<Uuid>,
}

impl PlanBuilder {
    /// Builder drawing liked recipes with probability `liked_bias`
    #[must_use]
    pub fn new(liked_bias: f64, avoid_repeats: bool) -> Self {
        Self {
            liked_bias,
            avoid_repeats,
            used: HashSet::new(),
        }
    }

    /// Recipe ids already placed in the plan
    #[must_use]
    pub const fn used(&self) -> &HashSet<Uuid> {
        &self.used
    }

    fn pick_slot<'a, R>(
        &self,
        ranked: &RankedRecipes<'a>,
        used_today: &HashSet<Uuid>,
        rng: &mut R,
    ) -> Option<&'a Recipe>
    where
        R: Rng + ?Sized,
    {
        if self.avoid_repeats {
            let excluded: HashSet<Uuid> = self.used.union(used_today).copied().collect();
            let fresh = ranked.without(&excluded);
            if !fresh.is_empty() {
                return pick_biased(&fresh, self.liked_bias, rng);
            }
        }
        let not_today = ranked.without(used_today);
        if !not_today.is_empty() {
            return pick_biased(&not_today, self.liked_bias, rng);
        }
        pick_biased(ranked, self.liked_bias, rng)
    }

    /// Fill every slot for `date`
    pub fn build_day<R>(
        &mut self,
        date: NaiveDate,
        slots: &[SlotCandidates<'_>],
        rng: &mut R,
    ) -> DailyPlan
    where
        R: Rng + ?Sized,
    {
        let mut used_today = HashSet::new();
        let meals = slots
            .iter()
            .map(|slot| {
                let recipe = self.pick_slot(&slot.ranked, &used_today, rng);
                match recipe {
                    Some(recipe) => {
                        used_today.insert(recipe.id);
                    }
                    None => {
                        warn!(
                            %date,
                            meal_type = %slot.meal_type,
                            "No candidate recipe for meal slot"
                        );
                    }
                }
                PlannedMeal {
                    meal_type: slot.meal_type,
                    recipe: recipe.cloned(),
                }
            })
            .collect();
        self.used.extend(used_today);
        DailyPlan::new(date, meals)
    }

    /// Fill `days` consecutive days starting at `start`
    pub fn build_days<R>(
        &mut self,
        start: NaiveDate,
        days: u8,
        slots: &[SlotCandidates<'_>],
        rng: &mut R,
    ) -> MultiDayPlan
    where
        R: Rng + ?Sized,
    {
        let days = start
            .iter_days()
            .take(usize::from(days))
            .map(|date| self.build_day(date, slots, rng))
            .collect();
        MultiDayPlan { start, days }
    }
}
