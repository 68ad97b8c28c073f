// ABOUTME: Random recipe selection over filtered candidate lists
// ABOUTME: Uniform pick plus a liked-biased pick over ranked partitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use crate::filter::RankedRecipes;
use mealplan_core::models::Recipe;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random element of `recipes`, `None` when empty
///
/// A single-element slice always yields that element.
pub fn pick_random<'a, R>(recipes: &[&'a Recipe], rng: &mut R) -> Option<&'a Recipe>
where
    R: Rng + ?Sized,
{
    recipes.choose(rng).copied()
}

/// Pick from the liked partition with probability `liked_bias`
///
/// Falls back to whichever partition is non-empty; `liked_bias` is clamped
/// to `0.0..=1.0`.
pub fn pick_biased<'a, R>(
    ranked: &RankedRecipes<'a>,
    liked_bias: f64,
    rng: &mut R,
) -> Option<&'a Recipe>
where
    R: Rng + ?Sized,
{
    match (ranked.liked.is_empty(), ranked.neutral.is_empty()) {
        (true, true) => None,
        (false, true) => pick_random(&ranked.liked, rng),
        (true, false) => pick_random(&ranked.neutral, rng),
        (false, false) => {
            let bias = if liked_bias.is_nan() {
                0.0
            } else {
                liked_bias.clamp(0.0, 1.0)
            };
            if rng.gen_bool(bias) {
                pick_random(&ranked.liked, rng)
            } else {
                pick_random(&ranked.neutral, rng)
            }
        }
    }
}
