// ABOUTME: Criterion benchmarks for the recipe matching pipeline
// ABOUTME: Measures normalization, preference ranking and plan assembly over synthetic catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Criterion benchmarks for the matching pipeline.
//!
//! Catalog sizes mirror a small personal collection up to a large shared one.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealplan::matching::{
    by_meal_type, filter_and_rank, normalize, rank_partition, PreferenceProfile,
};
use mealplan::models::{IngredientPreference, MealType, Preference, Recipe};
use mealplan::planning::{PlanBuilder, SlotCandidates};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

const INGREDIENTS: [&str; 12] = [
    "tojás", "liszt", "tej", "paprika", "hagyma", "burgonya", "csirkemell", "sertéskaraj",
    "tejföl", "túró", "paradicsom", "zabpehely",
];

const TAGS: [&str; 4] = ["reggeli", "ebéd", "vacsora", "uzsonna"];

fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let ingredients =
                (0..4).map(|offset| INGREDIENTS[(index * 5 + offset * 3) % INGREDIENTS.len()]);
            Recipe::new(format!("Recept {index}"))
                .with_ingredients(ingredients)
                .with_meal_type(TAGS[index % TAGS.len()])
        })
        .collect()
}

fn profile() -> PreferenceProfile {
    let user = Uuid::new_v4();
    PreferenceProfile::from_records(
        &[
            IngredientPreference::new(user, "Pékáru", "liszt", Preference::Dislike),
            IngredientPreference::new(user, "Hús", "csirkemell", Preference::Like),
            IngredientPreference::new(user, "Tejtermék", "túró", Preference::Like),
        ],
        &[],
    )
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_accented", |b| {
        b.iter(|| normalize(black_box("  Füstölt Sertéskaraj, Csirkemáj ")));
    });
}

fn bench_filter_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_rank");
    let profile = profile();
    for size in [100_usize, 1_000, 10_000] {
        let recipes = generate_recipes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| filter_and_rank(black_box(recipes), &profile));
        });
    }
    group.finish();
}

fn bench_week_plan(c: &mut Criterion) {
    let recipes = generate_recipes(1_000);
    let profile = profile();
    let slots: Vec<SlotCandidates<'_>> = [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        .into_iter()
        .map(|meal_type| SlotCandidates {
            meal_type,
            ranked: rank_partition(by_meal_type(&recipes, meal_type.tag()), &profile),
        })
        .collect();
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();

    c.bench_function("week_plan_1000_recipes", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| PlanBuilder::new(0.7, true).build_days(start, 7, black_box(&slots), &mut rng));
    });
}

criterion_group!(benches, bench_normalize, bench_filter_and_rank, bench_week_plan);
criterion_main!(benches);
