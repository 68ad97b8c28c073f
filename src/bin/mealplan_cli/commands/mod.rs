// ABOUTME: Command handlers for mealplan-cli and the shared command context
// ABOUTME: Loads the dataset into a planner and writes changes back to disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

pub mod plan;
pub mod profile;
pub mod query;

use mealplan::config::PlannerConfig;
use mealplan::errors::AppResult;
use mealplan::planner::MealPlanner;
use mealplan::store::{Dataset, InMemoryStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Everything a command needs: planner, acting user and RNG
pub struct CliContext {
    /// Planner over the loaded dataset
    pub planner: MealPlanner<InMemoryStore>,
    /// Acting user
    pub user: Uuid,
    /// Seeded or entropy-backed RNG
    pub rng: ChaCha8Rng,
    data_path: PathBuf,
}

impl CliContext {
    /// Load the dataset at `data_path` into an in-memory planner
    pub async fn load(
        data_path: PathBuf,
        config: PlannerConfig,
        user: Uuid,
        seed: Option<u64>,
    ) -> AppResult<Self> {
        let store = Dataset::from_path(&data_path).await?.into_store();
        let rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Ok(Self {
            planner: MealPlanner::new(store, config),
            user,
            rng,
            data_path,
        })
    }

    /// Write the store contents back to the dataset file
    pub async fn persist(&self) -> AppResult<()> {
        let dataset = self.planner.store().snapshot().await;
        dataset.save(&self.data_path).await?;
        info!(path = %self.data_path.display(), "Dataset updated");
        Ok(())
    }
}
