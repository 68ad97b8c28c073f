// ABOUTME: mealplan CLI - query recipes and generate meal plans from a JSON dataset
// ABOUTME: Parses arguments, loads the dataset and dispatches to command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors
//!
//! Usage:
//! ```bash
//! # Random recipe the user does not dislike
//! mealplan-cli --data recipes.json --user <uuid> random
//!
//! # Breakfast recipes, liked ones first
//! mealplan-cli --data recipes.json --user <uuid> meal-type reggeli
//!
//! # Recipes using any vegetable, restricted to dinner
//! mealplan-cli --data recipes.json category Zöldség --meal-type vacsora
//!
//! # Vegetables the user does not dislike
//! mealplan-cli --data recipes.json --user <uuid> ingredients Zöldség
//!
//! # Today's plan and a reproducible 5-day plan
//! mealplan-cli --data recipes.json --user <uuid> day
//! mealplan-cli --data recipes.json --user <uuid> --seed 42 plan --days 5
//!
//! # Rate a recipe and record a preference (both persist to the dataset)
//! mealplan-cli --data recipes.json --user <uuid> rate Lecsó 5
//! mealplan-cli --data recipes.json --user <uuid> prefer Zöldség hagyma dislike
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mealplan::config::PlannerConfig;
use mealplan::errors::{AppError, AppResult};
use mealplan::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

use commands::CliContext;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Preference-aware recipe queries and meal plans",
    long_about = "Filters a JSON recipe dataset by a user's ingredient preferences and builds \
                  daily or multi-day meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset file (defaults to `MEALPLAN_DATA_PATH`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// User whose preferences apply (the nil user has none)
    #[arg(long, global = true, default_value_t = Uuid::nil())]
    user: Uuid,

    /// Seed for reproducible random picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Pick one random recipe
    Random,

    /// Recipes for a meal type tag
    MealType {
        /// Backend tag such as reggeli, ebéd, vacsora, or an English name such as lunch
        meal_type: String,
    },

    /// Recipes using an ingredient category
    Category {
        /// Category name
        name: String,

        /// Match only this ingredient of the category
        #[arg(long)]
        ingredient: Option<String>,

        /// Restrict to a meal type tag or English name
        #[arg(long)]
        meal_type: Option<String>,
    },

    /// A category's ingredients without disliked ones
    Ingredients {
        /// Category name
        category: String,
    },

    /// One recipe per meal slot
    Day {
        /// Plan date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Consecutive daily plans
    Plan {
        /// Number of days (defaults to `MEALPLAN_DEFAULT_DAYS`)
        #[arg(long)]
        days: Option<u8>,

        /// First day (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Rate a recipe with 1-5 stars
    Rate {
        /// Recipe name
        recipe: String,

        /// Stars, 1-5
        stars: u8,
    },

    /// Show the best rated recipes
    Top {
        /// How many recipes to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Record a like, dislike or neutral preference
    Prefer {
        /// Ingredient category
        category: String,

        /// Ingredient name
        ingredient: String,

        /// like, dislike or neutral
        preference: String,
    },

    /// Manage favorite ingredients
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoriteCommand {
    /// Mark an ingredient as favorite
    Add {
        /// Ingredient category
        category: String,

        /// Ingredient name
        ingredient: String,
    },

    /// Unmark a favorite ingredient
    Remove {
        /// Ingredient category
        category: String,

        /// Ingredient name
        ingredient: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let config = PlannerConfig::from_env()?;
    let data_path = cli
        .data
        .or_else(|| config.data_path.clone())
        .ok_or_else(|| {
            AppError::config("no dataset given: pass --data or set MEALPLAN_DATA_PATH")
        })?;
    debug!(path = %data_path.display(), user = %cli.user, "Starting mealplan-cli");

    let mut ctx = CliContext::load(data_path, config, cli.user, cli.seed).await?;

    match cli.command {
        Command::Random => commands::query::random(&mut ctx).await?,
        Command::MealType { meal_type } => commands::query::meal_type(&ctx, &meal_type).await?,
        Command::Category {
            name,
            ingredient,
            meal_type,
        } => {
            commands::query::category(&ctx, &name, ingredient.as_deref(), meal_type.as_deref())
                .await?;
        }
        Command::Ingredients { category } => {
            commands::query::ingredients(&ctx, &category).await?;
        }
        Command::Day { date } => commands::plan::day(&mut ctx, date).await?,
        Command::Plan { days, start } => commands::plan::multi_day(&mut ctx, start, days).await?,
        Command::Rate { recipe, stars } => commands::profile::rate(&ctx, &recipe, stars).await?,
        Command::Top { limit } => commands::profile::top(&ctx, limit).await?,
        Command::Prefer {
            category,
            ingredient,
            preference,
        } => {
            commands::profile::prefer(&ctx, &category, &ingredient, &preference).await?;
        }
        Command::Favorite { action } => match action {
            FavoriteCommand::Add {
                category,
                ingredient,
            } => commands::profile::favorite_add(&ctx, &category, &ingredient).await?,
            FavoriteCommand::Remove {
                category,
                ingredient,
            } => commands::profile::favorite_remove(&ctx, &category, &ingredient).await?,
        },
    }

    Ok(())
}
