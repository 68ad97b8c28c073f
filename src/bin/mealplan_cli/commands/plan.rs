// ABOUTME: Plan generation commands for mealplan-cli
// ABOUTME: Daily and multi-day plans starting today unless a date is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use super::CliContext;
use crate::helpers::output::print_json;
use chrono::{Local, NaiveDate};
use mealplan::errors::AppResult;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print a daily plan
pub async fn day(ctx: &mut CliContext, date: Option<NaiveDate>) -> AppResult<()> {
    let date = date.unwrap_or_else(today);
    let plan = ctx.planner.daily_plan(ctx.user, date, &mut ctx.rng).await?;
    print_json(&plan)
}

/// Print a multi-day plan
pub async fn multi_day(
    ctx: &mut CliContext,
    start: Option<NaiveDate>,
    days: Option<u8>,
) -> AppResult<()> {
    let start = start.unwrap_or_else(today);
    let plan = ctx
        .planner
        .multi_day_plan(ctx.user, start, days, &mut ctx.rng)
        .await?;
    print_json(&plan)
}
