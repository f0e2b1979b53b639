// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Score records produced by the scoring engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Points earned in one Monday-start week.
///
/// Penalties are never week-scoped, so `poptart_penalty` and
/// `wine_penalty` are always zero here; they only appear on
/// [`ScoreResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyScore {
    /// Monday of the week
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub week_start: NaiveDate,
    /// Rate-adjusted training hours times handicap (1 dp)
    pub training_points: f64,
    /// Premium for hours past the bonus threshold, times handicap (2 dp)
    pub bonus_points: f64,
    pub race_points: f64,
    pub golf_tournament_points: f64,
    pub poptart_penalty: f64,
    pub wine_penalty: f64,
    /// Sum of the unrounded components (1 dp)
    pub total_points: f64,
}

/// Full scoring result for one user and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScoreResult {
    /// Ascending by `week_start`
    pub weekly_scores: Vec<WeeklyScore>,
    pub total_score: f64,
    pub poptart_penalty: f64,
    pub wine_penalty: f64,
}
