// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Derived views over scoring results: season breakdown, cumulative
//! series and current-week progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Training hours and points for one sport over a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SportBreakdown {
    pub sport: String,
    pub hours: f64,
    pub rate: f64,
    pub points: f64,
}

/// Season totals shown on a member's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeasonSummary {
    /// Sorted by hours, most first
    pub sport_breakdown: Vec<SportBreakdown>,
    pub total_training_hours: f64,
    pub training_points: f64,
    pub bonus_points: f64,
    pub weeks_with_bonus: u32,
    pub competition_points: f64,
    pub race_points: f64,
    pub golf_tournament_points: f64,
    pub race_count: u32,
    pub golf_tournament_count: u32,
    pub poptart_penalty: f64,
    pub wine_penalty: f64,
    pub total_score: f64,
}

/// Running total at the end of one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CumulativePoint {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub week_start: NaiveDate,
    /// Short axis label, e.g. "Jan 1"
    pub label: String,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProgressStatus {
    Success,
    Warning,
    Info,
}

/// Training done on one day of the current week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayProgress {
    pub hours: f64,
    pub adjusted_hours: f64,
    pub count: u32,
    pub names: Vec<String>,
}

/// Progress toward this week's target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyProgress {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub week_start: NaiveDate,
    /// 0 = Monday, 6 = Sunday
    pub current_day_index: u32,
    /// Always seven entries, Monday first
    pub days: Vec<DayProgress>,
    /// Running adjusted hours through today (2 dp)
    pub cumulative_adjusted: Vec<f64>,
    /// Running raw hours through today (2 dp)
    pub cumulative_raw: Vec<f64>,
    pub total_adjusted_hours: f64,
    pub total_raw_hours: f64,
    pub total_workouts: u32,
    pub hours_remaining: f64,
    pub progress_percent: f64,
    pub status: ProgressStatus,
    pub status_message: String,
}
