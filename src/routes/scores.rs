// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scoring routes.
//!
//! Every call is stateless: the caller posts the full activity list and
//! the user's numeric config, and gets freshly computed results back.

use crate::error::Result;
use crate::models::{
    Activity, CumulativePoint, ScoreResult, ScoringConfig, SeasonSummary, WeeklyProgress,
};
use crate::routes::check_activity_count;
use crate::services::{calculate_scores, cumulative_series, season_summary, weekly_progress};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/scores", post(get_scores))
        .route("/api/scores/summary", post(get_summary))
        .route("/api/scores/cumulative", post(get_cumulative))
        .route("/api/progress", post(get_progress))
}

// ─── Scores ──────────────────────────────────────────────────

/// Activities plus the numeric config to score them with.
#[derive(Debug, Deserialize, Validate)]
pub struct ScoreRequest {
    pub activities: Vec<Activity>,
    #[validate(nested)]
    pub config: ScoringConfig,
}

impl ScoreRequest {
    fn check(&self, state: &AppState) -> Result<()> {
        check_activity_count(state, self.activities.len())?;
        self.validate()?;
        Ok(())
    }
}

async fn get_scores(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>> {
    req.check(&state)?;
    let result = calculate_scores(&req.activities, &req.config)?;
    Ok(Json(result))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<SeasonSummary>> {
    req.check(&state)?;
    let scores = calculate_scores(&req.activities, &req.config)?;
    Ok(Json(season_summary(&req.activities, &req.config, &scores)))
}

// ─── Cumulative Series ───────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CumulativeRequest {
    pub activities: Vec<Activity>,
    pub config: ScoringConfig,
    /// Last day to include (defaults to today, UTC)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct CumulativeResponse {
    pub points: Vec<CumulativePoint>,
}

async fn get_cumulative(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CumulativeRequest>,
) -> Result<Json<CumulativeResponse>> {
    check_activity_count(&state, req.activities.len())?;
    req.config.validate()?;

    let scores = calculate_scores(&req.activities, &req.config)?;
    let as_of = req.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let points = cumulative_series(&scores, req.config.selected_year, as_of);
    Ok(Json(CumulativeResponse { points }))
}

// ─── Weekly Progress ─────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct ProgressRequest {
    pub activities: Vec<Activity>,
    #[validate(range(exclusive_min = 0.0))]
    pub weekly_target_hours: f64,
    /// Reference instant (defaults to the current time)
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

async fn get_progress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<WeeklyProgress>> {
    check_activity_count(&state, req.activities.len())?;
    req.validate()?;

    let now = req.now.unwrap_or_else(Utc::now);
    let progress = weekly_progress(&req.activities, req.weekly_target_hours, now)?;
    Ok(Json(progress))
}
