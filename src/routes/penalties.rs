// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Penalty routes.
//!
//! Storage of penalty events belongs to the caller; these routes only
//! check a single event before it is stored and tally stored events into
//! the counts the scoring engine consumes.

use crate::error::Result;
use crate::models::{PenaltyEvent, PenaltyTally};
use crate::AppState;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/penalties/validate", post(validate_penalty))
        .route("/api/penalties/tally", post(tally_penalties))
}

/// Accept a penalty event if it may be logged.
async fn validate_penalty(Json(event): Json<PenaltyEvent>) -> Result<Json<PenaltyEvent>> {
    event.validate()?;
    tracing::info!(
        user_id = %event.user_id,
        penalty_type = ?event.penalty_type,
        quantity = event.quantity,
        "Penalty accepted"
    );
    Ok(Json(event))
}

#[derive(Debug, Deserialize)]
pub struct TallyRequest {
    pub user_id: String,
    pub events: Vec<PenaltyEvent>,
}

#[derive(Debug, Serialize)]
pub struct TallyResponse {
    pub poptart_count: u32,
    pub wine_glasses: u32,
    pub poptart_penalty: f64,
    pub wine_penalty: f64,
}

/// Tally stored events for one user. Every event must still be loggable.
async fn tally_penalties(Json(req): Json<TallyRequest>) -> Result<Json<TallyResponse>> {
    for event in &req.events {
        event.validate()?;
    }

    let tally = PenaltyTally::for_user(&req.events, &req.user_id);
    Ok(Json(TallyResponse {
        poptart_count: tally.poptart_count,
        wine_glasses: tally.wine_glasses,
        poptart_penalty: tally.poptart_penalty(),
        wine_penalty: tally.wine_penalty(),
    }))
}
