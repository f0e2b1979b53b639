// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster routes.

use crate::error::Result;
use crate::models::RosterMember;
use crate::services::{derive_handicaps, MemberHandicap};
use crate::AppState;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/handicaps", post(get_handicaps))
}

#[derive(Debug, Deserialize, Validate)]
pub struct HandicapRequest {
    #[validate(nested)]
    pub members: Vec<RosterMember>,
}

#[derive(Debug, Serialize)]
pub struct HandicapResponse {
    pub handicaps: Vec<MemberHandicap>,
}

/// Derive handicaps for the posted roster.
async fn get_handicaps(Json(req): Json<HandicapRequest>) -> Result<Json<HandicapResponse>> {
    req.validate()?;
    let handicaps = derive_handicaps(&req.members)?;
    Ok(Json(HandicapResponse { handicaps }))
}
