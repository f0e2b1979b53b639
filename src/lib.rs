// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Family Fitness: turn synced activities into a weekly competition.
//!
//! This crate provides the scoring engine (weekly training, bonus, race
//! and tournament points plus lifetime penalties), handicap derivation
//! across a family roster, and a small stateless JSON API over both.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
