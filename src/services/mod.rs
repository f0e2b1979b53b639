// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod handicap;
pub mod scoring;
pub mod summary;

pub use handicap::{derive_handicaps, HandicapError, MemberHandicap};
pub use scoring::{calculate_scores, ScoringError};
pub use summary::{cumulative_series, season_summary, weekly_progress};
