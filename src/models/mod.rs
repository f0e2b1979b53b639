// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod penalty;
pub mod score;
pub mod summary;
pub mod user;

pub use activity::{Activity, StravaActivity, WorkoutType};
pub use penalty::{PenaltyEvent, PenaltyTally, PenaltyType};
pub use score::{ScoreResult, WeeklyScore};
pub use summary::{
    CumulativePoint, DayProgress, ProgressStatus, SeasonSummary, SportBreakdown, WeeklyProgress,
};
pub use user::{RosterMember, ScoringConfig};
