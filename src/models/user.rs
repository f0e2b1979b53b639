// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-user scoring inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Numeric configuration for scoring one user.
///
/// Identity and display metadata deliberately stay out of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScoringConfig {
    /// Multiplier applied to training and bonus points (1.0 = none)
    #[validate(range(exclusive_min = 0.0))]
    pub handicap: f64,
    /// Base weekly goal in hours
    #[validate(range(exclusive_min = 0.0))]
    pub weekly_target_hours: f64,
    /// Calendar year to score
    #[validate(range(min = 1900, max = 9999))]
    pub selected_year: i32,
    /// Lifetime poptart count
    #[serde(default)]
    pub poptart_count: u32,
    /// Lifetime wine glass count
    #[serde(default)]
    pub wine_glasses: u32,
}

impl ScoringConfig {
    /// Config with no handicap and no penalties.
    pub fn new(weekly_target_hours: f64, selected_year: i32) -> Self {
        Self {
            handicap: 1.0,
            weekly_target_hours,
            selected_year,
            poptart_count: 0,
            wine_glasses: 0,
        }
    }

    pub fn with_handicap(mut self, handicap: f64) -> Self {
        self.handicap = handicap;
        self
    }

    pub fn with_penalties(mut self, poptart_count: u32, wine_glasses: u32) -> Self {
        self.poptart_count = poptart_count;
        self.wine_glasses = wine_glasses;
        self
    }
}

/// A roster entry used to derive handicaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RosterMember {
    #[validate(length(min = 1, max = 100))]
    pub id: String,
    #[validate(range(exclusive_min = 0.0))]
    pub weekly_target_hours: f64,
}
