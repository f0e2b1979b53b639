// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Manually logged penalty events and their per-user tally.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::services::scoring::round_to;

/// Message returned when a penalty is logged on Friday or Saturday.
pub const WEEKEND_PENALTY_MESSAGE: &str = "Balance is key -- enjoy your treat!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyType {
    /// Includes a small bag of chips
    Poptart,
    /// Per glass
    Wine,
}

impl PenaltyType {
    /// Points deducted per unit.
    pub fn points_per_unit(self) -> f64 {
        match self {
            PenaltyType::Poptart => -0.5,
            PenaltyType::Wine => -0.25,
        }
    }
}

/// A single logged penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PenaltyEvent {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    pub penalty_type: PenaltyType,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 10, message = "Quantity must be between 1 and 10"))]
    pub quantity: u32,
    #[validate(custom(function = "validate_penalty_day"))]
    pub penalty_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_by_user_id: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Penalties only count Sunday through Thursday.
fn validate_penalty_day(date: &NaiveDate) -> Result<(), ValidationError> {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat => Err(ValidationError::new("weekend_penalty")
            .with_message(Cow::Borrowed(WEEKEND_PENALTY_MESSAGE))),
        _ => Ok(()),
    }
}

/// Lifetime penalty counts for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTally {
    pub poptart_count: u32,
    pub wine_glasses: u32,
}

impl PenaltyTally {
    /// Sum quantities of `user_id`'s events by type, saturating at `u32::MAX`.
    pub fn for_user(events: &[PenaltyEvent], user_id: &str) -> Self {
        events
            .iter()
            .filter(|e| e.user_id == user_id)
            .fold(Self::default(), |mut tally, event| {
                match event.penalty_type {
                    PenaltyType::Poptart => {
                        tally.poptart_count = tally.poptart_count.saturating_add(event.quantity)
                    }
                    PenaltyType::Wine => {
                        tally.wine_glasses = tally.wine_glasses.saturating_add(event.quantity)
                    }
                }
                tally
            })
    }

    pub fn poptart_penalty(&self) -> f64 {
        round_to(
            f64::from(self.poptart_count) * PenaltyType::Poptart.points_per_unit(),
            2,
        )
    }

    pub fn wine_penalty(&self) -> f64 {
        round_to(
            f64::from(self.wine_glasses) * PenaltyType::Wine.points_per_unit(),
            2,
        )
    }
}
