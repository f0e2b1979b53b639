// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Handicap derivation across a roster.
//!
//! The member with the lowest weekly target gets 1.0; everyone else gets
//! `min_target / own_target`, which deflates their training and bonus
//! points in proportion to how much more they committed to. Recompute
//! whenever the roster changes.

use serde::{Deserialize, Serialize};

use crate::models::RosterMember;

/// Derived handicap for one roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberHandicap {
    pub id: String,
    pub handicap: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandicapError {
    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Member {id} has invalid weekly target {target}")]
    InvalidTarget { id: String, target: f64 },
}

/// Derive every member's handicap, in roster order.
pub fn derive_handicaps(members: &[RosterMember]) -> Result<Vec<MemberHandicap>, HandicapError> {
    if let Some(bad) = members
        .iter()
        .find(|m| !(m.weekly_target_hours.is_finite() && m.weekly_target_hours > 0.0))
    {
        return Err(HandicapError::InvalidTarget {
            id: bad.id.clone(),
            target: bad.weekly_target_hours,
        });
    }

    let min_target = members
        .iter()
        .map(|m| m.weekly_target_hours)
        .reduce(f64::min)
        .ok_or(HandicapError::EmptyRoster)?;

    let handicaps: Vec<MemberHandicap> = members
        .iter()
        .map(|m| MemberHandicap {
            id: m.id.clone(),
            handicap: min_target / m.weekly_target_hours,
        })
        .collect();

    tracing::debug!(members = handicaps.len(), min_target, "Handicaps derived");
    Ok(handicaps)
}
