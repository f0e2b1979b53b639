// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model consumed by the scoring engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::time_utils::local_datetime;

/// Sports (lowercased) that earn the reduced training rate.
pub const REDUCED_RATE_SPORTS: [&str; 3] = ["golf", "alpineski", "backcountryski"];

/// Provider workout codes that mark a race (1 = run race, 11 = ride race).
const PROVIDER_RACE_CODES: [i64; 2] = [1, 11];

/// How an activity counts toward the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    #[default]
    Training,
    Race,
    GolfTournament,
}

impl WorkoutType {
    /// Classify a provider's numeric workout code.
    ///
    /// Only the two race codes are recognized; anything else (including a
    /// missing code) is training. Golf tournaments are tagged manually.
    pub fn from_provider_code(code: Option<i64>) -> Self {
        match code {
            Some(c) if PROVIDER_RACE_CODES.contains(&c) => WorkoutType::Race,
            _ => WorkoutType::Training,
        }
    }
}

/// A single recorded activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Provider activity ID
    #[serde(default)]
    pub strava_id: u64,
    /// Activity name/title
    #[serde(default)]
    pub name: String,
    /// Sport discipline (Run, Ride, Golf, ...)
    #[serde(rename = "type")]
    pub sport: String,
    /// Missing or null means training
    #[serde(default, deserialize_with = "deserialize_workout_type")]
    pub workout_type: WorkoutType,
    /// Time actually spent moving
    pub moving_time_seconds: u64,
    /// Start instant (UTC)
    pub start_date: DateTime<Utc>,
    /// Start wall-clock time in the activity's own timezone
    #[serde(with = "local_datetime")]
    pub start_date_local: NaiveDateTime,
}

impl Activity {
    /// Moving time in hours.
    pub fn hours(&self) -> f64 {
        self.moving_time_seconds as f64 / 3600.0
    }

    /// Whether this sport earns the reduced training rate.
    pub fn is_reduced_rate(&self) -> bool {
        let sport = self.sport.to_lowercase();
        REDUCED_RATE_SPORTS.contains(&sport.as_str())
    }

    pub fn is_training(&self) -> bool {
        self.workout_type == WorkoutType::Training
    }

    /// Calendar day in the activity's local timezone.
    pub fn local_day(&self) -> NaiveDate {
        self.start_date_local.date()
    }

    /// Sport lowercased for case-insensitive comparisons.
    pub fn sport_key(&self) -> String {
        self.sport.to_lowercase()
    }
}

fn deserialize_workout_type<'de, D>(deserializer: D) -> Result<WorkoutType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WorkoutType>::deserialize(deserializer)?.unwrap_or_default())
}

/// Activity as returned by the Strava activities API.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivity {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    pub sport_type: String,
    pub start_date: DateTime<Utc>,
    #[serde(with = "local_datetime")]
    pub start_date_local: NaiveDateTime,
    pub moving_time: u64,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default)]
    pub workout_type: Option<i64>,
}

impl From<StravaActivity> for Activity {
    fn from(provider: StravaActivity) -> Self {
        let workout_type = WorkoutType::from_provider_code(provider.workout_type);
        let sport = provider
            .activity_type
            .filter(|t| !t.is_empty())
            .unwrap_or(provider.sport_type);

        Activity {
            strava_id: provider.id,
            name: provider.name,
            sport,
            workout_type,
            moving_time_seconds: provider.moving_time,
            start_date: provider.start_date,
            start_date_local: provider.start_date_local,
        }
    }
}
