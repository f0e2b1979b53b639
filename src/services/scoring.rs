// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scoring engine.
//!
//! Turns a user's activity history into weekly and season points:
//! 1. Bucket the selected year's activities into Monday-start weeks
//! 2. Score each week (training, bonus, races, golf tournaments)
//! 3. Sum the weeks and deduct lifetime penalties
//!
//! The engine is a pure function of its inputs. Handicap arrives as an
//! opaque per-user number; see [`crate::services::handicap`] for how a
//! roster derives it.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashSet};

use crate::models::{
    Activity, PenaltyTally, ScoreResult, ScoringConfig, WeeklyScore, WorkoutType,
};
use crate::time_utils::week_start_utc;

/// Training points per hour for most sports.
pub const TRAINING_RATE: f64 = 1.0;
/// Training points per hour for golf and skiing.
pub const REDUCED_TRAINING_RATE: f64 = 0.5;
/// Bonus threshold as a multiple of the weekly target.
pub const BONUS_THRESHOLD_FACTOR: f64 = 1.25;
/// Hours past the bonus threshold are worth this much in total.
pub const BONUS_MULTIPLIER: f64 = 1.25;
/// Flat award per race (or per triathlon day).
pub const RACE_POINTS: f64 = 10.0;
/// Flat award per golf tournament.
pub const GOLF_TOURNAMENT_POINTS: f64 = 5.0;

/// Rejected scoring inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Handicap must be a positive number, got {0}")]
    InvalidHandicap(f64),

    #[error("Weekly target hours must be a positive number, got {0}")]
    InvalidTarget(f64),
}

/// Score one user's activities for `config.selected_year`.
pub fn calculate_scores(
    activities: &[Activity],
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoringError> {
    check_handicap(config.handicap)?;
    check_target(config.weekly_target_hours)?;

    let weekly_scores: Vec<WeeklyScore> = bucket_by_week(activities, config.selected_year)
        .into_iter()
        .map(|(week_start, week)| {
            score_week(week_start, &week, config.handicap, config.weekly_target_hours)
        })
        .collect();

    // Penalties are lifetime counts, deducted once from the grand total.
    let penalties = PenaltyTally {
        poptart_count: config.poptart_count,
        wine_glasses: config.wine_glasses,
    };
    let poptart_penalty = penalties.poptart_penalty();
    let wine_penalty = penalties.wine_penalty();

    let weekly_total: f64 = weekly_scores.iter().map(|w| w.total_points).sum();
    let total_score = round_to(weekly_total + poptart_penalty + wine_penalty, 1);

    tracing::debug!(
        year = config.selected_year,
        weeks = weekly_scores.len(),
        total_score,
        "Scores calculated"
    );

    Ok(ScoreResult {
        weekly_scores,
        total_score,
        poptart_penalty,
        wine_penalty,
    })
}

/// Group `year`'s activities by the Monday of their UTC start day.
///
/// Workout type is ignored here; each category filters for itself.
pub fn bucket_by_week(activities: &[Activity], year: i32) -> BTreeMap<NaiveDate, Vec<&Activity>> {
    let mut weeks: BTreeMap<NaiveDate, Vec<&Activity>> = BTreeMap::new();
    for activity in activities
        .iter()
        .filter(|a| a.start_date.year() == year)
    {
        weeks
            .entry(week_start_utc(activity.start_date))
            .or_default()
            .push(activity);
    }
    weeks
}

/// Score a single week's activities.
pub fn score_week(
    week_start: NaiveDate,
    activities: &[&Activity],
    handicap: f64,
    weekly_target_hours: f64,
) -> WeeklyScore {
    let adjusted = adjusted_hours(activities);
    let bonus = bonus_points(adjusted, weekly_target_hours);

    // Handicap scales base and bonus separately, before any rounding.
    let training = adjusted * handicap;
    let bonus = bonus * handicap;
    let races = race_points(activities);
    let golf = golf_tournament_points(activities);

    WeeklyScore {
        week_start,
        training_points: round_to(training, 1),
        bonus_points: round_to(bonus, 2),
        race_points: races,
        golf_tournament_points: golf,
        poptart_penalty: 0.0,
        wine_penalty: 0.0,
        total_points: round_to(training + bonus + races + golf, 1),
    }
}

/// Points per hour for a training activity.
pub fn training_rate(activity: &Activity) -> f64 {
    if activity.is_reduced_rate() {
        REDUCED_TRAINING_RATE
    } else {
        TRAINING_RATE
    }
}

/// Rate-adjusted training hours, before handicap.
pub fn adjusted_hours(activities: &[&Activity]) -> f64 {
    activities
        .iter()
        .filter(|a| a.is_training())
        .map(|a| a.hours() * training_rate(a))
        .sum()
}

/// Premium earned for adjusted hours past the bonus threshold, before
/// handicap.
pub fn bonus_points(adjusted_hours: f64, weekly_target_hours: f64) -> f64 {
    let threshold = weekly_target_hours * BONUS_THRESHOLD_FACTOR;
    if adjusted_hours > threshold {
        (adjusted_hours - threshold) * (BONUS_MULTIPLIER - 1.0)
    } else {
        0.0
    }
}

/// Race points with same-day triathlon merging.
///
/// A local day holding both a Run and a Ride race is one triathlon worth
/// a single award, whatever else was raced that day. Otherwise each race
/// counts on its own.
pub fn race_points(activities: &[&Activity]) -> f64 {
    let mut days: BTreeMap<NaiveDate, Vec<&Activity>> = BTreeMap::new();
    for race in activities
        .iter()
        .copied()
        .filter(|a| a.workout_type == WorkoutType::Race)
    {
        days.entry(race.local_day()).or_default().push(race);
    }

    days.values()
        .map(|races| {
            let sports: HashSet<String> = races.iter().map(|r| r.sport_key()).collect();
            if sports.contains("run") && sports.contains("ride") {
                RACE_POINTS
            } else {
                races.len() as f64 * RACE_POINTS
            }
        })
        .sum()
}

pub fn golf_tournament_points(activities: &[&Activity]) -> f64 {
    activities
        .iter()
        .filter(|a| a.workout_type == WorkoutType::GolfTournament)
        .count() as f64
        * GOLF_TOURNAMENT_POINTS
}

/// Round half away from zero to `decimals` places, normalizing `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub(crate) fn check_handicap(handicap: f64) -> Result<(), ScoringError> {
    if handicap.is_finite() && handicap > 0.0 {
        Ok(())
    } else {
        Err(ScoringError::InvalidHandicap(handicap))
    }
}

pub(crate) fn check_target(weekly_target_hours: f64) -> Result<(), ScoringError> {
    if weekly_target_hours.is_finite() && weekly_target_hours > 0.0 {
        Ok(())
    } else {
        Err(ScoringError::InvalidTarget(weekly_target_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    fn make_activity(
        sport: &str,
        workout_type: WorkoutType,
        seconds: u64,
        start: &str,
        start_local: &str,
    ) -> Activity {
        Activity {
            strava_id: 0,
            name: format!("{} activity", sport),
            sport: sport.to_string(),
            workout_type,
            moving_time_seconds: seconds,
            start_date: start.parse::<DateTime<Utc>>().unwrap(),
            start_date_local: start_local.parse::<NaiveDateTime>().unwrap(),
        }
    }

    fn training(sport: &str, seconds: u64, start: &str) -> Activity {
        let local = start.trim_end_matches('Z');
        make_activity(sport, WorkoutType::Training, seconds, start, local)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_bucket_by_week_filters_year_and_groups_by_monday() {
        let activities = vec![
            training("Run", 3600, "2024-01-15T10:00:00Z"), // Monday
            training("Run", 3600, "2024-01-21T23:00:00Z"), // Sunday, same week
            training("Run", 3600, "2024-01-22T00:30:00Z"), // next Monday
            training("Run", 3600, "2023-12-31T12:00:00Z"), // previous year
        ];

        let weeks = bucket_by_week(&activities, 2024);
        let keys: Vec<NaiveDate> = weeks.keys().copied().collect();
        assert_eq!(keys, vec![date("2024-01-15"), date("2024-01-22")]);
        assert_eq!(weeks[&date("2024-01-15")].len(), 2);
    }

    #[test]
    fn test_first_week_of_year_keyed_by_previous_december_monday() {
        // 2025-01-01 is a Wednesday; its week starts 2024-12-30
        let activities = vec![training("Ride", 3600, "2025-01-01T08:00:00Z")];
        let weeks = bucket_by_week(&activities, 2025);
        assert!(weeks.contains_key(&date("2024-12-30")));
    }

    #[test]
    fn test_reduced_rate_golf() {
        let golf = training("Golf", 7200, "2024-03-05T15:00:00Z");
        let week = vec![&golf];
        assert_eq!(adjusted_hours(&week), 1.0);

        let score = score_week(date("2024-03-04"), &week, 1.0, 7.0);
        assert_eq!(score.training_points, 1.0);
        assert_eq!(score.bonus_points, 0.0);
    }

    #[test]
    fn test_bonus_threshold_math() {
        assert_eq!(bonus_points(14.0, 10.0), 0.375);
        assert_eq!(bonus_points(12.5, 10.0), 0.0);
        assert_eq!(bonus_points(3.0, 10.0), 0.0);
    }

    #[test]
    fn test_bonus_week_rounding() {
        let long = training("Ride", 14 * 3600, "2024-03-05T15:00:00Z");
        let score = score_week(date("2024-03-04"), &[&long], 1.0, 10.0);
        assert_eq!(score.training_points, 14.0);
        assert_eq!(score.bonus_points, 0.38);
        // Total is built from the unrounded bonus: 14.375 -> 14.4
        assert_eq!(score.total_points, 14.4);
    }

    #[test]
    fn test_races_and_tournaments_not_counted_as_training() {
        let race = make_activity(
            "Run",
            WorkoutType::Race,
            3600,
            "2024-03-05T15:00:00Z",
            "2024-03-05T08:00:00",
        );
        let tournament = make_activity(
            "Golf",
            WorkoutType::GolfTournament,
            4 * 3600,
            "2024-03-06T15:00:00Z",
            "2024-03-06T08:00:00",
        );
        let week = vec![&race, &tournament];
        assert_eq!(adjusted_hours(&week), 0.0);

        let score = score_week(date("2024-03-04"), &week, 0.5, 7.0);
        assert_eq!(score.race_points, 10.0);
        assert_eq!(score.golf_tournament_points, 5.0);
        assert_eq!(score.total_points, 15.0);
    }

    #[test]
    fn test_triathlon_merge_uses_local_day() {
        // Both on local 2024-06-01 even though the UTC days differ
        let run = make_activity(
            "Run",
            WorkoutType::Race,
            3600,
            "2024-06-01T16:00:00Z",
            "2024-06-01T09:00:00",
        );
        let ride = make_activity(
            "ride",
            WorkoutType::Race,
            7200,
            "2024-06-02T02:00:00Z",
            "2024-06-01T19:00:00",
        );
        assert_eq!(race_points(&[&run, &ride]), 10.0);
    }

    #[test]
    fn test_run_and_ride_on_different_days_count_separately() {
        let run = make_activity(
            "Run",
            WorkoutType::Race,
            3600,
            "2024-06-01T16:00:00Z",
            "2024-06-01T09:00:00",
        );
        let ride = make_activity(
            "Ride",
            WorkoutType::Race,
            3600,
            "2024-06-02T16:00:00Z",
            "2024-06-02T09:00:00",
        );
        assert_eq!(race_points(&[&run, &ride]), 20.0);
    }

    #[test]
    fn test_same_day_non_triathlon_races() {
        let a = make_activity(
            "Run",
            WorkoutType::Race,
            1800,
            "2024-06-01T16:00:00Z",
            "2024-06-01T09:00:00",
        );
        let b = make_activity(
            "Run",
            WorkoutType::Race,
            1800,
            "2024-06-01T20:00:00Z",
            "2024-06-01T13:00:00",
        );
        assert_eq!(race_points(&[&a, &b]), 20.0);
    }

    #[test]
    fn test_triathlon_swim_leg_absorbed() {
        let legs: Vec<Activity> = ["Swim", "Ride", "Run"]
            .iter()
            .map(|sport| {
                make_activity(
                    sport,
                    WorkoutType::Race,
                    3600,
                    "2024-06-01T16:00:00Z",
                    "2024-06-01T09:00:00",
                )
            })
            .collect();
        let refs: Vec<&Activity> = legs.iter().collect();
        assert_eq!(race_points(&refs), 10.0);
    }

    #[test]
    fn test_handicap_scales_training_and_bonus_only() {
        let long = training("Run", 14 * 3600, "2024-03-05T15:00:00Z");
        let race = make_activity(
            "Run",
            WorkoutType::Race,
            3600,
            "2024-03-09T15:00:00Z",
            "2024-03-09T08:00:00",
        );
        let week = vec![&long, &race];

        let full = score_week(date("2024-03-04"), &week, 1.0, 10.0);
        let half = score_week(date("2024-03-04"), &week, 0.5, 10.0);

        assert_eq!(full.training_points, 14.0);
        assert_eq!(half.training_points, 7.0);
        assert_eq!(half.bonus_points, 0.19); // 0.1875
        assert_eq!(half.race_points, full.race_points);
    }

    #[test]
    fn test_weekly_penalties_always_zero() {
        let run = training("Run", 3600, "2024-03-05T15:00:00Z");
        let config = ScoringConfig::new(5.0, 2024).with_penalties(4, 4);
        let result = calculate_scores(&[run], &config).unwrap();
        assert_eq!(result.weekly_scores[0].poptart_penalty, 0.0);
        assert_eq!(result.weekly_scores[0].wine_penalty, 0.0);
        assert_eq!(result.poptart_penalty, -2.0);
        assert_eq!(result.wine_penalty, -1.0);
        assert_eq!(result.total_score, -2.0);
    }

    #[test]
    fn test_empty_input_has_zero_total() {
        let result = calculate_scores(&[], &ScoringConfig::new(7.0, 2024)).unwrap();
        assert!(result.weekly_scores.is_empty());
        assert_eq!(result.total_score, 0.0);
        assert!(result.total_score.is_sign_positive());
        assert!(result.poptart_penalty.is_sign_positive());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let config = ScoringConfig::new(0.0, 2024);
        assert_eq!(
            calculate_scores(&[], &config),
            Err(ScoringError::InvalidTarget(0.0))
        );

        let config = ScoringConfig::new(7.0, 2024).with_handicap(0.0);
        assert_eq!(
            calculate_scores(&[], &config),
            Err(ScoringError::InvalidHandicap(0.0))
        );

        let config = ScoringConfig::new(f64::NAN, 2024);
        assert!(matches!(
            calculate_scores(&[], &config),
            Err(ScoringError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(14.375, 1), 14.4);
        assert_eq!(round_to(-0.04, 1), 0.0);
        assert!(round_to(-0.04, 1).is_sign_positive());
    }

    #[test]
    fn test_round_to_scales_before_rounding() {
        // 540 s is 0.15 h, stored just below the tie
        assert_eq!(round_to(540.0 / 3600.0, 1), 0.2);
    }
}
