// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Views derived from scoring results for the dashboard cards and charts.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::models::{
    Activity, CumulativePoint, DayProgress, ProgressStatus, ScoreResult, ScoringConfig,
    SeasonSummary, SportBreakdown, WeeklyProgress,
};
use crate::services::scoring::{
    check_target, round_to, training_rate, ScoringError, BONUS_THRESHOLD_FACTOR,
    GOLF_TOURNAMENT_POINTS, RACE_POINTS,
};
use crate::time_utils::{format_hours, week_start, week_start_utc};

/// Season breakdown for one user, built on an already computed result.
pub fn season_summary(
    activities: &[Activity],
    config: &ScoringConfig,
    scores: &ScoreResult,
) -> SeasonSummary {
    // sport -> (hours, rate)
    let mut by_sport: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for activity in activities
        .iter()
        .filter(|a| a.start_date.year() == config.selected_year && a.is_training())
    {
        let entry = by_sport
            .entry(activity.sport.as_str())
            .or_insert((0.0, training_rate(activity)));
        entry.0 += activity.hours();
    }

    let mut sport_breakdown: Vec<SportBreakdown> = by_sport
        .into_iter()
        .map(|(sport, (hours, rate))| SportBreakdown {
            sport: sport.to_string(),
            hours: round_to(hours, 1),
            rate,
            points: round_to(hours * rate * config.handicap, 1),
        })
        .collect();
    sport_breakdown.sort_by(|a, b| b.hours.total_cmp(&a.hours));

    let weeks = &scores.weekly_scores;
    let total_training_hours: f64 = sport_breakdown.iter().map(|s| s.hours).sum();
    let training_points: f64 = weeks.iter().map(|w| w.training_points).sum();
    let bonus_points: f64 = weeks.iter().map(|w| w.bonus_points).sum();
    let race_points: f64 = weeks.iter().map(|w| w.race_points).sum();
    let golf_tournament_points: f64 = weeks.iter().map(|w| w.golf_tournament_points).sum();

    SeasonSummary {
        sport_breakdown,
        total_training_hours: round_to(total_training_hours, 1),
        training_points: round_to(training_points, 1),
        bonus_points: round_to(bonus_points, 2),
        weeks_with_bonus: weeks.iter().filter(|w| w.bonus_points > 0.0).count() as u32,
        competition_points: race_points + golf_tournament_points,
        race_points,
        golf_tournament_points,
        race_count: (race_points / RACE_POINTS).round() as u32,
        golf_tournament_count: (golf_tournament_points / GOLF_TOURNAMENT_POINTS).round() as u32,
        poptart_penalty: scores.poptart_penalty,
        wine_penalty: scores.wine_penalty,
        total_score: scores.total_score,
    }
}

/// Running season total at every week of `year` up to `as_of`.
///
/// Covers each Monday-start week from the one holding January 1 through
/// the one holding the earlier of December 31 and `as_of`. Week totals
/// already include the handicap, so it is not applied again here.
pub fn cumulative_series(scores: &ScoreResult, year: i32, as_of: NaiveDate) -> Vec<CumulativePoint> {
    let (Some(year_start), Some(year_end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };
    let end = as_of.min(year_end);
    if end < year_start {
        return Vec::new();
    }

    let totals: BTreeMap<NaiveDate, f64> = scores
        .weekly_scores
        .iter()
        .map(|w| (w.week_start, w.total_points))
        .collect();

    let last_week = week_start(end);
    let mut week = week_start(year_start);
    let mut cumulative = 0.0;
    let mut points = Vec::new();
    while week <= last_week {
        cumulative += totals.get(&week).copied().unwrap_or(0.0);
        points.push(CumulativePoint {
            week_start: week,
            label: week.format("%b %-d").to_string(),
            points: round_to(cumulative, 1),
        });
        match week.checked_add_days(Days::new(7)) {
            Some(next) => week = next,
            None => break,
        }
    }
    points
}

/// Progress toward the weekly target for the week containing `now`,
/// counting only activities from `now`'s year.
pub fn weekly_progress(
    activities: &[Activity],
    weekly_target_hours: f64,
    now: DateTime<Utc>,
) -> Result<WeeklyProgress, ScoringError> {
    check_target(weekly_target_hours)?;

    let current_week = week_start_utc(now);
    let current_day_index = now.weekday().num_days_from_monday();

    // Only this year's activities count, so New Year's week starts fresh.
    let mut days = vec![DayProgress::default(); 7];
    for activity in activities.iter().filter(|a| {
        a.is_training()
            && a.start_date.year() == now.year()
            && week_start_utc(a.start_date) == current_week
    }) {
        let day = &mut days[activity.start_date_local.weekday().num_days_from_monday() as usize];
        let hours = activity.hours();
        day.hours += hours;
        day.adjusted_hours += hours * training_rate(activity);
        day.count += 1;
        day.names.push(activity.name.clone());
    }

    let mut cumulative_adjusted = Vec::new();
    let mut cumulative_raw = Vec::new();
    let (mut adjusted_so_far, mut raw_so_far) = (0.0, 0.0);
    for day in days.iter().take(current_day_index as usize + 1) {
        adjusted_so_far += day.adjusted_hours;
        raw_so_far += day.hours;
        cumulative_adjusted.push(round_to(adjusted_so_far, 2));
        cumulative_raw.push(round_to(raw_so_far, 2));
    }

    let total_adjusted_hours: f64 = days.iter().map(|d| d.adjusted_hours).sum();
    let total_raw_hours: f64 = days.iter().map(|d| d.hours).sum();
    let total_workouts = days.iter().map(|d| d.count).sum();

    let hours_remaining = (weekly_target_hours - total_adjusted_hours).max(0.0);
    let days_remaining = 6 - current_day_index;
    let progress_percent = (total_adjusted_hours / weekly_target_hours * 100.0).min(100.0);

    let (status, status_message) =
        if total_adjusted_hours >= weekly_target_hours * BONUS_THRESHOLD_FACTOR {
            (
                ProgressStatus::Success,
                "You're crushing it! 25% bonus earned!".to_string(),
            )
        } else if total_adjusted_hours >= weekly_target_hours {
            (
                ProgressStatus::Success,
                "Goal reached! Keep going for the 25% bonus.".to_string(),
            )
        } else if days_remaining == 0 {
            (
                ProgressStatus::Warning,
                format!("{} to go today to hit your goal.", format_hours(hours_remaining)),
            )
        } else {
            let avg_needed = hours_remaining / f64::from(days_remaining + 1);
            (
                ProgressStatus::Info,
                format!(
                    "{} to go. ~{}/day to stay on track.",
                    format_hours(hours_remaining),
                    format_hours(avg_needed)
                ),
            )
        };

    Ok(WeeklyProgress {
        week_start: current_week,
        current_day_index,
        days,
        cumulative_adjusted,
        cumulative_raw,
        total_adjusted_hours,
        total_raw_hours,
        total_workouts,
        hours_remaining,
        progress_percent,
        status,
        status_message,
    })
}
