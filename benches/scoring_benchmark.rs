use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use family_fitness::models::{Activity, ScoringConfig, WorkoutType};
use family_fitness::services::{calculate_scores, season_summary};

/// Roughly a keen athlete's year: two activities a day, a race most weekends.
fn build_season() -> Vec<Activity> {
    let first: DateTime<Utc> = "2024-01-01T06:00:00Z".parse().expect("valid start");
    let sports = ["Run", "Ride", "Swim", "Golf", "AlpineSki", "Hike", "WeightTraining"];

    (0..730i64)
        .map(|i| {
            let start = first + Duration::hours(i * 12);
            let workout_type = if i % 13 == 0 {
                WorkoutType::Race
            } else if i % 29 == 0 {
                WorkoutType::GolfTournament
            } else {
                WorkoutType::Training
            };
            Activity {
                strava_id: i as u64,
                name: format!("Activity {}", i),
                sport: sports[i as usize % sports.len()].to_string(),
                workout_type,
                moving_time_seconds: 1200 + (i as u64 * 733) % 10_800,
                start_date: start,
                start_date_local: (start - Duration::hours(7)).naive_utc(),
            }
        })
        .collect()
}

fn benchmark_scoring(c: &mut Criterion) {
    let activities = build_season();
    let config = ScoringConfig::new(8.0, 2024)
        .with_handicap(0.8)
        .with_penalties(4, 6);

    let mut group = c.benchmark_group("season_scoring");

    group.bench_function("calculate_scores_full_year", |b| {
        b.iter(|| calculate_scores(black_box(&activities), black_box(&config)))
    });

    let scores = calculate_scores(&activities, &config).expect("valid config");
    group.bench_function("season_summary_full_year", |b| {
        b.iter(|| season_summary(black_box(&activities), &config, black_box(&scores)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scoring);
criterion_main!(benches);
