//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock workout factories
//! - Fixed reference dates
//! - Fixed-offset time zones

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::Workout;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// ---------------------------------------------------------------------------
/// Reference Dates
/// ---------------------------------------------------------------------------

/// Wednesday, February 18, 2026 at noon UTC
pub fn reference_date() -> DateTime<Utc> {
  utc(2026, 2, 18, 12)
}

/// Monday of the reference week, at noon so day shifts stay inside the day
pub fn reference_monday() -> DateTime<Utc> {
  utc(2026, 2, 16, 12)
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, 0, 0)
    .single()
    .expect("valid test date")
}

pub fn days(n: i64) -> Duration {
  Duration::days(n)
}

/// Fixed offset east of UTC in hours (negative for west)
pub fn offset_hours(hours: i32) -> FixedOffset {
  FixedOffset::east_opt(hours * 3600).expect("valid test offset")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A 30 minute, 300 kcal run at the reference date
pub fn mock_workout() -> Workout {
  let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
  Workout {
    id: Some(format!("workout-{}", n)),
    user_id: "test-user".to_string(),
    activity_id: "run".to_string(),
    activity_name: "Running".to_string(),
    duration: 30,
    calories_burned: 300,
    date: reference_date(),
    notes: None,
    created_at: None,
    updated_at: None,
  }
}

pub fn workout_at(date: DateTime<Utc>) -> Workout {
  Workout { date, ..mock_workout() }
}

pub fn workout_with(date: DateTime<Utc>, duration: u32, calories_burned: u32) -> Workout {
  Workout {
    date,
    duration,
    calories_burned,
    ..mock_workout()
  }
}

pub fn activity_workout(activity_id: &str, activity_name: &str, duration: u32) -> Workout {
  Workout {
    activity_id: activity_id.to_string(),
    activity_name: activity_name.to_string(),
    duration,
    calories_burned: duration * 10,
    ..mock_workout()
  }
}

/// One default workout per date
pub fn workouts_on(dates: &[DateTime<Utc>]) -> Vec<Workout> {
  dates.iter().map(|d| workout_at(*d)).collect()
}
