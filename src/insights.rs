//! Historical insights over the full workout list
//!
//! Weekly trend buckets, week-over-week deltas, consistency, best weekday,
//! averages and personal bests.
//!
//! Two weekday conventions live here side by side. Week windows and trends
//! are Monday-first; the best-day analysis reports `day_of_week` counted from
//! Sunday = 0. Both are part of the output contract.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::calendar::{self, WeekWindow, DAY_NAMES};
use crate::models::{
  AverageMetrics, BestDay, ConsistencyScore, PersonalBests, WeekOverWeekComparison,
  WeeklyTrendItem, Workout,
};

/// Weeks shown by the trend chart when the caller has no preference
pub const DEFAULT_TREND_WEEKS: usize = 8;

/// ---------------------------------------------------------------------------
/// Weekly Trends
/// ---------------------------------------------------------------------------

fn build_trend_item<Tz: TimeZone>(tz: &Tz, week_monday: NaiveDate, workouts: &[Workout]) -> WeeklyTrendItem {
  let window = WeekWindow::from_monday(tz, week_monday);
  let week_workouts = window.workouts_in(workouts);

  WeeklyTrendItem {
    week: calendar::iso_week_label(week_monday),
    week_start_date: window.start.with_timezone(&Utc),
    workouts: week_workouts.len() as u32,
    duration: week_workouts.iter().map(|w| w.duration as u64).sum(),
    calories: week_workouts.iter().map(|w| w.calories_burned as u64).sum(),
  }
}

/// `weeks_count` consecutive weeks ending with the reference week, oldest
/// first. Weeks without workouts are zero-filled.
pub fn calculate_weekly_trends<Tz: TimeZone>(
  workouts: &[Workout],
  weeks_count: usize,
  reference: &DateTime<Tz>,
) -> Vec<WeeklyTrendItem> {
  let tz = reference.timezone();
  let current_monday = calendar::week_start_date(reference.date_naive());

  (0..weeks_count)
    .rev()
    .map(|i| build_trend_item(&tz, current_monday - Duration::weeks(i as i64), workouts))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Week-over-Week
/// ---------------------------------------------------------------------------

/// Rounded percent change, or None when there is no baseline
fn percent_change(current: u64, previous: u64) -> Option<i64> {
  if previous == 0 {
    return None;
  }
  let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
  Some(calendar::round_half_away(change))
}

fn delta(current: u64, previous: u64) -> i64 {
  current as i64 - previous as i64
}

/// This week against last week. The two buckets are the ones a two-week
/// trend would return.
pub fn calculate_week_over_week<Tz: TimeZone>(
  workouts: &[Workout],
  reference: &DateTime<Tz>,
) -> WeekOverWeekComparison {
  let tz = reference.timezone();
  let this_monday = calendar::week_start_date(reference.date_naive());
  let this_week = build_trend_item(&tz, this_monday, workouts);
  let last_week = build_trend_item(&tz, this_monday - Duration::weeks(1), workouts);

  let comparison = WeekOverWeekComparison {
    workouts_delta: delta(this_week.workouts as u64, last_week.workouts as u64),
    duration_delta: delta(this_week.duration, last_week.duration),
    calories_delta: delta(this_week.calories, last_week.calories),
    workouts_percent_change: percent_change(this_week.workouts as u64, last_week.workouts as u64),
    duration_percent_change: percent_change(this_week.duration, last_week.duration),
    calories_percent_change: percent_change(this_week.calories, last_week.calories),
    this_week,
    last_week,
  };
  debug!(
    workouts_delta = comparison.workouts_delta,
    duration_delta = comparison.duration_delta,
    calories_delta = comparison.calories_delta,
    "week over week"
  );
  comparison
}

/// ---------------------------------------------------------------------------
/// Consistency
/// ---------------------------------------------------------------------------

/// Distinct active days this week against a days-per-week target.
///
/// A target of zero is always met: score 100 with no days counted.
pub fn calculate_consistency_score<Tz: TimeZone>(
  workouts: &[Workout],
  target_days_per_week: u8,
  reference: &DateTime<Tz>,
) -> ConsistencyScore {
  if target_days_per_week == 0 {
    return ConsistencyScore {
      target_days_per_week: 0,
      actual_days_this_week: 0,
      score: 100,
    };
  }

  let tz = reference.timezone();
  let active_days: BTreeSet<NaiveDate> = WeekWindow::containing(reference)
    .workouts_in(workouts)
    .iter()
    .map(|w| calendar::local_date(&w.date, &tz))
    .collect();
  let actual_days = active_days.len() as u8;

  ConsistencyScore {
    target_days_per_week,
    actual_days_this_week: actual_days,
    score: calendar::capped_percentage(actual_days as u64, target_days_per_week as u64),
  }
}

/// ---------------------------------------------------------------------------
/// Best Day
/// ---------------------------------------------------------------------------

/// Weekday with the most workouts across all history, or None without data.
///
/// Counts are indexed Sunday = 0 and scanned upward; only a strictly larger
/// count replaces the current best, so ties go to the earlier index.
pub fn calculate_best_day<Tz: TimeZone>(workouts: &[Workout], tz: &Tz) -> Option<BestDay> {
  if workouts.is_empty() {
    return None;
  }

  let mut day_counts = [0u32; 7];
  for w in workouts {
    let day = w.date.with_timezone(tz).weekday().num_days_from_sunday() as usize;
    day_counts[day] += 1;
  }

  let mut best = 0;
  for day in 1..day_counts.len() {
    if day_counts[day] > day_counts[best] {
      best = day;
    }
  }

  Some(BestDay {
    day_of_week: best as u8,
    day_name: DAY_NAMES[best].to_string(),
    total_workouts: day_counts[best],
  })
}

/// ---------------------------------------------------------------------------
/// Averages and Personal Bests
/// ---------------------------------------------------------------------------

pub fn calculate_average_metrics(workouts: &[Workout]) -> AverageMetrics {
  if workouts.is_empty() {
    return AverageMetrics::default();
  }

  let count = workouts.len() as f64;
  let total_duration: u64 = workouts.iter().map(|w| w.duration as u64).sum();
  let total_calories: u64 = workouts.iter().map(|w| w.calories_burned as u64).sum();

  AverageMetrics {
    avg_duration: calendar::round_half_away(total_duration as f64 / count) as u64,
    avg_calories: calendar::round_half_away(total_calories as f64 / count) as u64,
    total_sessions: workouts.len() as u32,
  }
}

pub fn calculate_personal_bests<Tz: TimeZone>(workouts: &[Workout], tz: &Tz) -> PersonalBests {
  if workouts.is_empty() {
    return PersonalBests::default();
  }

  PersonalBests {
    longest_workout_duration: workouts.iter().map(|w| w.duration).max().unwrap_or(0),
    most_calories_in_session: workouts.iter().map(|w| w.calories_burned).max().unwrap_or(0),
    longest_streak: longest_streak(&active_dates(workouts, tz)),
  }
}

/// ---------------------------------------------------------------------------
/// Streaks
/// ---------------------------------------------------------------------------

/// Distinct local calendar dates with at least one workout, ascending
pub fn active_dates<Tz: TimeZone>(workouts: &[Workout], tz: &Tz) -> BTreeSet<NaiveDate> {
  workouts
    .iter()
    .map(|w| calendar::local_date(&w.date, tz))
    .collect()
}

/// Longest run of consecutive dates. Any gap other than exactly one day
/// restarts the run at 1.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
  let mut longest = 0;
  let mut current = 0;
  let mut prev: Option<NaiveDate> = None;

  for &date in dates {
    current = match prev {
      Some(p) if (date - p).num_days() == 1 => current + 1,
      _ => 1,
    };
    longest = longest.max(current);
    prev = Some(date);
  }

  longest
}

/// Run of consecutive dates ending today, or yesterday if nothing is logged
/// yet today. Dates after `today` are ignored.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
  let mut past = dates.range(..=today).rev().peekable();
  let Some(&&latest) = past.peek() else {
    return 0;
  };
  if (today - latest).num_days() > 1 {
    return 0;
  }

  let mut streak = 0;
  let mut expected = latest;
  for &date in past {
    if date != expected {
      break;
    }
    streak += 1;
    expected = date - Duration::days(1);
  }
  streak
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
