//! Dashboard overview: lifetime totals, this week's totals, streaks and the
//! per-activity breakdown.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::calendar::{capped_percentage, WeekWindow};
use crate::insights::{active_dates, current_streak, longest_streak};
use crate::models::{ActivityBreakdown, DashboardStats, Workout};

pub fn calculate_dashboard_stats<Tz: TimeZone>(
  workouts: &[Workout],
  reference: &DateTime<Tz>,
) -> DashboardStats {
  let this_week = WeekWindow::containing(reference).workouts_in(workouts);
  let dates = active_dates(workouts, &reference.timezone());

  let stats = DashboardStats {
    total_workouts: workouts.len() as u32,
    total_duration: workouts.iter().map(|w| w.duration as u64).sum(),
    total_calories: workouts.iter().map(|w| w.calories_burned as u64).sum(),
    weekly_workouts: this_week.len() as u32,
    weekly_duration: this_week.iter().map(|w| w.duration as u64).sum(),
    weekly_calories: this_week.iter().map(|w| w.calories_burned as u64).sum(),
    current_streak: current_streak(&dates, reference.date_naive()),
    longest_streak: longest_streak(&dates),
  };
  debug!(
    total = stats.total_workouts,
    weekly = stats.weekly_workouts,
    current_streak = stats.current_streak,
    "dashboard stats"
  );
  stats
}

/// Sessions grouped by activity id, most frequent first (ties by name).
/// The name shown is the first one seen for that id.
pub fn activity_breakdown(workouts: &[Workout]) -> Vec<ActivityBreakdown> {
  let mut by_activity: HashMap<&str, ActivityBreakdown> = HashMap::new();

  for w in workouts {
    let entry = by_activity
      .entry(w.activity_id.as_str())
      .or_insert_with(|| ActivityBreakdown {
        activity_id: w.activity_id.clone(),
        activity_name: w.activity_name.clone(),
        count: 0,
        total_duration: 0,
        total_calories: 0,
        percentage: 0,
      });
    entry.count += 1;
    entry.total_duration += w.duration as u64;
    entry.total_calories += w.calories_burned as u64;
  }

  let total = workouts.len() as u64;
  let mut breakdown: Vec<ActivityBreakdown> = by_activity
    .into_values()
    .map(|mut item| {
      item.percentage = capped_percentage(item.count as u64, total);
      item
    })
    .collect();

  breakdown.sort_by(|a, b| {
    b.count
      .cmp(&a.count)
      .then_with(|| a.activity_name.cmp(&b.activity_name))
      .then_with(|| a.activity_id.cmp(&b.activity_id))
  });
  breakdown
}

/// The `limit` most frequent activities
pub fn top_activities(workouts: &[Workout], limit: usize) -> Vec<ActivityBreakdown> {
  let mut breakdown = activity_breakdown(workouts);
  breakdown.truncate(limit);
  breakdown
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_dashboard_empty() {
    assert_eq!(
      calculate_dashboard_stats(&[], &reference_date()),
      DashboardStats::default()
    );
  }

  #[test]
  fn test_dashboard_totals_and_week() {
    let monday = reference_monday();
    let workouts = vec![
      workout_with(monday, 30, 300),
      workout_with(monday + days(1), 45, 420),
      workout_with(monday - days(10), 60, 500),
      // Next week does not count toward this week
      workout_with(monday + days(8), 20, 100),
    ];
    let stats = calculate_dashboard_stats(&workouts, &reference_date());
    assert_eq!(stats.total_workouts, 4);
    assert_eq!(stats.total_duration, 155);
    assert_eq!(stats.total_calories, 1320);
    assert_eq!(stats.weekly_workouts, 2);
    assert_eq!(stats.weekly_duration, 75);
    assert_eq!(stats.weekly_calories, 720);
  }

  #[test]
  fn test_dashboard_streaks() {
    // Reference is Wednesday the 18th; Mon and Tue logged, nothing today
    let monday = reference_monday();
    let workouts = workouts_on(&[
      monday,
      monday + days(1),
      monday - days(10),
      monday - days(9),
      monday - days(8),
    ]);
    let stats = calculate_dashboard_stats(&workouts, &reference_date());
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 3);
  }

  #[test]
  fn test_dashboard_streak_resets_after_gap() {
    let workouts = workouts_on(&[reference_monday()]);
    let stats = calculate_dashboard_stats(&workouts, &(reference_date() + days(3)));
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 1);
  }

  #[test]
  fn test_activity_breakdown_sorted_by_count() {
    let workouts = vec![
      activity_workout("yoga", "Yoga", 30),
      activity_workout("run", "Running", 20),
      activity_workout("run", "Running", 40),
      activity_workout("cycle", "Cycling", 60),
    ];
    let breakdown = activity_breakdown(&workouts);
    let ids: Vec<_> = breakdown.iter().map(|b| b.activity_id.as_str()).collect();
    assert_eq!(ids, ["run", "cycle", "yoga"]);

    let run = &breakdown[0];
    assert_eq!(run.count, 2);
    assert_eq!(run.total_duration, 60);
    assert_eq!(run.total_calories, 600);
    assert_eq!(run.percentage, 50);
    assert_eq!(breakdown[1].percentage, 25);
  }

  #[test]
  fn test_top_activities_limits_results() {
    let workouts = vec![
      activity_workout("yoga", "Yoga", 30),
      activity_workout("run", "Running", 20),
      activity_workout("run", "Running", 40),
      activity_workout("swim", "Swimming", 25),
    ];
    let top = top_activities(&workouts, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].activity_id, "run");
    assert_eq!(top[1].activity_id, "swim");
    assert!(top_activities(&[], 3).is_empty());
  }
}
