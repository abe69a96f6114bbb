//! Weekly goal tracking
//!
//! Progress toward the user's weekly workout and calorie targets, the
//! Monday-to-Sunday activity grid, and the feedback line shown next to them.
//! Every function takes the reference instant explicitly; its time zone
//! decides where days and weeks begin.

use chrono::{DateTime, Duration, TimeZone};
use tracing::debug;

use crate::calendar::{self, WeekWindow, SHORT_DAY_NAMES};
use crate::models::{
  CalendarDay, GoalProgress, MotivationalFeedback, Tone, WeeklyActivityCalendar, Workout,
};

/// ---------------------------------------------------------------------------
/// Goal Progress
/// ---------------------------------------------------------------------------

/// Workouts logged this week against a weekly session target
pub fn calculate_workout_goal_progress<Tz: TimeZone>(
  workouts: &[Workout],
  target_workouts_per_week: u64,
  reference: &DateTime<Tz>,
) -> GoalProgress {
  let week = WeekWindow::containing(reference).workouts_in(workouts);
  let progress = GoalProgress::from_totals(target_workouts_per_week, week.len() as u64);
  debug!(
    goal = progress.target,
    current = progress.current,
    percentage = progress.percentage,
    "workout goal progress"
  );
  progress
}

/// Calories burned this week against a weekly calorie target
pub fn calculate_calorie_goal_progress<Tz: TimeZone>(
  workouts: &[Workout],
  target_calories_per_week: u64,
  reference: &DateTime<Tz>,
) -> GoalProgress {
  let current: u64 = WeekWindow::containing(reference)
    .workouts_in(workouts)
    .iter()
    .map(|w| w.calories_burned as u64)
    .sum();
  let progress = GoalProgress::from_totals(target_calories_per_week, current);
  debug!(
    goal = progress.target,
    current = progress.current,
    percentage = progress.percentage,
    "calorie goal progress"
  );
  progress
}

/// ---------------------------------------------------------------------------
/// Weekly Activity Calendar
/// ---------------------------------------------------------------------------

/// Seven days, Monday first, with per-day totals. Days are matched on the
/// local calendar date in the reference's time zone.
pub fn build_weekly_activity_calendar<Tz: TimeZone>(
  workouts: &[Workout],
  reference: &DateTime<Tz>,
) -> WeeklyActivityCalendar {
  let tz = reference.timezone();
  let monday = calendar::week_start_date(reference.date_naive());

  let days = SHORT_DAY_NAMES
    .iter()
    .enumerate()
    .map(|(i, name)| {
      let date = monday + Duration::days(i as i64);
      let day_workouts: Vec<&Workout> = workouts
        .iter()
        .filter(|w| calendar::local_date(&w.date, &tz) == date)
        .collect();

      CalendarDay {
        date,
        day_name: name.to_string(),
        has_workout: !day_workouts.is_empty(),
        workout_count: day_workouts.len() as u32,
        total_duration: day_workouts.iter().map(|w| w.duration as u64).sum(),
        total_calories: day_workouts.iter().map(|w| w.calories_burned as u64).sum(),
      }
    })
    .collect();

  WeeklyActivityCalendar { days }
}

/// ---------------------------------------------------------------------------
/// Motivational Feedback
/// ---------------------------------------------------------------------------

/// Message and tone for a goal percentage
pub fn motivational_feedback(percentage: u8) -> MotivationalFeedback {
  let (message, tone) = match percentage {
    0 => (
      "Every journey starts with a single step. Log your first workout this week!",
      Tone::Encouraging,
    ),
    1..=25 => ("Great start! Keep the momentum going.", Tone::Motivating),
    26..=50 => (
      "You're making progress! Keep pushing toward your goal.",
      Tone::Motivating,
    ),
    51..=75 => ("More than halfway there! Keep it up.", Tone::Encouraging),
    76..=99 => (
      "Almost there! Just a little more to crush your goal.",
      Tone::Celebrating,
    ),
    _ => ("Goal crushed! You're a champion this week!", Tone::Celebrating),
  };

  MotivationalFeedback {
    message: message.to_string(),
    tone,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;
  use chrono::{NaiveDate, Utc};
  use chrono_tz::Pacific::Apia;

  #[test]
  fn test_workout_goal_progress_empty() {
    let progress = calculate_workout_goal_progress(&[], 4, &reference_date());
    assert_eq!(
      progress,
      GoalProgress {
        target: 4,
        current: 0,
        percentage: 0,
        remaining: 4,
        is_complete: false,
      }
    );
  }

  #[test]
  fn test_workout_goal_progress_half_way() {
    let monday = reference_monday();
    let workouts = workouts_on(&[monday, monday + days(1)]);
    let progress = calculate_workout_goal_progress(&workouts, 4, &reference_date());
    assert_eq!(progress.current, 2);
    assert_eq!(progress.percentage, 50);
    assert_eq!(progress.remaining, 2);
    assert!(!progress.is_complete);
  }

  #[test]
  fn test_workout_goal_progress_caps_at_100() {
    let monday = reference_monday();
    let workouts = workouts_on(&[monday, monday + days(1), monday + days(2), monday + days(3)]);
    let progress = calculate_workout_goal_progress(&workouts, 3, &reference_date());
    assert_eq!(progress.current, 4);
    assert_eq!(progress.percentage, 100);
    assert_eq!(progress.remaining, 0);
    assert!(progress.is_complete);
  }

  #[test]
  fn test_workout_goal_progress_ignores_other_weeks() {
    let monday = reference_monday();
    let workouts = workouts_on(&[monday - days(1), monday, monday + days(7)]);
    let progress = calculate_workout_goal_progress(&workouts, 3, &reference_date());
    assert_eq!(progress.current, 1);
    assert_eq!(progress.percentage, 33);
  }

  #[test]
  fn test_zero_target_is_complete_with_zero_percentage() {
    let progress = calculate_workout_goal_progress(&[], 0, &reference_date());
    assert_eq!(progress.percentage, 0);
    assert_eq!(progress.remaining, 0);
    assert!(progress.is_complete);
  }

  #[test]
  fn test_calorie_goal_progress_sums_week() {
    let monday = reference_monday();
    let workouts = vec![
      workout_with(monday, 30, 400),
      workout_with(monday + days(2), 45, 350),
      workout_with(monday - days(3), 60, 900),
    ];
    let progress = calculate_calorie_goal_progress(&workouts, 1000, &reference_date());
    assert_eq!(progress.current, 750);
    assert_eq!(progress.percentage, 75);
    assert_eq!(progress.remaining, 250);
    assert!(!progress.is_complete);
  }

  #[test]
  fn test_calorie_goal_progress_zero_target() {
    let workouts = vec![workout_with(reference_monday(), 30, 400)];
    let progress = calculate_calorie_goal_progress(&workouts, 0, &reference_date());
    assert_eq!(progress.percentage, 0);
    assert!(progress.is_complete);
  }

  #[test]
  fn test_calendar_has_seven_days_monday_first() {
    // Check every weekday as the reference, Sunday included
    for offset in 0..7 {
      let reference = reference_monday() + days(offset);
      let cal = build_weekly_activity_calendar(&[], &reference);
      let names: Vec<_> = cal.days.iter().map(|d| d.day_name.as_str()).collect();
      assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
      assert_eq!(cal.days[0].date, NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
      assert_eq!(cal.days[6].date, NaiveDate::from_ymd_opt(2026, 2, 22).unwrap());
      assert!(cal.days.iter().all(|d| !d.has_workout && d.workout_count == 0));
    }
  }

  #[test]
  fn test_calendar_aggregates_per_day() {
    let monday = reference_monday();
    let workouts = vec![
      workout_with(monday, 30, 300),
      workout_with(monday + chrono::Duration::hours(3), 20, 150),
      workout_with(monday + days(4), 60, 500),
    ];
    let cal = build_weekly_activity_calendar(&workouts, &reference_date());
    assert_eq!(cal.days[0].workout_count, 2);
    assert_eq!(cal.days[0].total_duration, 50);
    assert_eq!(cal.days[0].total_calories, 450);
    assert!(cal.days[4].has_workout);
    assert_eq!(cal.days[4].total_calories, 500);
    assert!(!cal.days[1].has_workout);
  }

  #[test]
  fn test_calendar_uses_reference_zone_for_days() {
    // 23:30 UTC on Monday is already Tuesday in UTC+2
    let late_monday = utc(2026, 2, 16, 23) + chrono::Duration::minutes(30);
    let workouts = vec![workout_at(late_monday)];
    let reference = reference_date().with_timezone(&offset_hours(2));

    let cal = build_weekly_activity_calendar(&workouts, &reference);
    assert_eq!(cal.days[0].workout_count, 0);
    assert_eq!(cal.days[1].workout_count, 1);

    let utc_cal = build_weekly_activity_calendar(&workouts, &reference.with_timezone(&Utc));
    assert_eq!(utc_cal.days[0].workout_count, 1);
  }

  #[test]
  fn test_calendar_keeps_every_slot_when_zone_skips_a_day() {
    // Apia had no December 30, 2011
    let reference = Apia.with_ymd_and_hms(2011, 12, 27, 12, 0, 0).unwrap();
    let workouts = vec![
      workout_at(utc(2011, 12, 29, 12)),
      workout_at(utc(2011, 12, 30, 12)),
    ];
    let cal = build_weekly_activity_calendar(&workouts, &reference);

    let names: Vec<_> = cal.days.iter().map(|d| d.day_name.as_str()).collect();
    assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    let first = NaiveDate::from_ymd_opt(2011, 12, 26).unwrap();
    for (i, day) in cal.days.iter().enumerate() {
      assert_eq!(day.date, first + chrono::Duration::days(i as i64));
    }
    // 12:00 UTC on the 29th is early morning on the 29th locally; on the
    // 30th it is already the 31st
    assert_eq!(cal.days[3].workout_count, 1);
    assert!(!cal.days[4].has_workout);
    assert_eq!(cal.days[5].workout_count, 1);
  }

  #[test]
  fn test_calendar_serializes_dates_as_plain_days() {
    let cal = build_weekly_activity_calendar(&[], &reference_date());
    let json = serde_json::to_value(&cal).unwrap();
    assert_eq!(json["days"][0]["date"], "2026-02-16");
    assert_eq!(json["days"][0]["dayName"], "Mon");
    assert_eq!(json["days"][0]["hasWorkout"], false);
  }

  #[test]
  fn test_feedback_tone_bands() {
    let tone = |p| motivational_feedback(p).tone;
    assert_eq!(tone(0), Tone::Encouraging);
    assert_eq!(tone(1), Tone::Motivating);
    assert_eq!(tone(25), Tone::Motivating);
    assert_eq!(tone(26), Tone::Motivating);
    assert_eq!(tone(50), Tone::Motivating);
    assert_eq!(tone(51), Tone::Encouraging);
    assert_eq!(tone(75), Tone::Encouraging);
    assert_eq!(tone(76), Tone::Celebrating);
    assert_eq!(tone(99), Tone::Celebrating);
    assert_eq!(tone(100), Tone::Celebrating);
  }

  #[test]
  fn test_feedback_messages_differ_between_bands() {
    assert_ne!(motivational_feedback(25).message, motivational_feedback(26).message);
    assert_ne!(motivational_feedback(99).message, motivational_feedback(100).message);
    assert_eq!(motivational_feedback(10), motivational_feedback(20));
  }

  #[test]
  fn test_tone_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tone::Celebrating).unwrap(), r#""celebrating""#);
    assert_eq!(Tone::Neutral.to_string(), "neutral");
  }
}
