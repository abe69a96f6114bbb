//! Everything the weekly insights screen shows, computed in one pass over the
//! same workouts and reference instant.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar;
use crate::dashboard::{activity_breakdown, calculate_dashboard_stats};
use crate::goals::{
  build_weekly_activity_calendar, calculate_calorie_goal_progress,
  calculate_workout_goal_progress, motivational_feedback,
};
use crate::insights::{
  calculate_average_metrics, calculate_best_day, calculate_consistency_score,
  calculate_personal_bests, calculate_week_over_week, calculate_weekly_trends,
};
use crate::models::{
  ActivityBreakdown, AverageMetrics, BestDay, ConsistencyScore, DashboardStats, GoalProgress,
  MotivationalFeedback, PersonalBests, WeekOverWeekComparison, WeeklyActivityCalendar,
  WeeklyTrendItem, Workout,
};
use crate::settings::Preferences;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
  /// Monday of the reported week, local date
  pub week_of: NaiveDate,
  pub preferences: Preferences,
  pub workout_goal: GoalProgress,
  /// Absent when no calorie goal is set
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub calorie_goal: Option<GoalProgress>,
  pub feedback: MotivationalFeedback,
  pub calendar: WeeklyActivityCalendar,
  pub weekly_trends: Vec<WeeklyTrendItem>,
  pub week_over_week: WeekOverWeekComparison,
  pub consistency: ConsistencyScore,
  pub best_day: Option<BestDay>,
  pub averages: AverageMetrics,
  pub personal_bests: PersonalBests,
  pub dashboard: DashboardStats,
  pub activity_breakdown: Vec<ActivityBreakdown>,
}

impl InsightsReport {
  pub fn build<Tz: TimeZone>(
    workouts: &[Workout],
    prefs: &Preferences,
    reference: &DateTime<Tz>,
  ) -> Self {
    let tz = reference.timezone();
    let workout_goal =
      calculate_workout_goal_progress(workouts, prefs.weekly_goal as u64, reference);
    let calorie_goal = (prefs.calorie_goal > 0)
      .then(|| calculate_calorie_goal_progress(workouts, prefs.calorie_goal as u64, reference));
    let feedback = motivational_feedback(workout_goal.percentage);

    debug!(
      workouts = workouts.len(),
      weekly_goal = prefs.weekly_goal,
      trend_weeks = prefs.trend_weeks,
      "building insights report"
    );

    Self {
      week_of: calendar::monday_of(reference).date_naive(),
      preferences: prefs.clone(),
      workout_goal,
      calorie_goal,
      feedback,
      calendar: build_weekly_activity_calendar(workouts, reference),
      weekly_trends: calculate_weekly_trends(workouts, prefs.trend_weeks, reference),
      week_over_week: calculate_week_over_week(workouts, reference),
      consistency: calculate_consistency_score(workouts, prefs.weekly_goal, reference),
      best_day: calculate_best_day(workouts, &tz),
      averages: calculate_average_metrics(workouts),
      personal_bests: calculate_personal_bests(workouts, &tz),
      dashboard: calculate_dashboard_stats(workouts, reference),
      activity_breakdown: activity_breakdown(workouts),
    }
  }
}
