use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub total_workouts: u32,
  pub total_duration: u64,
  pub total_calories: u64,
  pub weekly_workouts: u32,
  pub weekly_duration: u64,
  pub weekly_calories: u64,
  /// Consecutive days ending today or yesterday
  pub current_streak: u32,
  pub longest_streak: u32,
}

/// Per-activity share of all logged sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBreakdown {
  pub activity_id: String,
  pub activity_name: String,
  pub count: u32,
  pub total_duration: u64,
  pub total_calories: u64,
  /// Share of sessions, 0..=100
  pub percentage: u8,
}
