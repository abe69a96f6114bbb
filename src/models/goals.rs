use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::capped_percentage;

/// Progress toward a weekly target (workout count or calories)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
  pub target: u64,
  pub current: u64,
  /// 0..=100, never above 100 even when the target is exceeded
  pub percentage: u8,
  pub remaining: u64,
  /// `current >= target`, which also holds for a zero target
  pub is_complete: bool,
}

impl GoalProgress {
  pub fn from_totals(target: u64, current: u64) -> Self {
    Self {
      target,
      current,
      percentage: capped_percentage(current, target),
      remaining: target.saturating_sub(current),
      is_complete: current >= target,
    }
  }
}

/// One cell of the Monday-first weekly grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
  /// Serialized as `YYYY-MM-DD`
  pub date: NaiveDate,
  pub day_name: String,
  pub has_workout: bool,
  pub workout_count: u32,
  pub total_duration: u64,
  pub total_calories: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivityCalendar {
  /// Always seven entries, Monday through Sunday
  pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
  Encouraging,
  Celebrating,
  Neutral,
  Motivating,
}

impl std::fmt::Display for Tone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Encouraging => write!(f, "encouraging"),
      Self::Celebrating => write!(f, "celebrating"),
      Self::Neutral => write!(f, "neutral"),
      Self::Motivating => write!(f, "motivating"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationalFeedback {
  pub message: String,
  pub tone: Tone,
}
