use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamps written as `2026-02-16T00:00:00.000Z`
mod iso_millis {
  use chrono::{DateTime, SecondsFormat, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(deserializer)
  }
}

/// Totals for one Monday-to-Sunday window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrendItem {
  /// ISO week label, e.g. `2026-W08`
  pub week: String,
  /// Monday 00:00 local, as an instant
  #[serde(with = "iso_millis")]
  pub week_start_date: DateTime<Utc>,
  pub workouts: u32,
  pub duration: u64,
  pub calories: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOverWeekComparison {
  pub this_week: WeeklyTrendItem,
  pub last_week: WeeklyTrendItem,
  pub workouts_delta: i64,
  pub duration_delta: i64,
  pub calories_delta: i64,
  /// None when last week's value is zero
  pub workouts_percent_change: Option<i64>,
  pub duration_percent_change: Option<i64>,
  pub calories_percent_change: Option<i64>,
}

/// Direction of a signed delta, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
  Up,
  Down,
  Flat,
}

impl Trend {
  pub fn from_delta(delta: i64) -> Self {
    match delta {
      d if d > 0 => Trend::Up,
      d if d < 0 => Trend::Down,
      _ => Trend::Flat,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyScore {
  pub target_days_per_week: u8,
  pub actual_days_this_week: u8,
  pub score: u8,
}

/// Most active weekday. `day_of_week` counts from Sunday = 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestDay {
  pub day_of_week: u8,
  pub day_name: String,
  pub total_workouts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AverageMetrics {
  pub avg_duration: u64,
  pub avg_calories: u64,
  pub total_sessions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBests {
  pub longest_workout_duration: u32,
  pub most_calories_in_session: u32,
  /// Longest run of consecutive calendar days with a workout
  pub longest_streak: u32,
}
