//! User preferences for the insights report
//!
//! Weekly goals, trend length and the UTC offset that decides where days and
//! weeks begin. Values come from `INSIGHTS_*` environment variables (a `.env`
//! file is loaded by the runner) and fall back to defaults.

use std::env;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::DEFAULT_TREND_WEEKS;

pub const MAX_WEEKLY_GOAL: u8 = 7;
pub const MAX_TREND_WEEKS: usize = 52;
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
  #[error("Invalid value for {key}: {value:?}")]
  InvalidValue { key: &'static str, value: String },

  #[error("Weekly goal must be between 0 and 7 days, got {0}")]
  WeeklyGoalOutOfRange(u8),

  #[error("Trend length must be between 1 and 52 weeks, got {0}")]
  TrendWeeksOutOfRange(usize),

  #[error("UTC offset must be within 14 hours, got {0} minutes")]
  UtcOffsetOutOfRange(i32),
}

impl Serialize for SettingsError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Preferences
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
  /// Target workout days per week
  pub weekly_goal: u8,
  /// Target calories per week, 0 when unset
  pub calorie_goal: u32,
  pub trend_weeks: usize,
  pub utc_offset_minutes: i32,
}

impl Default for Preferences {
  fn default() -> Self {
    Self {
      weekly_goal: 3,
      calorie_goal: 0,
      trend_weeks: DEFAULT_TREND_WEEKS,
      utc_offset_minutes: 0,
    }
  }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, SettingsError> {
  match env::var(key) {
    Ok(raw) => raw
      .trim()
      .parse()
      .map(Some)
      .map_err(|_| SettingsError::InvalidValue { key, value: raw }),
    Err(_) => Ok(None),
  }
}

impl Preferences {
  /// Defaults overridden by any `INSIGHTS_*` variables that are set
  pub fn from_env() -> Result<Self, SettingsError> {
    let defaults = Self::default();
    let prefs = Self {
      weekly_goal: parse_var("INSIGHTS_WEEKLY_GOAL")?.unwrap_or(defaults.weekly_goal),
      calorie_goal: parse_var("INSIGHTS_CALORIE_GOAL")?.unwrap_or(defaults.calorie_goal),
      trend_weeks: parse_var("INSIGHTS_TREND_WEEKS")?.unwrap_or(defaults.trend_weeks),
      utc_offset_minutes: parse_var("INSIGHTS_UTC_OFFSET_MINUTES")?
        .unwrap_or(defaults.utc_offset_minutes),
    };
    prefs.validate()?;
    Ok(prefs)
  }

  pub fn validate(&self) -> Result<(), SettingsError> {
    if self.weekly_goal > MAX_WEEKLY_GOAL {
      return Err(SettingsError::WeeklyGoalOutOfRange(self.weekly_goal));
    }
    if !(1..=MAX_TREND_WEEKS).contains(&self.trend_weeks) {
      return Err(SettingsError::TrendWeeksOutOfRange(self.trend_weeks));
    }
    if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
      return Err(SettingsError::UtcOffsetOutOfRange(self.utc_offset_minutes));
    }
    Ok(())
  }

  /// The configured offset, or UTC if it cannot be represented
  pub fn timezone(&self) -> FixedOffset {
    FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
  }
}

/// ---------------------------------------------------------------------------
/// Goal Updates
/// ---------------------------------------------------------------------------

/// Partial goal change coming from the settings screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weekly_goal: Option<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub calorie_goal: Option<u32>,
}

impl GoalUpdate {
  /// Preferences with the provided fields replaced. The input is untouched
  /// when the result would be invalid.
  pub fn apply(&self, prefs: &Preferences) -> Result<Preferences, SettingsError> {
    let updated = Preferences {
      weekly_goal: self.weekly_goal.unwrap_or(prefs.weekly_goal),
      calorie_goal: self.calorie_goal.unwrap_or(prefs.calorie_goal),
      ..prefs.clone()
    };
    updated.validate()?;
    Ok(updated)
  }
}
