use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 1440;
pub const MAX_NOTES_LENGTH: usize = 500;

/// A logged workout session as supplied by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub user_id: String,
  pub activity_id: String,
  pub activity_name: String,
  /// Minutes
  pub duration: u32,
  pub calories_burned: u32,
  pub date: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// ---------------------------------------------------------------------------
/// Boundary Validation
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
  #[error("Missing required field: {0}")]
  MissingField(&'static str),

  #[error("Duration must be between 1 and 1440 minutes, got {0}")]
  DurationOutOfRange(u32),

  #[error("Notes cannot exceed 500 characters, got {0}")]
  NotesTooLong(usize),
}

impl Serialize for ValidationError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl Workout {
  /// Check the record limits the calculators rely on.
  ///
  /// The aggregation functions assume validated input; records should pass
  /// through here where they enter the system.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.user_id.trim().is_empty() {
      return Err(ValidationError::MissingField("userId"));
    }
    if self.activity_id.trim().is_empty() {
      return Err(ValidationError::MissingField("activityId"));
    }
    if self.activity_name.trim().is_empty() {
      return Err(ValidationError::MissingField("activityName"));
    }
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration) {
      return Err(ValidationError::DurationOutOfRange(self.duration));
    }
    if let Some(notes) = &self.notes {
      let len = notes.chars().count();
      if len > MAX_NOTES_LENGTH {
        return Err(ValidationError::NotesTooLong(len));
      }
    }
    Ok(())
  }
}
