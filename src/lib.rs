pub mod calendar;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod models;
pub mod report;
pub mod settings;

#[cfg(test)]
mod test_utils;

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

pub use models::Workout;
pub use report::InsightsReport;
pub use settings::{GoalUpdate, Preferences, SettingsError};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
  #[error("Failed to read workouts: {0}")]
  Io(#[from] io::Error),

  #[error("Invalid workout JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid settings: {0}")]
  Settings(#[from] SettingsError),
}

impl Serialize for ReportError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Report Runner
/// ---------------------------------------------------------------------------

/// Parse a JSON array of workouts, dropping records that fail validation
pub fn load_workouts<R: Read>(reader: R) -> Result<Vec<Workout>, ReportError> {
  let parsed: Vec<Workout> = serde_json::from_reader(reader)?;
  let total = parsed.len();

  let workouts: Vec<Workout> = parsed
    .into_iter()
    .enumerate()
    .filter_map(|(index, workout)| match workout.validate() {
      Ok(()) => Some(workout),
      Err(e) => {
        warn!(index, id = ?workout.id, error = %e, "skipping invalid workout");
        None
      }
    })
    .collect();

  info!(loaded = workouts.len(), skipped = total - workouts.len(), "workouts loaded");
  Ok(workouts)
}

pub fn generate_report<R: Read, Tz: TimeZone>(
  reader: R,
  prefs: &Preferences,
  reference: &DateTime<Tz>,
) -> Result<InsightsReport, ReportError> {
  let workouts = load_workouts(reader)?;
  Ok(InsightsReport::build(&workouts, prefs, reference))
}

/// Weekly workout insights from a JSON list of workouts
#[derive(Debug, Parser)]
#[command(name = "workout-insights", version)]
#[command(about = "Print weekly workout insights as JSON")]
pub struct Cli {
  /// JSON file holding an array of workouts; reads stdin when omitted
  pub input: Option<PathBuf>,
}

/// Read workouts from `cli.input` (stdin when absent) and print the insights
/// report as JSON.
pub fn run(cli: Cli) -> Result<(), ReportError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let prefs = Preferences::from_env()?;
  let now = Utc::now().with_timezone(&prefs.timezone());
  info!(
    weekly_goal = prefs.weekly_goal,
    utc_offset_minutes = prefs.utc_offset_minutes,
    "generating insights report"
  );

  let report = match cli.input {
    Some(path) => {
      info!(path = %path.display(), "reading workouts from file");
      generate_report(File::open(&path)?, &prefs, &now)?
    }
    None => generate_report(io::stdin().lock(), &prefs, &now)?,
  };

  println!("{}", serde_json::to_string_pretty(&report)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::reference_date;

  #[test]
  fn test_load_workouts_skips_invalid_records() {
    let json = r#"[
      {"userId": "u1", "activityId": "run", "activityName": "Running",
       "duration": 30, "caloriesBurned": 300, "date": "2026-02-16T07:00:00Z"},
      {"userId": "u1", "activityId": "run", "activityName": "Running",
       "duration": 0, "caloriesBurned": 0, "date": "2026-02-17T07:00:00Z"},
      {"userId": "", "activityId": "yoga", "activityName": "Yoga",
       "duration": 45, "caloriesBurned": 120, "date": "2026-02-17T07:00:00Z"}
    ]"#;
    let workouts = load_workouts(json.as_bytes()).unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].duration, 30);
  }

  #[test]
  fn test_load_workouts_rejects_malformed_json() {
    let err = load_workouts(r#"[{"userId": "u1"}]"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));

    let err = load_workouts(r#"{"not": "a list"}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid workout JSON"));
  }

  #[test]
  fn test_load_workouts_rejects_bad_date() {
    let json = r#"[{"userId": "u1", "activityId": "run", "activityName": "Running",
      "duration": 30, "caloriesBurned": 300, "date": "last tuesday"}]"#;
    assert!(matches!(load_workouts(json.as_bytes()), Err(ReportError::Json(_))));
  }

  #[test]
  fn test_generate_report_from_reader() {
    let json = r#"[
      {"userId": "u1", "activityId": "run", "activityName": "Running",
       "duration": 30, "caloriesBurned": 300, "date": "2026-02-16T07:00:00Z"}
    ]"#;
    let report =
      generate_report(json.as_bytes(), &Preferences::default(), &reference_date()).unwrap();
    assert_eq!(report.workout_goal.current, 1);
    assert_eq!(report.dashboard.total_workouts, 1);
  }

  #[test]
  fn test_cli_takes_optional_input_path() {
    let cli = Cli::try_parse_from(["workout-insights", "workouts.json"]).unwrap();
    assert_eq!(cli.input, Some(PathBuf::from("workouts.json")));

    let cli = Cli::try_parse_from(["workout-insights"]).unwrap();
    assert!(cli.input.is_none());
  }

  #[test]
  fn test_cli_help_is_not_a_path() {
    let err = Cli::try_parse_from(["workout-insights", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Cli::try_parse_from(["workout-insights", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
  }

  #[test]
  fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }

  #[test]
  fn test_report_error_serializes_as_message() {
    let err = ReportError::Settings(SettingsError::WeeklyGoalOutOfRange(9));
    assert_eq!(
      serde_json::to_string(&err).unwrap(),
      r#""Invalid settings: Weekly goal must be between 0 and 7 days, got 9""#
    );
  }
}
