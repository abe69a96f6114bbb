//! Predefined activity catalog
//!
//! The record store seeds these on first setup; workout entry uses the
//! per-minute burn rate to prefill calories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
  Cardio,
  Strength,
  Flexibility,
}

impl std::fmt::Display for ActivityCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Cardio => write!(f, "cardio"),
      Self::Strength => write!(f, "strength"),
      Self::Flexibility => write!(f, "flexibility"),
    }
  }
}

impl std::str::FromStr for ActivityCategory {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "cardio" => Ok(Self::Cardio),
      "strength" => Ok(Self::Strength),
      "flexibility" => Ok(Self::Flexibility),
      _ => Err(format!("Unknown activity category: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  pub id: &'static str,
  pub name: &'static str,
  pub category: ActivityCategory,
  pub avg_calories_per_min: u32,
  pub description: &'static str,
}

impl Activity {
  /// Calories for a session of `duration` minutes at the average burn rate
  pub fn estimate_calories(&self, duration: u32) -> u32 {
    duration.saturating_mul(self.avg_calories_per_min)
  }
}

const fn activity(
  id: &'static str,
  name: &'static str,
  category: ActivityCategory,
  avg_calories_per_min: u32,
  description: &'static str,
) -> Activity {
  Activity { id, name, category, avg_calories_per_min, description }
}

pub static PREDEFINED_ACTIVITIES: [Activity; 15] = [
  // Cardio
  activity("run", "Running", ActivityCategory::Cardio, 10, "Outdoor or treadmill running"),
  activity("cycle", "Cycling", ActivityCategory::Cardio, 8, "Road cycling or stationary bike"),
  activity("swim", "Swimming", ActivityCategory::Cardio, 11, "Lap swimming"),
  activity("walk", "Walking", ActivityCategory::Cardio, 4, "Brisk walking or hiking"),
  activity("jump-rope", "Jump Rope", ActivityCategory::Cardio, 12, "Skipping rope"),
  activity("rowing", "Rowing", ActivityCategory::Cardio, 9, "Rowing machine or water rowing"),
  activity("elliptical", "Elliptical", ActivityCategory::Cardio, 7, "Elliptical machine"),
  // Strength
  activity("weights", "Weight Training", ActivityCategory::Strength, 6, "Free weights or machines"),
  activity(
    "bodyweight",
    "Bodyweight Exercises",
    ActivityCategory::Strength,
    5,
    "Push-ups, pull-ups, squats, etc.",
  ),
  activity("crossfit", "CrossFit", ActivityCategory::Strength, 9, "High-intensity functional fitness"),
  activity("powerlifting", "Powerlifting", ActivityCategory::Strength, 5, "Squat, bench press, deadlift"),
  // Flexibility & mind-body
  activity("yoga", "Yoga", ActivityCategory::Flexibility, 3, "Various yoga styles"),
  activity("pilates", "Pilates", ActivityCategory::Flexibility, 4, "Core strengthening and flexibility"),
  activity("stretch", "Stretching", ActivityCategory::Flexibility, 2, "Static or dynamic stretching"),
  activity("tai-chi", "Tai Chi", ActivityCategory::Flexibility, 3, "Gentle martial art movements"),
];

pub fn activities_by_category(category: ActivityCategory) -> Vec<&'static Activity> {
  PREDEFINED_ACTIVITIES
    .iter()
    .filter(|a| a.category == category)
    .collect()
}

pub fn activity_by_id(id: &str) -> Option<&'static Activity> {
  PREDEFINED_ACTIVITIES.iter().find(|a| a.id == id)
}

pub fn all_categories() -> [ActivityCategory; 3] {
  [
    ActivityCategory::Cardio,
    ActivityCategory::Strength,
    ActivityCategory::Flexibility,
  ]
}
