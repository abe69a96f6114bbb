pub mod activity;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod workout;

pub use activity::{Activity, ActivityCategory};
pub use dashboard::{ActivityBreakdown, DashboardStats};
pub use goals::{CalendarDay, GoalProgress, MotivationalFeedback, Tone, WeeklyActivityCalendar};
pub use insights::{
  AverageMetrics, BestDay, ConsistencyScore, PersonalBests, Trend, WeekOverWeekComparison,
  WeeklyTrendItem,
};
pub use workout::{ValidationError, Workout};
