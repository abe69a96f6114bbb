//! Calendar primitives shared by every calculator
//!
//! Weeks run from Monday 00:00:00.000 through Sunday 23:59:59.999 in the
//! caller's time zone. Workout instants are stored in UTC and are converted
//! into that zone before any day or week comparison, so results never depend
//! on the host's local time zone.

use chrono::{
  DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday,
};

use crate::models::Workout;

/// Abbreviated names for the Monday-first calendar grid
pub const SHORT_DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Full names indexed Sunday = 0 (best-day numbering)
pub const DAY_NAMES: [&str; 7] = [
  "Sunday",
  "Monday",
  "Tuesday",
  "Wednesday",
  "Thursday",
  "Friday",
  "Saturday",
];

/// Longest run of nonexistent local time searched when resolving a wall clock
const MAX_GAP_HOURS: i64 = 48;

/// ---------------------------------------------------------------------------
/// Local Time Resolution
/// ---------------------------------------------------------------------------

/// Map a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times that
/// do not exist move forward to the first whole hour that does, which covers
/// DST gaps and zones that skipped an entire calendar day.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
  match tz.from_local_datetime(&naive) {
    LocalResult::Single(dt) => dt,
    LocalResult::Ambiguous(earliest, _) => earliest,
    LocalResult::None => (1..=MAX_GAP_HOURS)
      .find_map(|h| tz.from_local_datetime(&(naive + Duration::hours(h))).earliest())
      .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
  }
}

/// 00:00:00.000 of `date` in `tz`
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
  resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// 23:59:59.999 of `date` in `tz`
pub fn end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
  start_of_day(tz, date + Duration::days(1)) - Duration::milliseconds(1)
}

/// Calendar date of an instant as seen in `tz`
pub fn local_date<T: TimeZone, Tz: TimeZone>(instant: &DateTime<T>, tz: &Tz) -> NaiveDate {
  instant.with_timezone(tz).date_naive()
}

/// ---------------------------------------------------------------------------
/// Week Boundaries
/// ---------------------------------------------------------------------------

/// Monday of the week containing `date`. Sunday belongs to the week that
/// started six days earlier.
pub fn week_start_date(date: NaiveDate) -> NaiveDate {
  let days_back = match date.weekday() {
    Weekday::Sun => 6,
    other => other.number_from_monday() - 1,
  };
  date - Duration::days(days_back as i64)
}

/// Monday 00:00:00.000 of the week containing `reference`
pub fn monday_of<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Tz> {
  start_of_day(&reference.timezone(), week_start_date(reference.date_naive()))
}

/// Sunday 23:59:59.999 of the week containing `reference`
pub fn sunday_of<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Tz> {
  let sunday = week_start_date(reference.date_naive()) + Duration::days(6);
  end_of_day(&reference.timezone(), sunday)
}

/// Inclusive check against `[week_monday 00:00, week_monday + 6 23:59:59.999]`
pub fn is_in_week<T: TimeZone, Tz: TimeZone>(instant: &DateTime<T>, week_monday: &DateTime<Tz>) -> bool {
  WeekWindow::starting(week_monday).contains(instant)
}

/// A Monday-to-Sunday window in a fixed time zone
#[derive(Debug, Clone)]
pub struct WeekWindow<Tz: TimeZone> {
  pub start: DateTime<Tz>,
  pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> WeekWindow<Tz> {
  /// The week containing `reference`
  pub fn containing(reference: &DateTime<Tz>) -> Self {
    Self::from_monday(&reference.timezone(), week_start_date(reference.date_naive()))
  }

  /// The week beginning on the local date of `week_monday`; time of day is
  /// reset to midnight.
  pub fn starting(week_monday: &DateTime<Tz>) -> Self {
    Self::from_monday(&week_monday.timezone(), week_monday.date_naive())
  }

  pub fn from_monday(tz: &Tz, monday: NaiveDate) -> Self {
    Self {
      start: start_of_day(tz, monday),
      end: end_of_day(tz, monday + Duration::days(6)),
    }
  }

  pub fn contains<T: TimeZone>(&self, instant: &DateTime<T>) -> bool {
    let t = instant.naive_utc();
    t >= self.start.naive_utc() && t <= self.end.naive_utc()
  }

  /// Workouts whose `date` falls inside the window
  pub fn workouts_in<'a>(&self, workouts: &'a [Workout]) -> Vec<&'a Workout> {
    workouts.iter().filter(|w| self.contains(&w.date)).collect()
  }
}

/// ---------------------------------------------------------------------------
/// Labels and Arithmetic
/// ---------------------------------------------------------------------------

/// ISO-8601 week label, e.g. `2026-W08`.
///
/// The week belongs to the year of its Thursday, and the week number is the
/// Thursday's day-of-year divided by seven, rounded up.
pub fn iso_week_label(date: NaiveDate) -> String {
  let thursday = date + Duration::days(4 - date.weekday().number_from_monday() as i64);
  let week = (thursday.ordinal() + 6) / 7;
  format!("{}-W{:02}", thursday.year(), week)
}

/// Shift by whole calendar days, keeping the local time of day
pub fn add_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
  resolve_local(&date.timezone(), date.naive_local() + Duration::days(days))
}

/// Same year, month and day once both instants are viewed in `tz`
pub fn is_same_day<A: TimeZone, B: TimeZone, Tz: TimeZone>(
  a: &DateTime<A>,
  b: &DateTime<B>,
  tz: &Tz,
) -> bool {
  local_date(a, tz) == local_date(b, tz)
}

/// Abbreviated weekday name for the Monday-first grid
pub fn short_day_name(weekday: Weekday) -> &'static str {
  SHORT_DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// "45m", "1h", "1h 30m"
pub fn format_duration(minutes: u64) -> String {
  if minutes < 60 {
    return format!("{}m", minutes);
  }
  let hours = minutes / 60;
  let mins = minutes % 60;
  if mins > 0 {
    format!("{}h {}m", hours, mins)
  } else {
    format!("{}h", hours)
  }
}

/// ---------------------------------------------------------------------------
/// Rounding
/// ---------------------------------------------------------------------------

/// Round half away from zero. Every calculator rounds through here.
pub fn round_half_away(value: f64) -> i64 {
  value.round() as i64
}

/// `min(100, round(part / whole * 100))`, or 0 when `whole` is 0
pub fn capped_percentage(part: u64, whole: u64) -> u8 {
  if whole == 0 {
    return 0;
  }
  let pct = round_half_away(part as f64 / whole as f64 * 100.0);
  pct.clamp(0, 100) as u8
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
