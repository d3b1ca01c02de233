//! Scheduled triggers given on the command line as `WEEK:SOURCE`.

use std::fmt;
use std::str::FromStr;

/// A trigger to fire in a given week.
///
/// The source is kept as written; unrecognized sources are reported when the
/// week runs rather than rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTrigger {
    pub week: u32,
    pub source: String,
}

impl FromStr for ScheduledTrigger {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, source) = s
            .split_once(':')
            .ok_or_else(|| ScheduleParseError::MissingSeparator(s.to_string()))?;
        let week = week
            .trim()
            .parse()
            .map_err(|_| ScheduleParseError::InvalidWeek(week.to_string()))?;
        let source = source.trim();
        if source.is_empty() {
            return Err(ScheduleParseError::EmptySource(s.to_string()));
        }
        Ok(Self {
            week,
            source: source.to_string(),
        })
    }
}

/// Error parsing a `WEEK:SOURCE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    MissingSeparator(String),
    InvalidWeek(String),
    EmptySource(String),
}

impl fmt::Display for ScheduleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleParseError::MissingSeparator(s) => {
                write!(f, "invalid trigger '{}', expected 'WEEK:SOURCE'", s)
            }
            ScheduleParseError::InvalidWeek(s) => write!(f, "invalid week: '{}'", s),
            ScheduleParseError::EmptySource(s) => write!(f, "missing trigger source in '{}'", s),
        }
    }
}

impl std::error::Error for ScheduleParseError {}

/// Triggers scheduled for `week`, in command-line order.
pub fn due_in_week(schedule: &[ScheduledTrigger], week: u32) -> impl Iterator<Item = &ScheduledTrigger> {
    schedule.iter().filter(move |t| t.week == week)
}
