//! Activity entity and priority types.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Priority of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(PlanError::InvalidPriority {
                token: s.to_string(),
            }),
        }
    }
}

/// Parse an `HH:MM` wall-clock time.
///
/// # Errors
/// Returns [`PlanError::InvalidTime`] when the text is not a valid `HH:MM`
/// time.
pub fn parse_time(text: &str) -> Result<NaiveTime, PlanError> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(|_| PlanError::InvalidTime {
        text: text.to_string(),
    })
}

/// A single plan entry on the day timeline.
///
/// The interval is half-open: an activity occupies `[start, end)`, so two
/// activities touching at an endpoint do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Activity {
    /// Create a new activity, not yet completed.
    ///
    /// Interval and name validity are checked by [`PlanRegistry::add`],
    /// not here.
    ///
    /// [`PlanRegistry::add`]: crate::registry::PlanRegistry::add
    pub fn new(
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            priority,
            completed: false,
        }
    }

    /// Check if this activity's interval overlaps another's.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} : {} [{}]{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.name,
            self.priority,
            if self.completed { " Completed" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> NaiveTime {
        parse_time(text).unwrap()
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let a = Activity::new("a", t("09:00"), t("10:00"), Priority::High);
        let b = Activity::new("b", t("10:00"), t("11:00"), Priority::Low);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contained_interval_overlaps() {
        let a = Activity::new("a", t("09:00"), t("12:00"), Priority::High);
        let b = Activity::new("b", t("10:00"), t("11:00"), Priority::Low);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" MeDiUm ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(PlanError::InvalidPriority { .. })
        ));
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("9am").is_err());
        assert_eq!(parse_time("09:30").unwrap(), t("09:30"));
    }

    #[test]
    fn display_includes_completion_suffix() {
        let mut a = Activity::new("Gym", t("09:00"), t("10:00"), Priority::High);
        assert_eq!(a.to_string(), "09:00-10:00 : Gym [HIGH]");
        a.completed = true;
        assert_eq!(a.to_string(), "09:00-10:00 : Gym [HIGH] Completed");
    }
}
