//! Weekday and time-of-day types for weekly teaching slots.
//!
//! A slot is a (weekday, start, end) triple with minute precision on a
//! 24-hour clock. Overlap uses half-open semantics: a slot that ends exactly
//! when another starts does not overlap it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Day of the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Mon")]
    Monday,
    #[serde(rename = "Tue")]
    Tuesday,
    #[serde(rename = "Wed")]
    Wednesday,
    #[serde(rename = "Thu")]
    Thursday,
    #[serde(rename = "Fri")]
    Friday,
    #[serde(rename = "Sat")]
    Saturday,
    #[serde(rename = "Sun")]
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Short English name, matching the wire format.
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    fn full_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when parsing weekday or time-of-day strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),
    #[error("invalid time of day (expected HH:MM): {0:?}")]
    InvalidTime(String),
}

impl FromStr for Weekday {
    type Err = TimeParseError;

    /// Accepts short ("Mon") or full ("Monday") English names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        for day in Weekday::ALL {
            if normalized == day.short_name().to_ascii_lowercase()
                || normalized == day.full_name().to_ascii_lowercase()
            {
                return Ok(day);
            }
        }
        Err(TimeParseError::UnknownWeekday(s.to_string()))
    }
}

/// Time of day with minute precision, stored as minutes since midnight.
///
/// Always in `0..1440`. Renders and parses as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

pub const MINUTES_PER_DAY: u16 = 24 * 60;

impl TimeOfDay {
    /// Build from an hour/minute pair. `None` if out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build from minutes since midnight. `None` if out of range.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeParseError::InvalidTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A weekly time slot: weekday plus half-open `[start, end)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeSlot {
    pub fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { day, start, end }
    }

    /// Whether the slot is well formed (`start < end`).
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Half-open interval overlap on the same day.
    ///
    /// Touching endpoints (one slot ends exactly when the other starts) do
    /// not count as overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_weekday_parse_short_and_full() {
        assert_eq!("Mon".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("FRI".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!(" sun ".parse::<Weekday>().unwrap(), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_parse_rejects_unknown() {
        let err = "Funday".parse::<Weekday>().unwrap_err();
        assert!(matches!(err, TimeParseError::UnknownWeekday(_)));
    }

    #[test]
    fn test_weekday_display_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(day.to_string().parse::<Weekday>().unwrap(), day);
        }
    }

    #[test]
    fn test_weekday_serde_short_names() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wed\"");
        let back: Weekday = serde_json::from_str("\"Wed\"").unwrap();
        assert_eq!(back, Weekday::Wednesday);
    }

    #[test]
    fn test_time_of_day_from_hm_ranges() {
        assert!(TimeOfDay::from_hm(23, 59).is_some());
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(12, 60).is_none());
    }

    #[test]
    fn test_time_of_day_parse_and_display() {
        let parsed: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!(parsed, t(9, 5));
        assert_eq!(parsed.to_string(), "09:05");
        assert_eq!("9:30".parse::<TimeOfDay>().unwrap(), t(9, 30));
    }

    #[test]
    fn test_time_of_day_parse_rejects_malformed() {
        for raw in ["", "0900", "25:00", "10:61", "ab:cd", "10:"] {
            assert!(raw.parse::<TimeOfDay>().is_err(), "should reject {:?}", raw);
        }
    }

    #[test]
    fn test_time_of_day_serde_string() {
        let json = serde_json::to_string(&t(14, 30)).unwrap();
        assert_eq!(json, "\"14:30\"");
        let back: TimeOfDay = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(back, t(14, 30));
    }

    #[test]
    fn test_time_of_day_ordering() {
        assert!(t(9, 0) < t(9, 1));
        assert!(t(10, 0) < t(11, 0));
    }

    #[test]
    fn test_slot_overlap_basic() {
        let a = TimeSlot::new(Weekday::Monday, t(9, 0), t(10, 0));
        let b = TimeSlot::new(Weekday::Monday, t(9, 30), t(10, 30));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_overlap_touching_endpoints_excluded() {
        let a = TimeSlot::new(Weekday::Monday, t(9, 0), t(10, 0));
        let b = TimeSlot::new(Weekday::Monday, t(10, 0), t(11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_slot_overlap_requires_same_day() {
        let a = TimeSlot::new(Weekday::Monday, t(9, 0), t(10, 0));
        let b = TimeSlot::new(Weekday::Tuesday, t(9, 0), t(10, 0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_slot_overlap_containment() {
        let outer = TimeSlot::new(Weekday::Friday, t(8, 0), t(12, 0));
        let inner = TimeSlot::new(Weekday::Friday, t(9, 0), t(10, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_slot_validity() {
        assert!(TimeSlot::new(Weekday::Monday, t(9, 0), t(10, 0)).is_valid());
        assert!(!TimeSlot::new(Weekday::Monday, t(10, 0), t(10, 0)).is_valid());
        assert!(!TimeSlot::new(Weekday::Monday, t(11, 0), t(10, 0)).is_valid());
    }
}
