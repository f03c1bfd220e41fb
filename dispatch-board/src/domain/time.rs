//! Time-of-day handling for the departure board.
//!
//! The board runs on a simulated clock and shows times as "HH:MM". This
//! module provides a time-of-day type with no date component: the board
//! treats every time as belonging to the same service day, and arithmetic
//! wraps around midnight.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Error returned when building or parsing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day on the departure board.
///
/// Delays are carried as a `BoardTime` as well: a delay of "01:30" means one
/// hour and thirty minutes added to the scheduled departure.
///
/// Arithmetic wraps around midnight. A departure at 23:59 pushed one minute
/// lands on 00:00; there is no notion of "the next day".
///
/// # Examples
///
/// ```
/// use dispatch_board::domain::BoardTime;
///
/// let time = BoardTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
///
/// let wrapped = BoardTime::new(23, 59).unwrap().plus_minutes(1);
/// assert_eq!(wrapped, BoardTime::MIDNIGHT);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardTime(NaiveTime);

impl BoardTime {
    /// The start of the service day, 00:00.
    pub const MIDNIGHT: BoardTime = BoardTime(NaiveTime::MIN);

    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(BoardTime)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch_board::domain::BoardTime;
    ///
    /// assert!(BoardTime::parse_hhmm("00:00").is_ok());
    /// assert!(BoardTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(BoardTime::parse_hhmm("1430").is_err());
    /// assert!(BoardTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add minutes, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Add hours, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }
}

impl fmt::Debug for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_components() {
        let t = BoardTime::new(0, 0).unwrap();
        assert_eq!(t, BoardTime::MIDNIGHT);

        let t = BoardTime::new(23, 59).unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(BoardTime::new(24, 0).is_err());
        assert!(BoardTime::new(0, 60).is_err());
        assert!(BoardTime::new(99, 99).is_err());
    }

    #[test]
    fn parse_valid_times() {
        let t = BoardTime::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = BoardTime::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);

        let t = BoardTime::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(BoardTime::parse_hhmm("1430").is_err());
        assert!(BoardTime::parse_hhmm("14:3").is_err());
        assert!(BoardTime::parse_hhmm("14:300").is_err());

        // Missing colon
        assert!(BoardTime::parse_hhmm("14-30").is_err());
        assert!(BoardTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(BoardTime::parse_hhmm("ab:cd").is_err());
        assert!(BoardTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(BoardTime::parse_hhmm("24:00").is_err());
        assert!(BoardTime::parse_hhmm("12:60").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(BoardTime::MIDNIGHT.to_string(), "00:00");
        assert_eq!(BoardTime::new(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(BoardTime::new(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            format!("{:?}", BoardTime::new(12, 30).unwrap()),
            "BoardTime(12:30)"
        );
    }

    #[test]
    fn ordering() {
        let t1 = BoardTime::new(10, 0).unwrap();
        let t2 = BoardTime::new(10, 1).unwrap();
        let t3 = BoardTime::new(11, 0).unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(BoardTime::MIDNIGHT < t1);
    }

    #[test]
    fn plus_minutes_simple() {
        let t = BoardTime::new(10, 30).unwrap();
        assert_eq!(t.plus_minutes(45), BoardTime::new(11, 15).unwrap());
    }

    #[test]
    fn plus_minutes_wraps_at_midnight() {
        let t = BoardTime::new(23, 59).unwrap();
        assert_eq!(t.plus_minutes(1), BoardTime::MIDNIGHT);

        let t = BoardTime::new(23, 30).unwrap();
        assert_eq!(t.plus_minutes(60), BoardTime::new(0, 30).unwrap());
    }

    #[test]
    fn plus_hours_wraps_at_midnight() {
        let t = BoardTime::new(23, 30).unwrap();
        assert_eq!(t.plus_hours(1), BoardTime::new(0, 30).unwrap());
    }

    #[test]
    fn hash_consistent() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(BoardTime::new(14, 30).unwrap());

        assert!(set.contains(&BoardTime::new(14, 30).unwrap()));
        assert!(!set.contains(&BoardTime::new(14, 31).unwrap()));
    }
}
