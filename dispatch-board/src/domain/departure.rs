//! A single scheduled train departure.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{BoardTime, ValidationError};

/// Track value meaning "no track assigned yet".
pub const UNASSIGNED_TRACK: i32 = -1;

/// One scheduled train movement at the station.
///
/// The schedule core (train number, departure time, line, destination) is
/// validated once at construction and never changes. Track and delay are the
/// mutable operational state.
///
/// Identity is the train number alone: two departures with the same number
/// compare equal regardless of every other field, and hashing follows
/// equality.
///
/// # Examples
///
/// ```
/// use dispatch_board::domain::{BoardTime, Departure, UNASSIGNED_TRACK};
///
/// let time = BoardTime::new(12, 0).unwrap();
/// let departure = Departure::new(Some(time), "L1", "23", "Trondheim").unwrap();
///
/// assert_eq!(departure.track(), UNASSIGNED_TRACK);
/// assert_eq!(departure.delay(), BoardTime::MIDNIGHT);
///
/// // Blank fields are rejected
/// assert!(Departure::new(Some(time), "  ", "23", "Trondheim").is_err());
/// ```
#[derive(Clone)]
pub struct Departure {
    train_number: String,
    departure_time: BoardTime,
    line: String,
    destination: String,
    track: i32,
    delay: BoardTime,
}

impl Departure {
    /// Create a departure with no track assigned and no delay.
    ///
    /// The departure time must be present and the three string fields must
    /// be non-blank; each field is checked independently so the error names
    /// the offending one.
    pub fn new(
        departure_time: Option<BoardTime>,
        line: &str,
        train_number: &str,
        destination: &str,
    ) -> Result<Self, ValidationError> {
        let departure_time = departure_time.ok_or(ValidationError::MissingTime)?;
        verify_not_blank(line, "line")?;
        verify_not_blank(train_number, "train number")?;
        verify_not_blank(destination, "destination")?;

        Ok(Self {
            train_number: train_number.to_owned(),
            departure_time,
            line: line.to_owned(),
            destination: destination.to_owned(),
            track: UNASSIGNED_TRACK,
            delay: BoardTime::MIDNIGHT,
        })
    }

    /// Returns the unique train number.
    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    /// Returns the scheduled departure time.
    pub fn departure_time(&self) -> BoardTime {
        self.departure_time
    }

    /// Returns the line the train runs on.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Returns the end destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the assigned track, or [`UNASSIGNED_TRACK`].
    pub fn track(&self) -> i32 {
        self.track
    }

    /// Returns the current delay as a time of day.
    pub fn delay(&self) -> BoardTime {
        self.delay
    }

    /// Assign a departure track.
    ///
    /// Tracks may repeat across departures; there is no collision check.
    pub fn set_track(&mut self, track: i32) -> Result<(), ValidationError> {
        if track < 0 {
            return Err(ValidationError::NegativeTrack);
        }
        self.track = track;
        Ok(())
    }

    /// Record a delay, replacing any previous one.
    ///
    /// There is no upper bound; a delay may push the effective departure
    /// past midnight, where it wraps (see [`effective_departure`]).
    ///
    /// [`effective_departure`]: Departure::effective_departure
    pub fn set_delay(&mut self, delay: Option<BoardTime>) -> Result<(), ValidationError> {
        self.delay = delay.ok_or(ValidationError::MissingTime)?;
        Ok(())
    }

    /// Returns true if a nonzero delay has been recorded.
    pub fn is_delayed(&self) -> bool {
        self.delay != BoardTime::MIDNIGHT
    }

    /// The scheduled time pushed by the delay's hour and minute components.
    ///
    /// Component-wise addition wrapping within the day: a 23:30 departure
    /// with a 01:00 delay is effectively at 00:30.
    pub fn effective_departure(&self) -> BoardTime {
        self.departure_time
            .plus_hours(i64::from(self.delay.hour()))
            .plus_minutes(i64::from(self.delay.minute()))
    }

    /// Fixed-width row for the departure board display.
    ///
    /// An unassigned track and a zero delay render as blank cells rather
    /// than as `-1` and `00:00`.
    pub fn board_row(&self) -> String {
        format!(
            "| {:<14.14} | {:<4.4} | {:<6.6} | {:<15.15} | {:<5.5} | {:<5.5} |",
            self.departure_time.to_string(),
            self.line,
            self.train_number,
            self.destination,
            self.track_cell(),
            self.delay_cell(),
        )
    }

    fn track_cell(&self) -> String {
        if self.track == UNASSIGNED_TRACK {
            String::new()
        } else {
            self.track.to_string()
        }
    }

    fn delay_cell(&self) -> String {
        if self.is_delayed() {
            self.delay.to_string()
        } else {
            String::new()
        }
    }
}

fn verify_not_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}

/// Full attribute dump for diagnostics: all six fields with raw values,
/// track as the stored integer (including `-1`) and delay even when zero.
impl fmt::Debug for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Departure")
            .field("train_number", &self.train_number)
            .field("departure_time", &self.departure_time)
            .field("line", &self.line)
            .field("destination", &self.destination)
            .field("track", &self.track)
            .field("delay", &self.delay)
            .finish()
    }
}

impl PartialEq for Departure {
    fn eq(&self, other: &Self) -> bool {
        self.train_number == other.train_number
    }
}

impl Eq for Departure {}

impl Hash for Departure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.train_number.hash(state);
    }
}
