//! The departure register.

use std::fmt;

use tracing::debug;

use crate::domain::{BoardTime, Departure};

use super::error::RegistryError;

/// The station's live departure board.
///
/// Owns every registered [`Departure`] and the simulated clock, and enforces
/// the board's invariants: train numbers are unique, the clock never moves
/// backwards, and departures whose effective time has passed are retired.
///
/// Read operations that need an ordering return a freshly ordered view; the
/// underlying collection stays in insertion order.
///
/// # Examples
///
/// ```
/// use dispatch_board::board::DepartureBoard;
/// use dispatch_board::domain::{BoardTime, Departure};
///
/// let mut board = DepartureBoard::new();
/// let noon = BoardTime::new(12, 0).unwrap();
/// board.register(Departure::new(Some(noon), "L1", "23", "Trondheim").unwrap()).unwrap();
///
/// assert!(board.has_train_number("23"));
///
/// // Advancing past the departure retires it
/// board.advance_time(BoardTime::new(12, 30).unwrap()).unwrap();
/// assert!(!board.has_train_number("23"));
/// ```
pub struct DepartureBoard {
    departures: Vec<Departure>,
    current_time: BoardTime,
}

impl DepartureBoard {
    /// Create an empty board with the clock at 00:00.
    pub fn new() -> Self {
        Self {
            departures: Vec::new(),
            current_time: BoardTime::MIDNIGHT,
        }
    }

    /// Register a departure.
    ///
    /// Rejects a duplicate train number, and any departure time earlier
    /// than one minute past the board clock: the earliest acceptable time
    /// is exactly `current_time + 1`.
    pub fn register(&mut self, departure: Departure) -> Result<(), RegistryError> {
        if self.has_train_number(departure.train_number()) {
            return Err(RegistryError::DuplicateTrain(
                departure.train_number().to_owned(),
            ));
        }

        let earliest = self.current_time.plus_minutes(1);
        if departure.departure_time() < earliest {
            return Err(RegistryError::DepartsBeforeEarliest {
                departure: departure.departure_time(),
                earliest,
            });
        }

        debug!(
            train = %departure.train_number(),
            departs = %departure.departure_time(),
            "registered departure"
        );
        self.departures.push(departure);
        Ok(())
    }

    /// True if a departure with this train number exists.
    pub fn has_train_number(&self, train_number: &str) -> bool {
        self.departures
            .iter()
            .any(|d| d.train_number() == train_number)
    }

    /// True if any departure goes to this destination (exact match).
    pub fn has_destination(&self, destination: &str) -> bool {
        self.departures
            .iter()
            .any(|d| d.destination() == destination)
    }

    /// Look up a departure by train number.
    ///
    /// A miss is a normal outcome, not an error.
    pub fn find_by_number(&self, train_number: &str) -> Option<&Departure> {
        self.departures
            .iter()
            .find(|d| d.train_number() == train_number)
    }

    /// Look up a departure by train number for mutation (track, delay).
    pub fn find_by_number_mut(&mut self, train_number: &str) -> Option<&mut Departure> {
        self.departures
            .iter_mut()
            .find(|d| d.train_number() == train_number)
    }

    /// All departures to a destination, ordered by effective departure time.
    pub fn find_by_destination(&self, destination: &str) -> Vec<&Departure> {
        let mut matches: Vec<&Departure> = self
            .departures
            .iter()
            .filter(|d| d.destination() == destination)
            .collect();
        matches.sort_by_key(|d| d.effective_departure());
        matches
    }

    /// Human-readable listing of all train numbers, lexicographically ordered.
    pub fn train_numbers(&self) -> String {
        let mut numbers: Vec<&str> = self.departures.iter().map(|d| d.train_number()).collect();
        numbers.sort_unstable();
        format!(
            "The register contains the following train numbers:\n[{}]",
            numbers.join(", ")
        )
    }

    /// Advance the board clock and retire departed trains.
    ///
    /// The clock only moves forward; an earlier time is rejected and the
    /// board is unchanged. On success, every departure whose effective
    /// departure time is before `new_time + 1` minute is removed.
    pub fn advance_time(&mut self, new_time: BoardTime) -> Result<(), RegistryError> {
        if new_time < self.current_time {
            return Err(RegistryError::ClockRollback {
                attempted: new_time,
                current: self.current_time,
            });
        }

        self.current_time = new_time;
        let retired = self.retire_departed();
        if retired > 0 {
            debug!(retired, now = %self.current_time, "retired departed trains");
        }
        Ok(())
    }

    /// Remove every departure that is no longer in the future.
    ///
    /// "In the future" means the effective departure time (schedule plus
    /// delay) is at least one minute past the board clock, the same
    /// boundary registration enforces.
    fn retire_departed(&mut self) -> usize {
        let cutoff = self.current_time.plus_minutes(1);
        let before = self.departures.len();
        self.departures.retain(|d| d.effective_departure() >= cutoff);
        before - self.departures.len()
    }

    /// Remove the departure with this train number, if present.
    ///
    /// A no-op if no such departure exists.
    pub fn remove_by_number(&mut self, train_number: &str) {
        self.departures.retain(|d| d.train_number() != train_number);
    }

    /// All departures ordered by scheduled (not effective) departure time.
    ///
    /// Returns `None` when the board holds no departures at all, so callers
    /// can special-case the empty board display.
    pub fn sorted(&self) -> Option<Vec<&Departure>> {
        if self.departures.is_empty() {
            return None;
        }
        let mut all: Vec<&Departure> = self.departures.iter().collect();
        all.sort_by_key(|d| d.departure_time());
        Some(all)
    }

    /// The board's current simulated time.
    pub fn current_time(&self) -> BoardTime {
        self.current_time
    }

    /// Number of registered departures.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// True if no departures are registered.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

impl Default for DepartureBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists every departure's full attribute dump in departure time order.
impl fmt::Display for DepartureBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The register contains the following train departures:")?;
        let mut all: Vec<&Departure> = self.departures.iter().collect();
        all.sort_by_key(|d| d.departure_time());
        for departure in all {
            write!(f, "\n{departure:?}")?;
        }
        Ok(())
    }
}
