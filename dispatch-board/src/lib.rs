//! Station train-dispatch board.
//!
//! An in-memory departure board for a single station: operators register
//! departures, assign tracks, record delays, search by number or
//! destination, and advance a simulated clock that retires departed trains.

pub mod board;
pub mod console;
pub mod domain;
