//! Register-level errors.
//!
//! These cover identity collisions and time-ordering violations. Entity
//! validation errors live in `domain`.

use crate::domain::BoardTime;

/// Errors from register operations.
///
/// Registration and clock updates either fully apply or fully reject; on
/// any of these errors the register is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A departure with this train number already exists
    #[error("a departure with train number {0} is already registered")]
    DuplicateTrain(String),

    /// The departure time is not in the future of the board clock
    #[error("departure time {departure} is before the earliest accepted time {earliest}")]
    DepartsBeforeEarliest {
        departure: BoardTime,
        earliest: BoardTime,
    },

    /// The board clock only moves forward
    #[error("the clock can not be set back: {attempted} is before {current}")]
    ClockRollback {
        attempted: BoardTime,
        current: BoardTime,
    },
}
