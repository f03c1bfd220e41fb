//! The departure register: uniqueness, time-monotonicity, and retirement.
//!
//! [`DepartureBoard`] owns the registered departures and the simulated
//! clock. Everything stateful about the board lives here; entity-level
//! validation lives in `domain`.

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::DepartureBoard;
