//! Station validation errors.

use thiserror::Error;

/// Errors raised while constructing stations.
///
/// Index build and queries never fail; every precondition is checked when a
/// [`Station`](crate::Station) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StationError {
    /// The station's reach radius is below zero.
    #[error("station at {x},{y} has negative reach {reach}")]
    NegativeReach {
        /// Center x coordinate of the rejected station.
        x: i32,
        /// Center y coordinate of the rejected station.
        y: i32,
        /// The rejected reach value.
        reach: i32,
    },
}

/// Result alias for station construction.
pub type StationResult<T> = Result<T, StationError>;
