use thiserror::Error;

use crate::geometry::Coord;


/// Failures of a search call or of grid construction.
/// An unreachable destination is not an error, searches return `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid request: {role} {coord} is {reason}")]
    InvalidRequest {
        role: Endpoint, // which endpoint was rejected
        coord: Coord,
        reason: RejectReason,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("accumulated cost overflowed at {0}")]
    CostOverflow(Coord),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Endpoint of a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    Start,
    Destination,
}

/// Why an endpoint was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum RejectReason {
    #[strum(serialize = "out of bounds")]
    OutOfBounds,
    #[strum(serialize = "blocked")]
    Blocked,
}

