//! # linkreach - best link station lookup
//!
//! Given a fixed set of stations, each with a center and a reach radius,
//! find the station delivering the most power at a query point. Power is
//! `(reach - distance)^2` inside a station's reach and zero at or beyond it.
//!
//! ## Features
//!
//! - **Exact solver**: [`ExactEvaluator`] scans every station, O(n) per query
//! - **Pruned solver**: [`PrunedSearchIndex`] binary-searches four
//!   boundary-sorted arrays and evaluates only the shortest surviving run
//! - **Identical answers**: both solvers share the power function and the
//!   tie-break, so they render the same string for every query
//! - **Shareable**: a built index is immutable and can be queried from many
//!   threads at once
//!
//! ## Quick Start
//!
//! ```rust
//! use linkreach::prelude::*;
//!
//! let stations = [(0, 0, 10), (20, 20, 5), (10, 0, 12)];
//! let index = build_index(&stations)?;
//!
//! let hit = query_pruned(&index, Point::new(0, 0));
//! assert_eq!(hit.to_string(), "Best link station for point 0,0 is 0,0 with power 100.0");
//!
//! let miss = query_pruned(&index, Point::new(100, 100));
//! assert_eq!(miss.to_string(), "No link station within reach for point 100,100");
//!
//! // The brute-force path gives the same answer
//! assert_eq!(query_exact(&stations, Point::new(0, 0))?, hit);
//! # Ok::<(), StationError>(())
//! ```
//!
//! ## How It Works
//!
//! Every station is wrapped with its bounding square
//! `[x - reach, x + reach] x [y - reach, y + reach]`. The index keeps one
//! copy of the stations sorted by each of the four square edges. For a query
//! point, each sorted copy contains a contiguous run of stations whose edge
//! does not rule the point out: a prefix for the `min` edges and a suffix for
//! the `max` edges. The run boundaries are found by binary search. The
//! shortest of the four runs still contains every station with positive
//! power, so the exact evaluator only has to scan that run.

pub mod axis;
pub mod builder;
pub mod error;
pub mod exact;
pub mod prelude;
pub mod pruned;
pub mod result;
pub mod solver;
pub mod station;

#[cfg(test)]
mod integration_test;

pub use axis::{BoundaryAxis, ReachInterval};
pub use builder::IndexBuilder;
pub use error::{StationError, StationResult};
pub use exact::ExactEvaluator;
pub use pruned::PrunedSearchIndex;
pub use result::QueryResult;
pub use solver::Solver;
pub use station::{IndexedStation, Point, Station};

/// Builds a pruning index from raw `(x, y, reach)` triples.
///
/// # Errors
/// Returns [`StationError::NegativeReach`] for the first triple with a
/// negative reach.
pub fn build_index(stations: &[(i32, i32, i32)]) -> StationResult<PrunedSearchIndex> {
    let mut builder = IndexBuilder::with_capacity(stations.len());
    for &(x, y, reach) in stations {
        let _ = builder.add(x, y, reach)?;
    }
    Ok(builder.build())
}

/// Answers one query by scanning every station, with no index.
///
/// # Errors
/// Returns [`StationError::NegativeReach`] for the first triple with a
/// negative reach.
pub fn query_exact(stations: &[(i32, i32, i32)], point: Point) -> StationResult<QueryResult> {
    let stations = stations
        .iter()
        .map(|&raw| Station::try_from(raw))
        .collect::<StationResult<Vec<_>>>()?;
    Ok(ExactEvaluator::evaluate(&stations, point))
}

/// Answers one query against a built index.
#[must_use]
pub fn query_pruned(index: &PrunedSearchIndex, point: Point) -> QueryResult {
    index.query(point)
}
