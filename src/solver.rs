//! The query contract shared by every solver.

use crate::result::QueryResult;
use crate::station::Point;

/// Answers best-station queries for a fixed station set.
///
/// Implementations take `&self` only, so a solver can be shared across
/// threads and queried concurrently.
pub trait Solver {
    /// Finds the station delivering the most power at `point`.
    fn solve(&self, point: Point) -> QueryResult;
}
