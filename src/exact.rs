//! Brute-force power evaluation over a candidate list.
//!
//! This is both a standalone O(n) solver and the last stage of
//! [`PrunedSearchIndex`](crate::PrunedSearchIndex), which hands it the
//! candidates that survive pruning. Both paths share one selection loop so
//! they produce identical results for identical inputs.

use crate::result::QueryResult;
use crate::solver::Solver;
use crate::station::{IndexedStation, Point, Station};

/// Exact solver scanning every station it was given.
///
/// # Example
/// ```
/// use linkreach::{ExactEvaluator, Point, Solver, Station};
///
/// let stations = [
///     Station::new(Point::new(0, 0), 10).unwrap(),
///     Station::new(Point::new(10, 0), 12).unwrap(),
/// ];
/// let exact = ExactEvaluator::new(&stations);
/// let result = exact.solve(Point::new(0, 0));
/// assert_eq!(result.station(), Some(Point::new(0, 0)));
/// assert_eq!(result.power(), 100.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ExactEvaluator<'a> {
    stations: &'a [Station],
}

impl<'a> ExactEvaluator<'a> {
    /// Creates an evaluator over `stations`.
    #[must_use]
    pub const fn new(stations: &'a [Station]) -> Self {
        Self { stations }
    }

    /// Number of candidate stations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if there are no candidates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Evaluates `candidates` at `point` without building an evaluator.
    ///
    /// Strictly greater power replaces the current best, so among equal
    /// powers the earliest candidate wins. An empty slice yields
    /// [`QueryResult::NoStationInReach`].
    #[must_use]
    pub fn evaluate(candidates: &[Station], point: Point) -> QueryResult {
        best_link(candidates.iter().enumerate(), point)
    }

    /// Evaluates indexed candidates, breaking power ties by build ordinal.
    ///
    /// Candidates arrive in boundary-sorted order rather than build order;
    /// ranking ties by ordinal gives the same winner [`Self::evaluate`] picks
    /// on the unsorted station list.
    #[must_use]
    pub fn evaluate_indexed(candidates: &[IndexedStation], point: Point) -> QueryResult {
        best_link(
            candidates.iter().map(|c| (c.ordinal(), c.station())),
            point,
        )
    }
}

impl Solver for ExactEvaluator<'_> {
    fn solve(&self, point: Point) -> QueryResult {
        Self::evaluate(self.stations, point)
    }
}

/// Picks the highest-power station among `(ordinal, station)` pairs.
///
/// Ties on power go to the lower ordinal. Zero power never matches.
fn best_link<'a>(
    candidates: impl IntoIterator<Item = (usize, &'a Station)>,
    point: Point,
) -> QueryResult {
    let mut best: Option<(f64, usize, &'a Station)> = None;

    for (ordinal, station) in candidates {
        let power = station.power_at(point);
        let better = match best {
            Some((best_power, best_ordinal, _)) => {
                power > best_power || (power == best_power && ordinal < best_ordinal)
            }
            None => power > 0.0,
        };
        if better {
            best = Some((power, ordinal, station));
        }
    }

    match best {
        Some((power, _, station)) => QueryResult::Matched {
            point,
            station: station.center(),
            power,
        },
        None => QueryResult::NoStationInReach { point },
    }
}
