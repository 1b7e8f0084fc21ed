//! Boundary-sorted pruning index.
//!
//! The index keeps four copies of the station set, each stably sorted by one
//! edge of the stations' bounding squares. A query binary-searches every
//! copy for the run of stations whose edge is compatible with the query
//! point, keeps the shortest run, and hands only that run to the exact
//! evaluator.
//!
//! Each run is a superset of the stations with positive power: a station
//! delivering power at `p` has `p` strictly inside its bounding square, so it
//! passes all four edge tests. The shortest single-axis run is therefore
//! safe to evaluate on its own.
//!
//! # Complexity
//! - Build: O(n log n), four stable sorts.
//! - Query: O(log n) for the four searches plus O(k) for the exact pass over
//!   the `k` surviving candidates. When every station overlaps the query
//!   point `k = n`.

use tracing::{debug, trace};

use crate::axis::{BoundaryAxis, ReachInterval, Side};
use crate::exact::ExactEvaluator;
use crate::result::QueryResult;
use crate::solver::Solver;
use crate::station::{IndexedStation, Point, Station};

/// Immutable pruning index over a fixed station set.
///
/// # Example
/// ```
/// use linkreach::{Point, PrunedSearchIndex, Solver, Station};
///
/// let stations = [
///     Station::new(Point::new(0, 0), 10).unwrap(),
///     Station::new(Point::new(20, 20), 5).unwrap(),
///     Station::new(Point::new(10, 0), 12).unwrap(),
/// ];
/// let index = PrunedSearchIndex::build(&stations);
///
/// let result = index.solve(Point::new(18, 18));
/// assert_eq!(result.station(), Some(Point::new(20, 20)));
/// assert!(!index.solve(Point::new(100, 100)).is_match());
/// ```
#[derive(Clone, Debug)]
pub struct PrunedSearchIndex {
    /// One stably sorted copy per axis, in `BoundaryAxis::ALL` order
    sorted: [Vec<IndexedStation>; 4],
}

impl PrunedSearchIndex {
    /// Builds the index from `stations`.
    ///
    /// Sorting is stable, so stations sharing a boundary value keep their
    /// input order. An empty slice yields an index that answers every query
    /// with [`QueryResult::NoStationInReach`].
    #[must_use]
    pub fn build(stations: &[Station]) -> Self {
        let indexed: Vec<IndexedStation> = stations
            .iter()
            .enumerate()
            .map(|(ordinal, &station)| IndexedStation::new(station, ordinal))
            .collect();
        Self::from_indexed(indexed)
    }

    pub(crate) fn from_indexed(indexed: Vec<IndexedStation>) -> Self {
        let sorted = BoundaryAxis::ALL.map(|axis| {
            let mut copy = indexed.clone();
            copy.sort_by_key(|station| axis.boundary(station));
            copy
        });
        debug!(stations = indexed.len(), "built pruned search index");
        Self { sorted }
    }

    /// Number of indexed stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted[0].len()
    }

    /// Returns `true` if the index holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted[0].is_empty()
    }

    /// Stations sorted ascending by `axis`' boundary.
    #[must_use]
    pub fn sorted_by(&self, axis: BoundaryAxis) -> &[IndexedStation] {
        &self.sorted[axis.index()]
    }

    /// Stations covered by `interval`.
    ///
    /// # Panics
    /// Panics if `interval` was not produced by this index.
    #[must_use]
    pub fn candidates(&self, interval: &ReachInterval) -> &[IndexedStation] {
        &self.sorted_by(interval.axis())[interval.range()]
    }

    /// Finds the best station at `point`.
    #[must_use]
    pub fn query(&self, point: Point) -> QueryResult {
        let Some(interval) = self.narrowest_interval(point) else {
            trace!(%point, "an axis excludes every station");
            return QueryResult::NoStationInReach { point };
        };
        if interval.is_empty() {
            trace!(%point, axis = ?interval.axis(), "narrowest interval is empty");
            return QueryResult::NoStationInReach { point };
        }

        trace!(%point, axis = ?interval.axis(), candidates = interval.len(), "evaluating candidates");
        ExactEvaluator::evaluate_indexed(self.candidates(&interval), point)
    }

    /// Shortest reach interval over all four axes.
    ///
    /// Returns `None` as soon as one axis rules out every station. Axes are
    /// visited in [`BoundaryAxis::ALL`] order and an interval only replaces
    /// the current one if it is strictly shorter.
    #[must_use]
    pub fn narrowest_interval(&self, point: Point) -> Option<ReachInterval> {
        let mut narrowest: Option<ReachInterval> = None;
        for axis in BoundaryAxis::ALL {
            let interval = self.reach_interval(axis, point)?;
            if narrowest.is_none_or(|best| interval.len() < best.len()) {
                narrowest = Some(interval);
            }
        }
        narrowest
    }

    /// Reach interval of `point` along `axis`.
    ///
    /// Lower-bound axes yield the prefix of stations whose edge is `<=` the
    /// query coordinate, upper-bound axes the suffix whose edge is `>=` it.
    /// `None` means the axis rules out every station.
    ///
    /// # Example
    /// ```
    /// use linkreach::{BoundaryAxis, Point, PrunedSearchIndex, Station};
    ///
    /// let stations = [
    ///     Station::new(Point::new(0, 0), 10).unwrap(),
    ///     Station::new(Point::new(20, 20), 5).unwrap(),
    ///     Station::new(Point::new(10, 0), 12).unwrap(),
    /// ];
    /// let index = PrunedSearchIndex::build(&stations);
    ///
    /// // x_min sorted: [-10, -2, 15]
    /// let interval = index.reach_interval(BoundaryAxis::XMin, Point::new(5, -11)).unwrap();
    /// assert_eq!(interval.range(), 0..2);
    ///
    /// // x_max sorted: [10, 22, 25]; nothing reaches x = 30
    /// assert!(index.reach_interval(BoundaryAxis::XMax, Point::new(30, 0)).is_none());
    /// ```
    #[must_use]
    pub fn reach_interval(&self, axis: BoundaryAxis, point: Point) -> Option<ReachInterval> {
        let entries = self.sorted_by(axis);
        let (first, last) = (entries.first()?, entries.last()?);
        let n = entries.len();
        let side = axis.rule().side;
        let v = axis.coordinate(point);

        let whole = match side {
            Side::Lower => v >= axis.boundary(last),
            Side::Upper => v <= axis.boundary(first),
        };
        if whole {
            return Some(ReachInterval::new(axis, 0, n));
        }

        let mid = match (transition(entries, axis, v), side) {
            (Some(mid), _) => mid,
            // Every edge sits at or below v; only a run equal to v can remain
            (None, Side::Upper) => n,
            (None, Side::Lower) => return None,
        };
        let edge = settle_plateau(entries, axis, mid, v);

        match side {
            Side::Lower => Some(ReachInterval::new(axis, 0, edge)),
            Side::Upper => (edge < n).then(|| ReachInterval::new(axis, edge, n)),
        }
    }
}

impl Solver for PrunedSearchIndex {
    fn solve(&self, point: Point) -> QueryResult {
        self.query(point)
    }
}

/// Smallest index whose edge exceeds `v` while its predecessor's does not.
///
/// The predecessor of index 0 counts as negative infinity. Returns `None`
/// when every edge is `<= v`.
fn transition(entries: &[IndexedStation], axis: BoundaryAxis, v: i64) -> Option<usize> {
    let (mut left, mut right) = (0, entries.len());
    while left < right {
        let mid = left + (right - left) / 2;
        let here = axis.boundary(&entries[mid]);
        let before = match mid {
            0 => i64::MIN,
            _ => axis.boundary(&entries[mid - 1]),
        };
        if here > v && before <= v {
            return Some(mid);
        }
        if here > v {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    None
}

/// Moves `edge` to the outer end of the equal-value run it borders.
///
/// Prefix edges advance over entries still `<= v`; suffix edges retreat over
/// entries equal to `v`, which satisfy the `>=` test.
fn settle_plateau(entries: &[IndexedStation], axis: BoundaryAxis, mut edge: usize, v: i64) -> usize {
    match axis.rule().side {
        Side::Lower => {
            while edge < entries.len() && axis.boundary(&entries[edge]) <= v {
                edge += 1;
            }
        }
        Side::Upper => {
            while edge > 0 && axis.boundary(&entries[edge - 1]) >= v {
                edge -= 1;
            }
        }
    }
    edge
}
