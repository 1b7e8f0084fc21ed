//! Boundary axes and the reach intervals computed along them.
//!
//! Each station's bounding square has four edges. The index keeps one array
//! sorted by each edge, and every [`BoundaryAxis`] maps to a fixed rule
//! describing how a query point is compared against that edge:
//!
//! | axis   | field   | coordinate | compatible when | interval |
//! |--------|---------|------------|-----------------|----------|
//! | `XMin` | `x_min` | `x`        | `x_min <= x`    | prefix   |
//! | `XMax` | `x_max` | `x`        | `x_max >= x`    | suffix   |
//! | `YMin` | `y_min` | `y`        | `y_min <= y`    | prefix   |
//! | `YMax` | `y_max` | `y`        | `y_max >= y`    | suffix   |

use std::ops::Range;

use crate::station::{IndexedStation, Point};

/// One edge of a station's bounding square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a bounding square has exactly four edges"
)]
pub enum BoundaryAxis {
    /// Left edge, compared against the query's x.
    XMin,
    /// Right edge, compared against the query's x.
    XMax,
    /// Bottom edge, compared against the query's y.
    YMin,
    /// Top edge, compared against the query's y.
    YMax,
}

/// Which end of a sorted array holds the compatible stations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Lower bounds: compatible stations form a prefix `[0, k)`.
    Lower,
    /// Upper bounds: compatible stations form a suffix `[k, n)`.
    Upper,
}

/// Dispatch row for one axis.
#[derive(Debug)]
pub(crate) struct AxisRule {
    pub(crate) boundary: fn(&IndexedStation) -> i64,
    pub(crate) coordinate: fn(Point) -> i64,
    pub(crate) side: Side,
}

fn point_x(point: Point) -> i64 {
    i64::from(point.x)
}

fn point_y(point: Point) -> i64 {
    i64::from(point.y)
}

/// Rows in `BoundaryAxis` declaration order.
static AXIS_RULES: [AxisRule; 4] = [
    AxisRule {
        boundary: IndexedStation::x_min,
        coordinate: point_x,
        side: Side::Lower,
    },
    AxisRule {
        boundary: IndexedStation::x_max,
        coordinate: point_x,
        side: Side::Upper,
    },
    AxisRule {
        boundary: IndexedStation::y_min,
        coordinate: point_y,
        side: Side::Lower,
    },
    AxisRule {
        boundary: IndexedStation::y_max,
        coordinate: point_y,
        side: Side::Upper,
    },
];

impl BoundaryAxis {
    /// All axes in query order. Earlier axes win ties on interval size.
    pub const ALL: [Self; 4] = [Self::XMin, Self::XMax, Self::YMin, Self::YMax];

    /// Position of this axis in [`Self::ALL`] and in per-axis tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn rule(self) -> &'static AxisRule {
        &AXIS_RULES[self.index()]
    }

    /// The bounding-square edge this axis sorts by.
    #[must_use]
    pub fn boundary(self, station: &IndexedStation) -> i64 {
        (self.rule().boundary)(station)
    }

    /// The query coordinate compared against [`Self::boundary`].
    #[must_use]
    pub fn coordinate(self, point: Point) -> i64 {
        (self.rule().coordinate)(point)
    }

    /// Returns `true` for `XMin` and `YMin`, whose intervals are prefixes.
    #[must_use]
    pub fn is_lower_bound(self) -> bool {
        self.rule().side == Side::Lower
    }

    /// Whether `station` passes this axis' containment test for `point`.
    #[must_use]
    pub fn admits(self, station: &IndexedStation, point: Point) -> bool {
        let bound = self.boundary(station);
        let v = self.coordinate(point);
        match self.rule().side {
            Side::Lower => bound <= v,
            Side::Upper => bound >= v,
        }
    }
}

/// Half-open index range `[start, end)` into the array sorted by `axis`.
///
/// Every station with positive power at the query point lies inside the
/// interval; stations outside it are excluded by this axis alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachInterval {
    axis: BoundaryAxis,
    start: usize,
    end: usize,
}

impl ReachInterval {
    pub(crate) fn new(axis: BoundaryAxis, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "reach interval {start}..{end} is inverted");
        Self { axis, start, end }
    }

    /// Axis whose sorted array this interval indexes.
    #[must_use]
    pub const fn axis(&self) -> BoundaryAxis {
        self.axis
    }

    /// First index in the interval.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the interval.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of candidate stations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if no station survives this axis.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The interval as a slice range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Station;

    fn indexed(x: i32, y: i32, reach: i32) -> IndexedStation {
        IndexedStation::new(Station::new(Point::new(x, y), reach).unwrap(), 0)
    }

    #[test]
    fn test_rules_follow_declaration_order() {
        for (i, axis) in BoundaryAxis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_boundary_and_coordinate() {
        let s = indexed(10, 0, 12);
        let p = Point::new(3, -7);
        assert_eq!(BoundaryAxis::XMin.boundary(&s), -2);
        assert_eq!(BoundaryAxis::XMax.boundary(&s), 22);
        assert_eq!(BoundaryAxis::YMin.boundary(&s), -12);
        assert_eq!(BoundaryAxis::YMax.boundary(&s), 12);
        assert_eq!(BoundaryAxis::XMin.coordinate(p), 3);
        assert_eq!(BoundaryAxis::XMax.coordinate(p), 3);
        assert_eq!(BoundaryAxis::YMin.coordinate(p), -7);
        assert_eq!(BoundaryAxis::YMax.coordinate(p), -7);
    }

    #[test]
    fn test_sides() {
        assert!(BoundaryAxis::XMin.is_lower_bound());
        assert!(!BoundaryAxis::XMax.is_lower_bound());
        assert!(BoundaryAxis::YMin.is_lower_bound());
        assert!(!BoundaryAxis::YMax.is_lower_bound());
    }

    #[test]
    fn test_admits_touching_edges() {
        // Square [-5, 5] x [-5, 5]
        let s = indexed(0, 0, 5);
        assert!(BoundaryAxis::XMin.admits(&s, Point::new(-5, 0)));
        assert!(!BoundaryAxis::XMin.admits(&s, Point::new(-6, 0)));
        assert!(BoundaryAxis::XMax.admits(&s, Point::new(5, 0)));
        assert!(!BoundaryAxis::XMax.admits(&s, Point::new(6, 0)));
        assert!(BoundaryAxis::YMin.admits(&s, Point::new(0, -5)));
        assert!(!BoundaryAxis::YMax.admits(&s, Point::new(0, 6)));
    }

    #[test]
    fn test_interval_len() {
        let interval = ReachInterval::new(BoundaryAxis::YMax, 2, 7);
        assert_eq!(interval.len(), 5);
        assert_eq!(interval.range(), 2..7);
        assert!(!interval.is_empty());
        assert!(ReachInterval::new(BoundaryAxis::XMin, 0, 0).is_empty());
    }
}
