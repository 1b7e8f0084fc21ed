//! Query outcome and its rendered form.

use std::fmt;

use crate::station::Point;

/// Outcome of a single best-station query.
///
/// The `Display` form is the string callers compare:
///
/// ```
/// use linkreach::{Point, QueryResult};
/// let hit = QueryResult::Matched {
///     point: Point::new(0, 0),
///     station: Point::new(0, 0),
///     power: 100.0,
/// };
/// assert_eq!(hit.to_string(), "Best link station for point 0,0 is 0,0 with power 100.0");
///
/// let miss = QueryResult::NoStationInReach { point: Point::new(100, 100) };
/// assert_eq!(miss.to_string(), "No link station within reach for point 100,100");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[expect(
    variant_size_differences,
    reason = "the miss variant only carries the query point"
)]
pub enum QueryResult {
    /// A station delivers positive power at the query point.
    Matched {
        /// The query point.
        point: Point,
        /// Center of the winning station.
        station: Point,
        /// Power delivered by the winning station, always `> 0`.
        power: f64,
    },
    /// Every station delivers zero power at the query point.
    NoStationInReach {
        /// The query point.
        point: Point,
    },
}

impl QueryResult {
    /// The point this result answers.
    #[must_use]
    pub const fn point(&self) -> Point {
        match *self {
            Self::Matched { point, .. } | Self::NoStationInReach { point } => point,
        }
    }

    /// Center of the winning station, if any.
    #[must_use]
    pub const fn station(&self) -> Option<Point> {
        match *self {
            Self::Matched { station, .. } => Some(station),
            Self::NoStationInReach { .. } => None,
        }
    }

    /// Winning power, or `0.0` when nothing is in reach.
    #[must_use]
    pub const fn power(&self) -> f64 {
        match *self {
            Self::Matched { power, .. } => power,
            Self::NoStationInReach { .. } => 0.0,
        }
    }

    /// Returns `true` when a station was found.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched { point, station, power } => write!(
                f,
                "Best link station for point {point} is {station} with power {power:?}"
            ),
            Self::NoStationInReach { point } => {
                write!(f, "No link station within reach for point {point}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let hit = QueryResult::Matched {
            point: Point::new(18, 18),
            station: Point::new(20, 20),
            power: 4.5,
        };
        assert!(hit.is_match());
        assert_eq!(hit.point(), Point::new(18, 18));
        assert_eq!(hit.station(), Some(Point::new(20, 20)));
        assert_eq!(hit.power(), 4.5);

        let miss = QueryResult::NoStationInReach { point: Point::new(1, 2) };
        assert!(!miss.is_match());
        assert_eq!(miss.station(), None);
        assert_eq!(miss.power(), 0.0);
    }

    #[test]
    fn test_whole_power_keeps_decimal_point() {
        let hit = QueryResult::Matched {
            point: Point::new(0, 0),
            station: Point::new(0, 0),
            power: 100.0,
        };
        assert_eq!(
            hit.to_string(),
            "Best link station for point 0,0 is 0,0 with power 100.0"
        );
        let unit = QueryResult::Matched { point: Point::new(0, 0), station: Point::new(0, 0), power: 1.0 };
        assert!(unit.to_string().ends_with("with power 1.0"), "{unit}");
    }

    #[test]
    fn test_fractional_power_rendering() {
        let hit = QueryResult::Matched {
            point: Point::new(-1, 2),
            station: Point::new(3, -4),
            power: 0.25,
        };
        assert_eq!(
            hit.to_string(),
            "Best link station for point -1,2 is 3,-4 with power 0.25"
        );
    }
}
