//! Value types for query points and stations.

use std::fmt;

use crate::error::{StationError, StationResult};

/// A point on the integer plane.
///
/// Used both as query input and as a station's center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point at `(x, y)`.
    ///
    /// # Example
    /// ```
    /// use linkreach::Point;
    /// let p = Point::new(3, -4);
    /// assert_eq!(p.to_string(), "3,-4");
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Differences are taken in `i64` so extreme coordinates cannot overflow.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A link station: a center plus the radius beyond which its power is zero.
///
/// Stations are only created through [`Station::new`], which rejects a
/// negative reach, so every `Station` value satisfies `reach >= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i32, i32, i32)", into = "(i32, i32, i32)")
)]
pub struct Station {
    center: Point,
    reach: i32,
}

impl Station {
    /// Creates a station centered at `center` reaching `reach` units.
    ///
    /// # Errors
    /// Returns [`StationError::NegativeReach`] if `reach < 0`.
    ///
    /// # Example
    /// ```
    /// use linkreach::{Point, Station};
    /// assert!(Station::new(Point::new(0, 0), 10).is_ok());
    /// assert!(Station::new(Point::new(0, 0), -1).is_err());
    /// ```
    pub const fn new(center: Point, reach: i32) -> StationResult<Self> {
        if reach < 0 {
            return Err(StationError::NegativeReach {
                x: center.x,
                y: center.y,
                reach,
            });
        }
        Ok(Self { center, reach })
    }

    /// The station's center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The reach radius, always non-negative.
    #[must_use]
    pub const fn reach(&self) -> i32 {
        self.reach
    }

    /// Signal power delivered at `point`.
    ///
    /// `(reach - d)^2` inside the reach disc, exactly `0.0` at distance `reach`
    /// and beyond.
    #[must_use]
    pub fn power_at(&self, point: Point) -> f64 {
        let reach = f64::from(self.reach);
        let distance = self.center.distance(point);
        if distance > reach {
            0.0
        } else {
            (reach - distance).powi(2)
        }
    }
}

impl TryFrom<(i32, i32, i32)> for Station {
    type Error = StationError;

    fn try_from((x, y, reach): (i32, i32, i32)) -> StationResult<Self> {
        Self::new(Point::new(x, y), reach)
    }
}

impl From<Station> for (i32, i32, i32) {
    fn from(station: Station) -> Self {
        (station.center.x, station.center.y, station.reach)
    }
}

/// A station with its bounding square precomputed for boundary sorting.
///
/// The square `[x_min, x_max] x [y_min, y_max]` over-approximates the reach
/// disc: every point with positive power lies strictly inside it, but not
/// every point inside it has positive power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedStation {
    station: Station,
    ordinal: usize,
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
}

impl IndexedStation {
    /// Wraps `station`, which sat at position `ordinal` of the build input.
    #[must_use]
    pub fn new(station: Station, ordinal: usize) -> Self {
        let Point { x, y } = station.center();
        let (x, y, reach) = (i64::from(x), i64::from(y), i64::from(station.reach()));
        Self {
            station,
            ordinal,
            x_min: x - reach,
            x_max: x + reach,
            y_min: y - reach,
            y_max: y + reach,
        }
    }

    /// The wrapped station.
    #[must_use]
    pub const fn station(&self) -> &Station {
        &self.station
    }

    /// Position of the station in the sequence the index was built from.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Left edge of the bounding square.
    #[must_use]
    pub const fn x_min(&self) -> i64 {
        self.x_min
    }

    /// Right edge of the bounding square.
    #[must_use]
    pub const fn x_max(&self) -> i64 {
        self.x_max
    }

    /// Bottom edge of the bounding square.
    #[must_use]
    pub const fn y_min(&self) -> i64 {
        self.y_min
    }

    /// Top edge of the bounding square.
    #[must_use]
    pub const fn y_max(&self) -> i64 {
        self.y_max
    }
}
