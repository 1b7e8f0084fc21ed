//! Staged construction of a [`PrunedSearchIndex`].

use crate::error::StationResult;
use crate::pruned::PrunedSearchIndex;
use crate::station::{IndexedStation, Point, Station};

/// Collects stations one at a time, then builds the index.
///
/// Stations are validated as they are added, so [`IndexBuilder::build`]
/// cannot fail.
///
/// # Example
/// ```
/// use linkreach::{IndexBuilder, Point};
///
/// let mut builder = IndexBuilder::with_capacity(3);
/// builder.add(0, 0, 10)?.add(20, 20, 5)?.add(10, 0, 12)?;
/// assert!(builder.add(1, 1, -1).is_err());
///
/// let index = builder.build();
/// assert_eq!(index.len(), 3);
/// assert_eq!(index.query(Point::new(0, 0)).power(), 100.0);
/// # Ok::<(), linkreach::StationError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder {
    stations: Vec<IndexedStation>,
}

impl IndexBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a builder with room for `capacity` stations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stations: Vec::with_capacity(capacity),
        }
    }

    /// Adds a station centered at `(x, y)` with the given reach.
    ///
    /// # Errors
    /// Returns [`StationError::NegativeReach`](crate::StationError::NegativeReach)
    /// if `reach < 0`; the builder is left unchanged.
    pub fn add(&mut self, x: i32, y: i32, reach: i32) -> StationResult<&mut Self> {
        let station = Station::new(Point::new(x, y), reach)?;
        Ok(self.push(station))
    }

    /// Adds an already validated station.
    pub fn push(&mut self, station: Station) -> &mut Self {
        let ordinal = self.stations.len();
        self.stations.push(IndexedStation::new(station, ordinal));
        self
    }

    /// Number of stations added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if no station was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Consumes the builder and sorts the stations into an index.
    #[must_use]
    pub fn build(self) -> PrunedSearchIndex {
        PrunedSearchIndex::from_indexed(self.stations)
    }
}

impl Extend<Station> for IndexBuilder {
    fn extend<I: IntoIterator<Item = Station>>(&mut self, iter: I) {
        for station in iter {
            let _ = self.push(station);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundaryAxis, StationError};

    #[test]
    fn test_new_builder_is_empty() {
        let builder = IndexBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_rejected_station_is_not_added() {
        let mut builder = IndexBuilder::with_capacity(2);
        let _ = builder.add(0, 0, 3).unwrap();
        let err = builder.add(7, 8, -2).unwrap_err();
        assert_eq!(err, StationError::NegativeReach { x: 7, y: 8, reach: -2 });
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_ordinals_follow_insertion_order() {
        let mut builder = IndexBuilder::new();
        builder.extend([
            Station::new(Point::new(9, 0), 1).unwrap(),
            Station::new(Point::new(0, 0), 1).unwrap(),
        ]);
        let index = builder.build();
        let sorted = index.sorted_by(BoundaryAxis::XMin);
        assert_eq!(sorted[0].station().center(), Point::new(0, 0));
        assert_eq!(sorted[0].ordinal(), 1);
        assert_eq!(sorted[1].ordinal(), 0);
    }

    #[test]
    fn test_builder_matches_direct_build() {
        let stations = [
            Station::new(Point::new(0, 0), 10).unwrap(),
            Station::new(Point::new(20, 20), 5).unwrap(),
            Station::new(Point::new(10, 0), 12).unwrap(),
        ];
        let mut builder = IndexBuilder::new();
        builder.extend(stations);
        let staged = builder.build();
        let direct = PrunedSearchIndex::build(&stations);
        for axis in BoundaryAxis::ALL {
            assert_eq!(staged.sorted_by(axis), direct.sorted_by(axis));
        }
    }
}
