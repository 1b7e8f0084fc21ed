//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use linkreach::prelude::*;
//! ```

pub use crate::{
    ExactEvaluator, IndexBuilder, Point, PrunedSearchIndex, QueryResult, Solver, Station,
    StationError, build_index, query_exact, query_pruned,
};
