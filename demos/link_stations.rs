//! Find the best link station for a handful of points with both solvers.
//!
//! Run with `RUST_LOG=linkreach=trace` to see which axis each query prunes on.
use linkreach::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), StationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stations = [(0, 0, 10), (20, 20, 5), (10, 0, 12)];
    let points = [(0, 0), (100, 100), (15, 10), (18, 18)].map(Point::from);

    let index = build_index(&stations)?;
    for point in points {
        println!("[ExactEvaluator] {}", query_exact(&stations, point)?);
        println!("[PrunedSearchIndex] {}", query_pruned(&index, point));
    }
    Ok(())
}
