#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    const SAMPLE: [(i32, i32, i32); 3] = [(0, 0, 10), (20, 20, 5), (10, 0, 12)];

    #[test]
    fn test_sample_scenarios_through_public_api() {
        let index = build_index(&SAMPLE).unwrap();

        let expected = [
            (
                Point::new(0, 0),
                "Best link station for point 0,0 is 0,0 with power 100.0".to_string(),
            ),
            (
                Point::new(100, 100),
                "No link station within reach for point 100,100".to_string(),
            ),
            (
                Point::new(15, 10),
                format!(
                    "Best link station for point 15,10 is 10,0 with power {:?}",
                    (12.0 - 125_f64.sqrt()).powi(2)
                ),
            ),
            (
                Point::new(18, 18),
                format!(
                    "Best link station for point 18,18 is 20,20 with power {:?}",
                    (5.0 - 8_f64.sqrt()).powi(2)
                ),
            ),
        ];

        for (point, text) in expected {
            let pruned = query_pruned(&index, point);
            let exact = query_exact(&SAMPLE, point).unwrap();
            assert_eq!(pruned.to_string(), text);
            assert_eq!(exact.to_string(), text);
        }
    }

    #[test]
    fn test_sample_powers_are_close_to_reference() {
        let index = build_index(&SAMPLE).unwrap();
        let p = query_pruned(&index, Point::new(15, 10)).power();
        assert!((p - 0.6718).abs() < 1e-3, "power at 15,10 was {p}");
        let p = query_pruned(&index, Point::new(18, 18)).power();
        assert!((p - 4.7157).abs() < 1e-3, "power at 18,18 was {p}");
    }

    #[test]
    fn test_negative_reach_is_reported() {
        let stations = [(0, 0, 10), (3, 3, -1)];
        assert_eq!(
            build_index(&stations).unwrap_err(),
            StationError::NegativeReach { x: 3, y: 3, reach: -1 }
        );
        assert!(query_exact(&stations, Point::new(0, 0)).is_err());
    }

    #[test]
    fn test_solvers_behind_trait_objects() {
        let stations: Vec<Station> = SAMPLE
            .iter()
            .map(|&s| Station::try_from(s).unwrap())
            .collect();
        let index = PrunedSearchIndex::build(&stations);
        let exact = ExactEvaluator::new(&stations);
        let solvers: [&dyn Solver; 2] = [&exact, &index];

        for solver in solvers {
            assert_eq!(solver.solve(Point::new(18, 18)).station(), Some(Point::new(20, 20)));
        }
    }
}
