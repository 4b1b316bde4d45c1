//! Tests for resolving region counts into shape demands

#[cfg(test)]
mod tests {
    use polypack::algorithm::demand::{Demand, demands, exceeds_area, required_cells};
    use polypack::spatial::region::Region;
    use polypack::spatial::shape::Shape;

    fn shapes() -> Vec<Shape> {
        vec![
            Shape::from_rows(0, &["##", "##"]).expect("valid shape"),
            Shape::from_rows(1, &["#.", "##"]).expect("valid shape"),
        ]
    }

    // Zero counts are dropped and the rest keep their dense index
    #[test]
    fn test_demands_skip_zero_counts() {
        let shapes = shapes();
        let region = Region::new(4, 4, vec![0, 2]);
        let resolved = demands(&region, &shapes).expect("all counts resolve");

        assert_eq!(resolved.len(), 1);
        let only = resolved.first().expect("one demand");
        assert_eq!(only.index, 1);
        assert_eq!(only.count, 2);
        assert_eq!(only.cells(), 6);
    }

    #[test]
    fn test_count_past_shape_list() {
        let shapes = shapes();
        assert!(demands(&Region::new(4, 4, vec![1, 0, 1]), &shapes).is_none());
        // A zero count past the end is harmless
        assert!(demands(&Region::new(4, 4, vec![1, 0, 0]), &shapes).is_some());
    }

    #[test]
    fn test_area_check() {
        let shapes = shapes();
        let exact = Region::new(3, 3, vec![1, 1]);
        let resolved = demands(&exact, &shapes).expect("all counts resolve");
        assert_eq!(required_cells(&resolved), 7);
        assert!(!exceeds_area(&exact, &resolved));

        let crowded = Region::new(3, 3, vec![2, 1]);
        let resolved = demands(&crowded, &shapes).expect("all counts resolve");
        assert_eq!(required_cells(&resolved), 11);
        assert!(exceeds_area(&crowded, &resolved));
    }

    // Huge counts saturate instead of wrapping past the area check
    #[test]
    fn test_huge_counts_exceed_area() {
        let shapes = shapes();
        let region = Region::new(2, 2, vec![usize::MAX / 2, usize::MAX]);
        let resolved = demands(&region, &shapes).expect("all counts resolve");

        assert!(resolved.iter().all(|demand| demand.cells() == usize::MAX));
        assert_eq!(required_cells(&resolved), usize::MAX);
        assert!(exceeds_area(&region, &resolved));

        let tromino = shapes.get(1).expect("two shapes");
        let single = Demand {
            index: 1,
            shape: tromino,
            count: usize::MAX / 2,
        };
        assert_eq!(single.cells(), usize::MAX);
    }
}
