//! Tests for the exact-cover solver

#[cfg(test)]
mod tests {
    use polypack::algorithm::budget::{SearchBudget, Verdict};
    use polypack::algorithm::cache::{CacheStats, PlacementCache};
    use polypack::algorithm::exact_cover::{ExactCoverSolver, fits_exact_cover};
    use polypack::spatial::region::Region;
    use polypack::spatial::shape::Shape;

    fn shape(id: usize, rows: &[&str]) -> Shape {
        Shape::from_rows(id, rows).expect("valid shape")
    }

    #[test]
    fn test_square_scenarios() {
        let shapes = vec![shape(0, &["##", "##"])];
        let mut cache = PlacementCache::new();
        assert!(fits_exact_cover(&Region::new(2, 2, vec![1]), &shapes, &mut cache));
        assert!(!fits_exact_cover(&Region::new(3, 3, vec![2]), &shapes, &mut cache));
        assert!(fits_exact_cover(&Region::new(4, 2, vec![2]), &shapes, &mut cache));
    }

    #[test]
    fn test_l_trominoes_tile_two_by_three() {
        let shapes = vec![shape(0, &["#.", "##"])];
        let mut cache = PlacementCache::new();
        assert!(fits_exact_cover(&Region::new(2, 3, vec![2]), &shapes, &mut cache));
    }

    // Empty cells are allowed because cell columns are secondary
    #[test]
    fn test_partial_fill_fits() {
        let shapes = vec![shape(0, &["#.", "##"]), shape(1, &["##"])];
        let mut cache = PlacementCache::new();
        assert!(fits_exact_cover(&Region::new(4, 4, vec![2, 3]), &shapes, &mut cache));
    }

    #[test]
    fn test_immediate_rejections() {
        let mut cache = PlacementCache::new();

        let bar = vec![shape(0, &["####"])];
        let region = Region::new(3, 3, vec![1]);
        let outcome = ExactCoverSolver::new(&region, &bar)
            .solve(&mut cache, SearchBudget::UNLIMITED);
        assert_eq!(outcome.verdict, Verdict::DoesNotFit);
        assert_eq!(outcome.nodes, 0);

        let missing = vec![shape(0, &["#"])];
        let region = Region::new(3, 3, vec![0, 1]);
        let outcome = ExactCoverSolver::new(&region, &missing)
            .solve(&mut cache, SearchBudget::UNLIMITED);
        assert_eq!(outcome.verdict, Verdict::DoesNotFit);
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn test_area_reject_skips_enumeration() {
        let shapes = vec![shape(0, &["###", "###"])];
        let mut cache = PlacementCache::new();
        assert!(!fits_exact_cover(&Region::new(3, 3, vec![2]), &shapes, &mut cache));
        assert_eq!(cache.stats, CacheStats::default());
    }

    #[test]
    fn test_no_demands_fit_trivially() {
        let shapes = vec![shape(0, &["##"])];
        let mut cache = PlacementCache::new();
        let region = Region::new(1, 1, vec![0]);
        let outcome = ExactCoverSolver::new(&region, &shapes)
            .solve(&mut cache, SearchBudget::UNLIMITED);
        assert_eq!(outcome.verdict, Verdict::Fits);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_node_budget_exhausts() {
        let shapes = vec![shape(0, &["##", "##"])];
        let mut cache = PlacementCache::new();
        let outcome = ExactCoverSolver::new(&Region::new(4, 2, vec![2]), &shapes)
            .solve(&mut cache, SearchBudget::UNLIMITED.with_max_nodes(1));
        assert_eq!(outcome.verdict, Verdict::Exhausted);
        assert_eq!(outcome.nodes, 2);
    }

    // Hundreds of slot columns stay within the iterative search
    #[test]
    fn test_deep_search_fills_region() {
        let shapes = vec![shape(0, &["#"]), shape(1, &["##"])];
        let mut cache = PlacementCache::new();
        assert!(fits_exact_cover(&Region::new(20, 15, vec![200, 50]), &shapes, &mut cache));
    }

    #[test]
    fn test_huge_count_rejected_on_area() {
        let shapes = vec![shape(0, &["##"])];
        let mut cache = PlacementCache::new();
        assert!(!fits_exact_cover(&Region::new(2, 2, vec![usize::MAX / 2]), &shapes, &mut cache));
        assert!(cache.is_empty());
    }
}
