//! Tests for placement memoization keyed by shape and region size

#[cfg(test)]
mod tests {
    use polypack::algorithm::bitset::CellMask;
    use polypack::algorithm::cache::{CacheStats, PlacementCache, PlacementKey};
    use polypack::spatial::shape::Shape;
    use std::rc::Rc;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = PlacementCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats, CacheStats::default());
    }

    // The closure runs only on a miss
    #[test]
    fn test_get_or_compute_counts_hits_and_misses() {
        let mut cache = PlacementCache::new();
        let key = PlacementKey::new(3, 4, 4);
        let mut calls = 0;

        let first = cache.get_or_compute(key, || {
            calls += 1;
            vec![CellMask::from_cells(16, [0, 1])]
        });
        let second = cache.get_or_compute(key, || {
            calls += 1;
            Vec::new()
        });

        assert_eq!(calls, 1);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
    }

    // Region size is part of the key
    #[test]
    fn test_different_sizes_are_separate_entries() {
        let mut cache = PlacementCache::new();
        let domino = Shape::from_rows(0, &["##"]).expect("valid shape");

        let small = cache.placements_for(&domino, 2, 2);
        let large = cache.placements_for(&domino, 3, 3);
        let again = cache.placements_for(&domino, 2, 2);

        assert_eq!(small.len(), 4);
        assert_eq!(large.len(), 12);
        assert!(Rc::ptr_eq(&small, &again));
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 2 });
    }

    #[test]
    fn test_placements_for_matches_shape() {
        let mut cache = PlacementCache::new();
        let tromino = Shape::from_rows(1, &["#.", "##"]).expect("valid shape");

        let placements = cache.placements_for(&tromino, 3, 3);
        assert_eq!(placements.len(), 16);
        assert!(placements.iter().all(|mask| mask.count() == 3));
    }

    // Shapes larger than the region are cached as an empty list
    #[test]
    fn test_oversize_shape_caches_empty_list() {
        let mut cache = PlacementCache::new();
        let bar = Shape::from_rows(0, &["####"]).expect("valid shape");

        assert!(cache.placements_for(&bar, 3, 3).is_empty());
        assert!(cache.placements_for(&bar, 3, 3).is_empty());
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 1 });
    }
}
