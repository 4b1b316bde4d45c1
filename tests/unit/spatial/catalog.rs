//! Tests for compacting sparse shape identifiers

#[cfg(test)]
mod tests {
    use polypack::spatial::catalog::{ShapeCatalog, UndeclaredCount};
    use polypack::spatial::shape::Shape;
    use std::collections::BTreeMap;

    fn catalog(ids: &[usize]) -> ShapeCatalog {
        let declared: BTreeMap<usize, Shape> = ids
            .iter()
            .map(|&id| (id, Shape::from_rows(id, &["#"]).expect("valid shape")))
            .collect();
        ShapeCatalog::from_declared(declared)
    }

    #[test]
    fn test_dense_order() {
        let catalog = catalog(&[5, 0, 2]);
        let ids: Vec<usize> = catalog.shapes().iter().map(Shape::id).collect();
        assert_eq!(ids, vec![0, 2, 5]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.dense_index(2), Some(1));
        assert_eq!(catalog.dense_index(5), Some(2));
        assert_eq!(catalog.dense_index(1), None);
    }

    // Counts at gaps are dropped when zero and filled with zero when absent
    #[test]
    fn test_remap_counts() {
        let catalog = catalog(&[0, 2, 5]);
        assert_eq!(catalog.remap_counts(&[1, 0, 3]), Ok(vec![1, 3, 0]));
        assert_eq!(catalog.remap_counts(&[0, 0, 0, 0, 0, 4]), Ok(vec![0, 0, 4]));
        assert_eq!(catalog.remap_counts(&[]), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn test_undeclared_count() {
        let catalog = catalog(&[0, 2]);
        assert_eq!(
            catalog.remap_counts(&[1, 2, 1]),
            Err(UndeclaredCount { shape: 1, count: 2 })
        );
        assert_eq!(
            catalog.remap_counts(&[0, 0, 0, 1]),
            Err(UndeclaredCount { shape: 3, count: 1 })
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ShapeCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.remap_counts(&[0, 0]), Ok(Vec::new()));
    }
}
