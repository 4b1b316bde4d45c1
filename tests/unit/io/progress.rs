//! Tests for region progress tracking

#[cfg(test)]
mod tests {
    use polypack::io::progress::ProgressManager;
    use polypack::spatial::region::Region;

    // Tests the bar lifecycle over a batch of regions
    #[test]
    fn test_progress_counts_regions() {
        let pm = ProgressManager::hidden();
        pm.initialize(3);
        for region in [Region::new(2, 2, vec![1]), Region::new(4, 4, vec![0, 1])] {
            pm.start_region(&region);
            pm.complete_region();
        }
        assert_eq!(pm.completed(), 2);
        pm.finish();
    }

    // Tests that reinitializing resets the position
    #[test]
    fn test_initialize_resets_position() {
        let pm = ProgressManager::default();
        pm.initialize(1);
        pm.complete_region();
        assert_eq!(pm.completed(), 1);

        pm.initialize(5);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    #[test]
    fn test_suspend_returns_value() {
        let pm = ProgressManager::hidden();
        pm.initialize(2);
        assert_eq!(pm.suspend(|| 42), 42);
        pm.finish();
    }
}
