//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use polypack::io::configuration::{
        CLOCK_CHECK_INTERVAL, DEFAULT_INPUT, MAX_REGION_CELLS, MIN_REGIONS_FOR_PROGRESS,
        PROGRESS_BAR_WIDTH,
    };

    // Tests that defaults stay within usable bounds
    #[test]
    fn test_configuration_bounds() {
        assert!(!DEFAULT_INPUT.is_empty());
        assert!(MAX_REGION_CELLS >= 64 * 64);
        assert!(CLOCK_CHECK_INTERVAL > 0);
        assert!(PROGRESS_BAR_WIDTH > 0);
        assert!(MIN_REGIONS_FOR_PROGRESS >= 1);
    }
}
