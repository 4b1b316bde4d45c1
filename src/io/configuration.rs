//! Solver constants and runtime configuration defaults

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT: &str = "input.txt";

// Bounds the size of a single placement mask and of the DLX cell columns
/// Maximum region size, in cells, accepted from puzzle input
pub const MAX_REGION_CELLS: usize = 1 << 20;

/// Search nodes visited between wall-clock checks when a time limit is set
pub const CLOCK_CHECK_INTERVAL: u64 = 1024;

// Progress bar display settings
/// Width of the region progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Fewest regions for which a progress bar is worth drawing
pub const MIN_REGIONS_FOR_PROGRESS: usize = 2;
