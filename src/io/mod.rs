//! Input/output operations and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Named constants and defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Puzzle text parsing
pub mod parse;
/// Progress display during evaluation
pub mod progress;
