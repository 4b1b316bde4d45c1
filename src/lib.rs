//! Polyomino packing feasibility with two cross-checked solvers
//!
//! Given shapes drawn on a grid and rectangular regions that must each hold
//! a number of copies of every shape (any rotation or reflection), decide
//! which regions can be packed without overlap. A pruned bitmask
//! backtracker and a Dancing Links exact-cover search answer independently;
//! disagreement between them marks a defect.

#![forbid(unsafe_code)]

/// Placement enumeration, both solvers and their orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Shapes, orientations and regions
pub mod spatial;

pub use algorithm::{fits_bitmask, fits_exact_cover};
pub use io::error::{PackError, Result};
