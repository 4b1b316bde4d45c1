//! Geometric data model
//!
//! This module contains the puzzle's spatial records:
//! - Polyomino shapes and their dihedral orientations
//! - Rectangular regions with per-shape demands
//! - Dense remapping of sparse shape identifiers

/// Dense shape catalog built from declared identifiers
pub mod catalog;
/// Target regions and their shape counts
pub mod region;
/// Shape normalization and orientation enumeration
pub mod shape;

pub use catalog::ShapeCatalog;
pub use region::Region;
pub use shape::{Orientation, Shape};
