/// Bitmask backtracking solver
pub mod backtrack;
/// Cell bitsets used as placement masks
pub mod bitset;
/// Search budgets, verdicts and node metering
pub mod budget;
/// Caching of placement lists per shape and region size
pub mod cache;
/// Dancing Links mesh and search
pub mod dancing;
/// Resolution of region counts into per-shape demands
pub mod demand;
/// Exact-cover solver entry point
pub mod exact_cover;
/// Orchestration of both solvers as a cross-check
pub mod executor;
/// Exact-cover matrix construction
pub mod model;
/// Placement enumeration for shape orientations
pub mod placement;

pub use backtrack::fits_bitmask;
pub use exact_cover::fits_exact_cover;
