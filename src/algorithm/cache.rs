use crate::algorithm::bitset::CellMask;
use crate::algorithm::placement::unique_placements;
use crate::spatial::shape::Shape;
use std::collections::HashMap;
use std::rc::Rc;

/// Key for caching placement lists
///
/// Placements depend only on the shape and the region's dimensions, so
/// regions of equal size share one entry per shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PlacementKey {
    shape_id: usize,
    width: usize,
    height: usize,
}

impl PlacementKey {
    /// Create a key for a shape identifier and region size
    pub const fn new(shape_id: usize, width: usize, height: usize) -> Self {
        Self {
            shape_id,
            width,
            height,
        }
    }
}

/// Memoization cache for placement enumeration
///
/// Owned by the orchestrator and lent to both solvers. Shapes never change
/// during a run, so entries are never invalidated. Lists are shared through
/// `Rc` because a search holds the lists of every demanded shape at once.
#[derive(Default)]
pub struct PlacementCache {
    /// Key to placement list mapping
    placements: HashMap<PlacementKey, Rc<[CellMask]>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl PlacementCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached result or compute and store new one
    ///
    /// Uses the provided closure to compute placements only when
    /// the key is not already cached.
    pub fn get_or_compute<F>(&mut self, key: PlacementKey, compute_fn: F) -> Rc<[CellMask]>
    where
        F: FnOnce() -> Vec<CellMask>,
    {
        use std::collections::hash_map::Entry;

        match self.placements.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Rc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Rc::clone(entry.insert(compute_fn().into()))
            }
        }
    }

    /// Unique placements of `shape` in a `width × height` region, fewest cells first
    pub fn placements_for(&mut self, shape: &Shape, width: usize, height: usize) -> Rc<[CellMask]> {
        self.get_or_compute(PlacementKey::new(shape.id(), width, height), || {
            let mut placements = unique_placements(shape, width, height);
            placements.sort_by_key(CellMask::count);
            placements
        })
    }

    /// Number of cached lists
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Test if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
