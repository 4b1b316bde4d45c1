use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the cells of one region
///
/// Cell `(x, y)` of a `W×H` region is bit `y * W + x`. Masks built for the
/// same region always have the same length, which lets set operations work
/// word-by-word on the backing storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellMask {
    bits: BitVec,
}

impl CellMask {
    /// Create a mask with no cells present
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Create a mask from cell indices, ignoring indices out of range
    pub fn from_cells(cell_count: usize, cells: impl IntoIterator<Item = usize>) -> Self {
        let mut mask = Self::new(cell_count);
        for cell in cells {
            mask.insert(cell);
        }
        mask
    }

    /// Insert a cell index
    pub fn insert(&mut self, cell: usize) {
        if cell < self.bits.len() {
            self.bits.set(cell, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Number of cells the mask ranges over
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether the two masks share no cell
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .all(|(a, b)| a & b == 0)
    }

    /// Add every cell of `other` in-place
    pub fn union_with(&mut self, other: &Self) {
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a |= b;
        }
    }

    /// Remove every cell of `other` in-place
    pub fn remove_all(&mut self, other: &Self) {
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a &= !b;
        }
    }

    /// Iterate over occupied cell indices in ascending order
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all cell indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.cells().collect()
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellMask({} cells: {:?})", self.count(), self.to_vec())
    }
}
