use crate::spatial::shape::Shape;
use std::collections::BTreeMap;

/// Declared shapes compacted to dense indices `0..n`
///
/// Shape identifiers in puzzle input may be sparse. Solvers address shapes
/// by position, so the catalog orders them by ascending declared id and
/// translates positional region counts accordingly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

/// A positive count that names no declared shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndeclaredCount {
    /// Position of the count, which is the undeclared identifier
    pub shape: usize,
    /// Requested number of copies
    pub count: usize,
}

impl ShapeCatalog {
    /// Compact shapes keyed by declared identifier
    pub fn from_declared(declared: BTreeMap<usize, Shape>) -> Self {
        Self {
            shapes: declared.into_values().collect(),
        }
    }

    /// Shapes in dense order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Test if no shape was declared
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Dense index of a declared identifier
    pub fn dense_index(&self, declared_id: usize) -> Option<usize> {
        self.shapes
            .binary_search_by_key(&declared_id, Shape::id)
            .ok()
    }

    /// Translate counts aligned to declared ids into counts aligned to dense indices
    ///
    /// Shapes without a positional count get zero copies.
    ///
    /// # Errors
    ///
    /// Returns the first positive count whose position is not a declared id
    pub fn remap_counts(
        &self,
        positional: &[usize],
    ) -> std::result::Result<Vec<usize>, UndeclaredCount> {
        if let Some((shape, &count)) = positional
            .iter()
            .enumerate()
            .find(|&(id, &count)| count > 0 && self.dense_index(id).is_none())
        {
            return Err(UndeclaredCount { shape, count });
        }

        Ok(self
            .shapes
            .iter()
            .map(|shape| positional.get(shape.id()).copied().unwrap_or(0))
            .collect())
    }
}
