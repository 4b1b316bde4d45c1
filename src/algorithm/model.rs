use crate::algorithm::cache::PlacementCache;
use crate::spatial::region::Region;
use crate::spatial::shape::Shape;

/// Sparse 0/1 exact-cover matrix for one region
///
/// Columns `0..W*H` are region cells. They are secondary: at most one chosen
/// row may cover each, but none has to be covered, which forbids overlap
/// without demanding that the region be filled. The remaining columns are
/// instance slots, one per required copy of a shape. They are primary and
/// must each be covered exactly once.
///
/// Every placement of a shape is emitted once per slot of that shape, so
/// each copy is an independent primary column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExactCoverModel {
    column_count: usize,
    rows: Vec<Vec<usize>>,
    primary_columns: Vec<usize>,
}

impl ExactCoverModel {
    /// Build the matrix for placing the region's counts of `shapes`
    ///
    /// A count past the end of `shapes` still receives slot columns but no
    /// rows, so such a slot can never be covered.
    ///
    /// Every count becomes that many columns, so counts should already have
    /// passed [`crate::algorithm::demand::exceeds_area`].
    pub fn build(region: &Region, shapes: &[Shape], cache: &mut PlacementCache) -> Self {
        let mut next_column = region.cell_count();
        let mut rows = Vec::new();
        let mut primary_columns = Vec::new();

        for (index, &count) in region.counts().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let end = next_column.saturating_add(count);
            let slots: Vec<usize> = (next_column..end).collect();
            next_column = end;
            primary_columns.extend_from_slice(&slots);

            let Some(shape) = shapes.get(index) else {
                continue;
            };
            let placements = cache.placements_for(shape, region.width(), region.height());
            for placement in placements.iter() {
                let cells = placement.to_vec();
                for &slot in &slots {
                    let mut row = Vec::with_capacity(cells.len() + 1);
                    row.extend_from_slice(&cells);
                    row.push(slot);
                    rows.push(row);
                }
            }
        }

        Self {
            column_count: next_column,
            rows,
            primary_columns,
        }
    }

    /// Total number of columns, cells and slots together
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Rows as ascending cell columns followed by one slot column
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Instance-slot columns, which must all be covered
    pub fn primary_columns(&self) -> &[usize] {
        &self.primary_columns
    }

    /// Test if some slot column appears in no row
    ///
    /// Such a model has no exact cover, which is known before any search.
    pub fn has_uncoverable_slot(&self) -> bool {
        let mut covered = vec![false; self.column_count];
        for row in &self.rows {
            for &column in row {
                if let Some(flag) = covered.get_mut(column) {
                    *flag = true;
                }
            }
        }
        self.primary_columns
            .iter()
            .any(|&column| !covered.get(column).copied().unwrap_or(false))
    }
}
