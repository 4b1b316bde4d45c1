use crate::spatial::region::Region;
use crate::spatial::shape::Shape;

/// One shape that a region requires a positive number of copies of
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Demand<'a> {
    /// Dense index of the shape
    pub index: usize,
    /// The shape itself
    pub shape: &'a Shape,
    /// Number of copies to place
    pub count: usize,
}

impl Demand<'_> {
    /// Cells covered by all copies together, saturating at `usize::MAX`
    pub fn cells(&self) -> usize {
        self.shape.cell_count().saturating_mul(self.count)
    }
}

/// Resolve a region's counts against the dense shape list
///
/// Shapes with a zero count are skipped. Returns `None` when a positive
/// count refers past the end of `shapes`: such a copy can never be placed.
pub fn demands<'a>(region: &Region, shapes: &'a [Shape]) -> Option<Vec<Demand<'a>>> {
    let mut resolved = Vec::new();
    for (index, &count) in region.counts().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let shape = shapes.get(index)?;
        resolved.push(Demand {
            index,
            shape,
            count,
        });
    }
    Some(resolved)
}

/// Total cells required by all demands, saturating at `usize::MAX`
pub fn required_cells(demands: &[Demand<'_>]) -> usize {
    demands
        .iter()
        .map(Demand::cells)
        .fold(0, usize::saturating_add)
}

/// Quick reject shared by both solvers
///
/// True when the demands cannot possibly fit because they need more cells
/// than the region has. Runs before any placement is enumerated.
pub fn exceeds_area(region: &Region, demands: &[Demand<'_>]) -> bool {
    required_cells(demands) > region.cell_count()
}
