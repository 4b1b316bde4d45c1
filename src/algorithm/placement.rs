use crate::algorithm::bitset::CellMask;
use crate::spatial::shape::{Orientation, Shape};
use std::collections::HashSet;

/// Every translation of one orientation that lies fully inside a `width × height` region
///
/// Origins are visited column-major (`ox` outer, `oy` inner). The origin
/// range already keeps every cell in bounds, so no candidate is rejected
/// after the fact. An orientation wider or taller than the region yields
/// nothing.
pub fn orientation_placements(
    orientation: &Orientation,
    width: usize,
    height: usize,
) -> Vec<CellMask> {
    let (shape_width, shape_height) = orientation.extent();
    if orientation.is_empty() || shape_width > width || shape_height > height {
        return Vec::new();
    }

    let cell_count = width * height;
    let mut placements =
        Vec::with_capacity((width - shape_width + 1) * (height - shape_height + 1));
    for ox in 0..=(width - shape_width) {
        for oy in 0..=(height - shape_height) {
            placements.push(CellMask::from_cells(
                cell_count,
                orientation
                    .cells()
                    .iter()
                    .map(|&(x, y)| (oy + y as usize) * width + ox + x as usize),
            ));
        }
    }
    placements
}

/// Placements of a shape over all of its orientations, deduplicated by cell set
///
/// Keeps the first occurrence of each mask, so the order follows
/// [`Shape::orientations`] and then origin order.
pub fn unique_placements(shape: &Shape, width: usize, height: usize) -> Vec<CellMask> {
    let mut seen = HashSet::new();
    let mut placements = Vec::new();
    for orientation in shape.orientations() {
        for mask in orientation_placements(&orientation, width, height) {
            if seen.insert(mask.clone()) {
                placements.push(mask);
            }
        }
    }
    placements
}
