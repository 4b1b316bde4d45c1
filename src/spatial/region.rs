use std::fmt;

/// Rectangular target area together with how many copies of each shape it must hold
///
/// `counts` is indexed by dense shape index, i.e. the position of the shape
/// in the slice handed to the solvers. Missing trailing entries mean zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

impl Region {
    /// Create a region of `width × height` cells
    pub const fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        Self {
            width,
            height,
            counts,
        }
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Required copies per dense shape index
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Required copies of the shape at `index`
    pub fn count_for(&self, index: usize) -> usize {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Total number of shape copies to place
    pub fn total_instances(&self) -> usize {
        self.counts.iter().fold(0, |total, &count| total.saturating_add(count))
    }

    /// Bit index of cell `(x, y)`
    pub const fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}:", self.width, self.height)?;
        for count in &self.counts {
            write!(f, " {count}")?;
        }
        Ok(())
    }
}
