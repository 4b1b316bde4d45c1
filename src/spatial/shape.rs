use crate::io::error::{PackError, Result};
use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;

/// Integer cell offset `(x, y)`, x growing rightwards and y downwards
pub type Coord = (i32, i32);

/// One layout of a polyomino: sorted cell offsets with minimum x and y at 0
///
/// Two orientations compare equal exactly when they cover the same cells,
/// so they can be deduplicated and hashed directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation {
    cells: Vec<Coord>,
}

impl Orientation {
    /// Translate coordinates so the smallest x and y become 0, then sort them
    pub fn normalize(coords: impl IntoIterator<Item = Coord>) -> Self {
        let coords: Vec<Coord> = coords.into_iter().collect();
        let min_x = coords.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = coords.iter().map(|&(_, y)| y).min().unwrap_or(0);

        let mut cells: Vec<Coord> = coords
            .into_iter()
            .map(|(x, y)| (x - min_x, y - min_y))
            .collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    /// Cell offsets in ascending `(x, y)` order
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the layout has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box as `(width, height)`
    pub fn extent(&self) -> (usize, usize) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width.max(0) as usize, height.max(0) as usize)
    }

    /// Apply an optional horizontal flip followed by quarter turns, then renormalize
    pub fn transformed(&self, flip: bool, quarter_turns: u8) -> Self {
        Self::normalize(self.cells.iter().map(|&(x, y)| {
            let mut point = if flip { (-x, y) } else { (x, y) };
            for _ in 0..quarter_turns % 4 {
                point = (-point.1, point.0);
            }
            point
        }))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.extent();
        for y in 0..height {
            let row: String = (0..width)
                .map(|x| {
                    if self.cells.binary_search(&(x as i32, y as i32)).is_ok() {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// A polyomino with its declared identifier and canonical cell layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    id: usize,
    canonical: Orientation,
}

impl Shape {
    /// Build a shape from arbitrary cell coordinates
    ///
    /// # Errors
    ///
    /// Returns `EmptyShape` if no coordinates are given
    pub fn new(id: usize, coords: impl IntoIterator<Item = Coord>) -> Result<Self> {
        let canonical = Orientation::normalize(coords);
        if canonical.is_empty() {
            return Err(PackError::EmptyShape { shape: id });
        }
        Ok(Self { id, canonical })
    }

    /// Build a shape from an occupancy grid indexed `[row, column]`
    ///
    /// # Errors
    ///
    /// Returns `EmptyShape` if no cell of the grid is occupied
    pub fn from_grid(id: usize, grid: &Array2<bool>) -> Result<Self> {
        Self::new(
            id,
            grid.indexed_iter()
                .filter(|&(_, &occupied)| occupied)
                .map(|((row, column), _)| (column as i32, row as i32)),
        )
    }

    /// Build a shape from drawn rows of `#` (occupied) and `.` (empty)
    ///
    /// Shorter rows are padded with empty cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeCell` for any other character, or `EmptyShape`
    /// if nothing is occupied
    pub fn from_rows<S: AsRef<str>>(id: usize, rows: &[S]) -> Result<Self> {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut grid = Array2::from_elem((rows.len(), width), false);

        for (row, line) in rows.iter().enumerate() {
            for (column, ch) in line.as_ref().chars().enumerate() {
                match ch {
                    '#' => {
                        if let Some(cell) = grid.get_mut([row, column]) {
                            *cell = true;
                        }
                    }
                    '.' => {}
                    found => {
                        return Err(PackError::InvalidShapeCell {
                            shape: id,
                            row,
                            column,
                            found,
                            line: None,
                        });
                    }
                }
            }
        }

        Self::from_grid(id, &grid)
    }

    /// Declared identifier
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Canonical layout as drawn
    pub const fn canonical(&self) -> &Orientation {
        &self.canonical
    }

    /// Number of cells one copy occupies
    pub fn cell_count(&self) -> usize {
        self.canonical.len()
    }

    /// Every distinct layout under rotation and reflection, in sorted order
    ///
    /// Yields 1, 2, 4 or 8 layouts depending on the shape's own symmetry.
    pub fn orientations(&self) -> Vec<Orientation> {
        let mut distinct = BTreeSet::new();
        for flip in [false, true] {
            for quarter_turns in 0..4 {
                distinct.insert(self.canonical.transformed(flip, quarter_turns));
            }
        }
        distinct.into_iter().collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.id)?;
        write!(f, "{}", self.canonical)
    }
}
