//! Puzzle input parsing: shape drawings followed by region lines
//!
//! ```text
//! 0:
//! ###
//! ##.
//!
//! 4x4: 0 2
//! 12x5: 1 0
//! ```
//!
//! Shape blocks start with `<id>:` and end at a blank line, the next header
//! or the first region line. Region counts are positional by declared shape
//! id; they are remapped to dense shape indices as regions are read.

use crate::io::configuration::MAX_REGION_CELLS;
use crate::io::error::{PackError, Result, WithContext};
use crate::spatial::catalog::ShapeCatalog;
use crate::spatial::region::Region;
use crate::spatial::shape::Shape;
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed puzzle: dense shapes and the regions to test
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    catalog: ShapeCatalog,
    regions: Vec<Region>,
}

impl Puzzle {
    /// Parse puzzle text
    ///
    /// # Errors
    ///
    /// Returns the first malformed header, shape row, number or region line
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let mut next = 0;

        let mut declared = BTreeMap::new();
        while let Some(raw) = lines.get(next) {
            let line = raw.trim_end();
            if line.is_empty() {
                next += 1;
                continue;
            }
            if region_header(line).is_some() {
                break;
            }
            let header_line = next + 1;
            let Some(digits) = shape_header(line) else {
                return Err(PackError::UnexpectedShapeHeader {
                    line: header_line,
                    content: line.to_string(),
                });
            };
            let id = number(digits, header_line)?;
            next += 1;

            let mut rows = Vec::new();
            while let Some(raw_row) = lines.get(next) {
                let row = raw_row.trim_end();
                if row.is_empty() {
                    next += 1;
                    break;
                }
                if shape_header(row).is_some() || region_header(row).is_some() {
                    break;
                }
                rows.push(row);
                next += 1;
            }

            if declared.contains_key(&id) {
                return Err(PackError::DuplicateShape {
                    shape: id,
                    line: header_line,
                });
            }
            let shape = Shape::from_rows(id, &rows).with_line(header_line + 1)?;
            declared.insert(id, shape);
        }

        let catalog = ShapeCatalog::from_declared(declared);
        let mut regions = Vec::new();
        while let Some(raw) = lines.get(next) {
            let line_number = next + 1;
            next += 1;
            let line = raw.trim();
            if line.is_empty() || shape_header(line).is_some() {
                continue;
            }
            regions.push(parse_region(line, line_number, &catalog)?);
        }

        Ok(Self { catalog, regions })
    }

    /// Read and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, or any parse error
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PackError::FileSystem {
            path: path.to_path_buf(),
            operation: "read puzzle",
            source,
        })?;
        Self::parse(&text)
    }

    /// Shapes in dense order
    pub fn shapes(&self) -> &[Shape] {
        self.catalog.shapes()
    }

    /// Dense shape catalog
    pub const fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Regions in input order, counts aligned to dense shape indices
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Split into dense shapes and regions
    pub fn into_parts(self) -> (Vec<Shape>, Vec<Region>) {
        (self.catalog.shapes().to_vec(), self.regions)
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Digits of a `<id>:` header line
fn shape_header(line: &str) -> Option<&str> {
    let id = line.trim_end().strip_suffix(':')?;
    is_number(id).then_some(id)
}

/// Width, height and count text of a `<W>x<H>: ...` line
fn region_header(line: &str) -> Option<(&str, &str, &str)> {
    let (size, counts) = line.split_once(':')?;
    let (width, height) = size.trim().split_once('x')?;
    (is_number(width) && is_number(height)).then_some((width, height, counts))
}

fn number(text: &str, line: usize) -> Result<usize> {
    text.parse().map_err(|source| PackError::InvalidNumber {
        line,
        text: text.to_string(),
        source,
    })
}

fn parse_region(line: &str, line_number: usize, catalog: &ShapeCatalog) -> Result<Region> {
    let Some((width, height, counts)) = region_header(line) else {
        return Err(PackError::UnexpectedRegionLine {
            line: line_number,
            content: line.to_string(),
        });
    };
    let width = number(width, line_number)?;
    let height = number(height, line_number)?;
    if width
        .checked_mul(height)
        .is_none_or(|cells| cells > MAX_REGION_CELLS)
    {
        return Err(PackError::RegionTooLarge {
            line: line_number,
            width,
            height,
            max_cells: MAX_REGION_CELLS,
        });
    }

    let positional = counts
        .split_whitespace()
        .map(|count| number(count, line_number))
        .collect::<Result<Vec<_>>>()?;
    // Every copy covers at least one cell
    if let Some((shape, &count)) = positional
        .iter()
        .enumerate()
        .find(|&(_, &count)| count > MAX_REGION_CELLS)
    {
        return Err(PackError::ExcessiveCount {
            line: line_number,
            shape,
            count,
            max_count: MAX_REGION_CELLS,
        });
    }
    let counts = catalog
        .remap_counts(&positional)
        .map_err(|undeclared| PackError::UnknownShapeCount {
            line: line_number,
            shape: undeclared.shape,
            count: undeclared.count,
        })?;

    Ok(Region::new(width, height, counts))
}
