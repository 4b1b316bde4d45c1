//! Error types and context management for puzzle loading and solving

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackError {
    /// A line in the shape section is neither a `<id>:` header nor a region line
    UnexpectedShapeHeader {
        /// 1-based input line number
        line: usize,
        /// Offending line content
        content: String,
    },

    /// A line in the region section does not match `<W>x<H>: <counts>`
    UnexpectedRegionLine {
        /// 1-based input line number
        line: usize,
        /// Offending line content
        content: String,
    },

    /// A shape row contains a character other than `#` or `.`
    InvalidShapeCell {
        /// Declared shape identifier
        shape: usize,
        /// Row within the shape drawing
        row: usize,
        /// Column within the shape drawing
        column: usize,
        /// Character that was found
        found: char,
        /// 1-based input line number, when known
        line: Option<usize>,
    },

    /// A shape drawing has no occupied cells
    EmptyShape {
        /// Declared shape identifier
        shape: usize,
    },

    /// The same shape identifier was declared twice
    DuplicateShape {
        /// Declared shape identifier
        shape: usize,
        /// 1-based input line number of the second declaration
        line: usize,
    },

    /// A number in a header or region line could not be parsed
    InvalidNumber {
        /// 1-based input line number
        line: usize,
        /// Text that failed to parse
        text: String,
        /// Underlying parse error
        source: ParseIntError,
    },

    /// A region requires copies of a shape that was never declared
    UnknownShapeCount {
        /// 1-based input line number
        line: usize,
        /// Position of the count, i.e. the undeclared shape identifier
        shape: usize,
        /// Requested number of copies
        count: usize,
    },

    /// A region requires more copies of a shape than any region has cells
    ExcessiveCount {
        /// 1-based input line number
        line: usize,
        /// Declared shape identifier
        shape: usize,
        /// Requested number of copies
        count: usize,
        /// Largest count accepted
        max_count: usize,
    },

    /// A region exceeds the supported cell count
    RegionTooLarge {
        /// 1-based input line number
        line: usize,
        /// Region width
        width: usize,
        /// Region height
        height: usize,
        /// Maximum accepted cell count
        max_cells: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The two solvers disagreed on at least one region
    ///
    /// Both searches decide the same constraint problem, so this always
    /// points at a defect in one of them rather than at the input.
    SolverMismatch {
        /// Number of regions with conflicting verdicts
        regions: usize,
        /// 1-based index of the first conflicting region
        first: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedShapeHeader { line, content } => {
                write!(f, "Unexpected shape header on line {line}: {content:?}")
            }
            Self::UnexpectedRegionLine { line, content } => {
                write!(f, "Unexpected region line on line {line}: {content:?}")
            }
            Self::InvalidShapeCell {
                shape,
                row,
                column,
                found,
                line,
            } => {
                write!(
                    f,
                    "Invalid cell {found:?} in shape {shape} at row {row}, column {column}"
                )?;
                if let Some(line) = line {
                    write!(f, " (line {line})")?;
                }
                Ok(())
            }
            Self::EmptyShape { shape } => {
                write!(f, "Shape {shape} has no occupied cells")
            }
            Self::DuplicateShape { shape, line } => {
                write!(f, "Shape {shape} declared again on line {line}")
            }
            Self::InvalidNumber { line, text, source } => {
                write!(f, "Invalid number {text:?} on line {line}: {source}")
            }
            Self::UnknownShapeCount { line, shape, count } => {
                write!(
                    f,
                    "Region on line {line} requires {count} copies of undeclared shape {shape}"
                )
            }
            Self::ExcessiveCount {
                line,
                shape,
                count,
                max_count,
            } => {
                write!(
                    f,
                    "Region on line {line} requires {count} copies of shape {shape}, more than {max_count}"
                )
            }
            Self::RegionTooLarge {
                line,
                width,
                height,
                max_cells,
            } => {
                write!(
                    f,
                    "Region {width}x{height} on line {line} exceeds {max_cells} cells"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SolverMismatch { regions, first } => {
                write!(
                    f,
                    "Solvers disagreed on {regions} region(s), first at region {first}"
                )
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Input line on which the failing block starts
    pub line: Option<usize>,
}

/// Enriches errors with the location they were raised at
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Anchor row-relative shape errors at the line their block starts on
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line context applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PackError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let (PackError::InvalidShapeCell { row, line, .. }, Some(start)) =
                (&mut error, context.line)
            {
                *line = Some(start + *row);
            }
            error
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext { line: Some(line) })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
