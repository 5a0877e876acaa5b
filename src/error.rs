use thiserror::Error;

/// Raised when the input lines do not form a rectangle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "line {line} has {found} characters but the first line has {expected}. all lines of the input must be of the same length"
)]
pub struct ShapeError {
    /// zero based index of the offending line
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

impl ShapeError {
    pub fn new(line: usize, expected: usize, found: usize) -> Self {
        Self {
            line,
            expected,
            found,
        }
    }
}
