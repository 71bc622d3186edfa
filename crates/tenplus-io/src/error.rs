//! Error types for CSV parsing

use tenplus_core::ShapeError;
use thiserror::Error;

/// Errors from [`from_csv`](crate::csv::from_csv)
///
/// Line numbers are 1-based and refer to the input text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("CSV input contains no elements")]
    Empty,

    #[error("Line {line}: cannot parse {value:?}: {reason}")]
    InvalidElement {
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Line {line}: empty element")]
    EmptyElement { line: usize },

    #[error("Line {line}: expected {expected} columns, got {got}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Line {line}: matrix has {got} rows, expected {expected}")]
    RaggedFace {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Line {line}: separator without a matrix on both sides")]
    MisplacedSeparator { line: usize },

    #[error("Separators do not describe a rectangular tensor")]
    InconsistentSeparators,

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
