//! Error types for tensor construction, indexing and slicing
//!
//! # Design
//!
//! - **`ShapeError`**: invalid shapes, data/shape disagreement, rank and
//!   slice-size mismatches
//! - **`IndexError`**: linear or multi-dimensional coordinates out of bounds
//! - **`TensorError`**: top-level enum returned by operations that can fail
//!   either way (slicing)
//!
//! Every check runs before any element is touched, so an `Err` never leaves a
//! tensor partially modified.
//!
//! # Examples
//!
//! ```
//! use tenplus_core::error::{ShapeError, TensorError};
//! use tenplus_core::TensorStore;
//!
//! let err = TensorStore::from_vec(vec![1, 2, 3], &[2, 2]).unwrap_err();
//! assert_eq!(err, ShapeError::DataLengthMismatch { expected: 4, got: 3 });
//!
//! let err: TensorError = err.into();
//! assert!(err.is_shape());
//! ```

use thiserror::Error;

/// Top-level error type for tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Shape validation errors
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Index errors
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

impl TensorError {
    /// True when this wraps a [`ShapeError`]
    pub fn is_shape(&self) -> bool {
        matches!(self, TensorError::Shape(_))
    }

    /// True when this wraps an [`IndexError`]
    pub fn is_index(&self) -> bool {
        matches!(self, TensorError::Index(_))
    }
}

/// Shape validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Also reported with `dim: 0` for a rank-0 shape.
    #[error("Dimension {dim} must be positive")]
    NonPositiveDimension { dim: usize },

    #[error("Region has more positions than fit in usize")]
    RegionTooLarge,

    #[error("Shape requires {expected} elements, but got {got}")]
    DataLengthMismatch { expected: usize, got: usize },

    #[error("Rank mismatch: expected {expected}, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("Inverted range in dimension {dim}: {low} > {high}")]
    InvertedRange { dim: usize, low: usize, high: usize },

    #[error("Slice size mismatch: region has shape {expected:?}, value has shape {got:?}")]
    SliceSizeMismatch { expected: Vec<usize>, got: Vec<usize> },
}

/// Out-of-bounds and rank errors on element addressing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Linear index {index} is out of bounds for {len} elements")]
    LinearOutOfBounds { index: usize, len: usize },

    #[error("Index has {got} dimensions but tensor has rank {expected}")]
    RankMismatch { expected: usize, got: usize },

    #[error("Index {index} is out of bounds for dimension {dim} with size {size}")]
    OutOfBounds { dim: usize, index: usize, size: usize },
}

/// Errors from parsing a textual slice spec such as `"0:1, 2"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceParseError {
    #[error("Slice spec cannot be empty")]
    Empty,

    #[error("Selector {position} is empty")]
    EmptyItem { position: usize },

    #[error("Invalid index {item:?}")]
    InvalidIndex { item: String },

    #[error("Inverted range {low}:{high}")]
    InvertedRange { low: usize, high: usize },
}

/// Result alias for operations returning [`TensorError`]
pub type TensorResult<T> = Result<T, TensorError>;
