//! Owning tensor storage and its operations
//!
//! The type lives in [`types`]; operations are grouped by concern:
//!
//! - `creation`: validated constructors
//! - `indexing`: dual-mode element access
//! - `slicing`: rectangular sub-region extraction and assignment

pub mod types;

mod creation;
mod indexing;
mod slicing;

pub use indexing::Subscript;
pub use types::TensorStore;
