//! # tenplus-core
//!
//! Row-major N-dimensional tensor storage with checked indexing and slicing.
//!
//! This crate provides the building blocks every tenplus container shares:
//!
//! - **Shape math** ([`shape`]): subscript/offset conversion and shape validation
//! - **Cursors** ([`cursor`]): row-major walking of rectangular index regions
//! - **Slice specs** ([`slice`]): per-dimension single index / inclusive range selectors
//! - **Storage** ([`TensorStore`]): owned contiguous buffer, shape and display metadata
//! - **Wrappers** ([`Vector`], [`Matrix`]): rank-constrained views of the same store
//!
//! ## Memory Layout
//!
//! Elements are stored contiguously in row-major order: the last dimension
//! varies fastest. There are no strided or shared views; every slice is an
//! independent copy.
//!
//! ## Quick Start
//!
//! ```
//! use tenplus_core::{SliceSpec, TensorStore};
//!
//! let mut tensor = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//! assert_eq!(tensor.shape(), &[2, 3]);
//!
//! // Several integers address coordinates, one integer addresses linear order
//! assert_eq!(*tensor.get(&[1, 2]).unwrap(), 6);
//! assert_eq!(*tensor.get(&[0]).unwrap(), 1);
//!
//! // Slices are inclusive ranges per dimension
//! let spec: SliceSpec = "0:1, 1:2".parse().unwrap();
//! let block = tensor.get_slice(&spec).unwrap();
//! assert_eq!(block.as_slice(), &[2, 3, 5, 6]);
//!
//! tensor.set_slice(&spec, &block).unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return typed errors from [`error`]: [`ShapeError`]
//! for construction and shape mismatches, [`IndexError`] for out-of-bounds
//! addressing, and [`TensorError`] where both can occur. Checks run before
//! any element is written.
//!
//! ```
//! use tenplus_core::TensorStore;
//!
//! assert!(TensorStore::from_vec(vec![1, 2, 3], &[2, 2]).is_err());
//! assert!(TensorStore::from_elem(&[2, 0], 1.0).is_err());
//!
//! let t = TensorStore::from_elem(&[2, 3], 0).unwrap();
//! assert!(t.get(&[1, 2, 0]).is_err());
//! ```
//!
//! ## Logging
//!
//! Slice resolution and slice copies emit `tracing` events at `trace` and
//! `debug` level. No subscriber is installed here; see `tenplus-io`.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`NumberFormat`]

#![deny(warnings)]

pub mod cursor;
pub mod error;
pub mod format;
pub mod shape;
pub mod slice;
pub mod store;
pub mod wrappers;


pub use cursor::{Face, FaceCursor, MultiIndexCursor};
pub use error::{IndexError, ShapeError, SliceParseError, TensorError, TensorResult};
pub use format::{NumberFormat, PaddingPosition};
pub use shape::{element_count, ind2sub, sub2ind, validate_shape, Shape};
pub use slice::{ResolvedBounds, Selector, SliceSpec};
pub use store::{Subscript, TensorStore};
pub use wrappers::{Matrix, Vector};
