//! # tenplus
//!
//! Lightweight Vector/Matrix/Tensor containers with row-major storage,
//! dual-mode indexing and inclusive-range slicing.
//!
//! This is the **meta crate** re-exporting the tenplus components.
//!
//! ## Quick Start
//!
//! ```
//! use tenplus::prelude::*;
//!
//! let t = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
//! assert_eq!(*t.get(&[1, 2])?, 6);
//! assert_eq!(*t.get(&[0])?, 1);
//!
//! let block = t.get_slice(&"0:1, 1:2".parse::<SliceSpec>()?)?;
//! assert_eq!(block.as_slice(), &[2, 3, 5, 6]);
//! assert_eq!(to_csv(&block), "2,3\n5,6");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core ([`core`])
//!
//! Shape math, cursors, slice specs, `TensorStore`, `Vector`, `Matrix`.
//!
//! ### Text I/O ([`io`])
//!
//! CSV round-tripping, grid display and tracing setup.

#![deny(warnings)]

pub use tenplus_core as core;
pub use tenplus_io as io;

/// Commonly used types and functions
pub mod prelude {
    pub use tenplus_core::{
        IndexError, Matrix, MultiIndexCursor, NumberFormat, Selector, ShapeError, SliceSpec,
        Subscript, TensorError, TensorStore, Vector,
    };
    pub use tenplus_io::{from_csv, render, to_csv, CsvError, TensorDisplay};
}
