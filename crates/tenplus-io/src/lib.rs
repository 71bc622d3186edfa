//! # tenplus-io
//!
//! Peripheral collaborators for [`tenplus_core`] tensors. Everything here is
//! built on the core's public accessors (`shape`, `get_at`, `FaceCursor`,
//! constructors); nothing reaches into the storage directly.
//!
//! - [`csv`]: comma-separated text with semicolon face separators
//! - [`display`]: aligned grid rendering driven by each tensor's `NumberFormat`
//! - [`tracing_support`]: subscriber setup for the crate's `tracing` events
//!
//! ```
//! use tenplus_core::TensorStore;
//! use tenplus_io::{from_csv, render, to_csv};
//!
//! let t: TensorStore<f64> = from_csv("1,2\n3,4").unwrap();
//! assert_eq!(t.shape(), &[2, 2]);
//! assert_eq!(to_csv(&t), "1,2\n3,4");
//! assert_eq!(render(&t), "1        2\n3        4\n");
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): enable [`tracing_support::init_tracing`]
//! - `serde`: derive `Serialize`/`Deserialize` for [`tracing_support::TracingConfig`]

#![deny(warnings)]

pub mod csv;
pub mod display;
pub mod error;
mod face;
pub mod tracing_support;

pub use csv::{from_csv, from_csv_named, to_csv};
pub use display::{render, DisplayGrid, TensorDisplay};
pub use error::CsvError;
pub use tracing_support::{init_tracing, TracingConfig, TracingFormat};
