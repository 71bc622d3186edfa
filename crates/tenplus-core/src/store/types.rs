//! Core `TensorStore` type definition
//!
//! A `TensorStore<T>` is a contiguous, row-major element buffer together with
//! its shape and display metadata (name, name toggle, number format).

use crate::format::NumberFormat;
use crate::shape::{element_count, Shape};
use std::fmt;

/// Dense N-dimensional tensor with exclusively owned, row-major storage
///
/// # Invariants
///
/// * `shape` has rank >= 1 and only positive entries
/// * `elements.len() == product(shape)`
///
/// Both are established by the constructors and never broken afterwards:
/// no operation changes the shape of an existing store, and every failing
/// operation returns before touching the elements.
///
/// # Examples
///
/// ```
/// use tenplus_core::TensorStore;
///
/// let tensor = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor.rank(), 2);
/// assert_eq!(tensor.len(), 6);
/// ```
#[derive(Clone)]
pub struct TensorStore<T> {
    pub(crate) shape: Shape,
    pub(crate) elements: Vec<T>,
    pub(crate) name: Option<String>,
    pub(crate) show_name: bool,
    pub(crate) format: NumberFormat,
}

impl<T> TensorStore<T> {
    /// Number of elements in each dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for a validated store; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the store and return its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Row-major iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Whether display renderers print the name.
    pub fn show_name(&self) -> bool {
        self.show_name
    }

    pub fn set_show_name(&mut self, show_name: bool) {
        self.show_name = show_name;
    }

    /// Display configuration for this tensor.
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut NumberFormat {
        &mut self.format
    }

    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
    }

    /// Debug-only check of the storage invariant.
    pub(crate) fn debug_check(&self) {
        debug_assert_eq!(self.elements.len(), element_count(&self.shape));
    }
}

impl<'a, T> IntoIterator for &'a TensorStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Equality compares shape and elements only; name and format are ignored.
impl<T: PartialEq> PartialEq for TensorStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.elements == other.elements
    }
}

impl<T: Eq> Eq for TensorStore<T> {}

impl<T: fmt::Debug> fmt::Debug for TensorStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorStore")
            .field("name", &self.name)
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("elements", &self.elements)
            .finish()
    }
}
