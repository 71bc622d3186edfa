//! Rectangular slice extraction and assignment
//!
//! Both directions resolve the [`SliceSpec`] to inclusive bounds and walk
//! the region with a [`MultiIndexCursor`], so elements are read and written
//! in the same ascending row-major order.
//!
//! A spec with a single selector addresses the flat linear range of the
//! tensor (whatever its rank) and produces a 1-D result. Otherwise the spec
//! must have one selector per dimension, and single indices keep a
//! dimension of extent 1 in the result.
//!
//! ```
//! use tenplus_core::{SliceSpec, TensorStore};
//!
//! let t = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//!
//! let spec: SliceSpec = "0:1, 1:2".parse().unwrap();
//! let s = t.get_slice(&spec).unwrap();
//! assert_eq!(s.shape(), &[2, 2]);
//! assert_eq!(s.as_slice(), &[2, 3, 5, 6]);
//!
//! let flat = t.get_slice(&"2:4".parse().unwrap()).unwrap();
//! assert_eq!(flat.shape(), &[3]);
//! assert_eq!(flat.as_slice(), &[3, 4, 5]);
//! ```

use super::indexing::Subscript;
use super::types::TensorStore;
use crate::cursor::MultiIndexCursor;
use crate::error::{ShapeError, TensorResult};
use crate::shape::Shape;
use crate::slice::{ResolvedBounds, SliceSpec};

impl<T> TensorStore<T> {
    /// Resolve `spec` against this tensor, honouring the linear shortcut.
    fn resolve_region(&self, spec: &SliceSpec) -> TensorResult<ResolvedBounds> {
        if spec.is_linear() {
            spec.resolve(&[self.len()])
        } else {
            spec.resolve(&self.shape)
        }
    }

    /// Storage offsets of every position in `bounds`, in row-major order.
    fn region_offsets(&self, bounds: &ResolvedBounds) -> TensorResult<Vec<usize>> {
        let cursor = MultiIndexCursor::new(bounds.lower.clone(), bounds.upper.clone())?;
        let mut offsets = Vec::with_capacity(cursor.len());
        for coords in cursor {
            offsets.push(self.offset_of(Subscript::from(coords.as_slice()))?);
        }
        Ok(offsets)
    }

    /// Derived display name of a slice: the parent name, parenthesised when
    /// it holds anything but alphanumerics and `_`, followed by `[spec]`.
    fn slice_name(&self, spec: &SliceSpec) -> Option<String> {
        self.name.as_deref().map(|name| {
            if name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                format!("{name}[{spec}]")
            } else {
                format!("({name})[{spec}]")
            }
        })
    }

    /// Copy the region selected by `spec` into a new, independent tensor.
    ///
    /// The result's shape is the per-dimension extent of the resolved
    /// bounds. It inherits the name toggle and number format, and gets a
    /// derived name (`a[0:1, 2]`) when this tensor is named.
    ///
    /// # Errors
    ///
    /// * [`ShapeError::RankMismatch`] if the spec has neither one selector
    ///   nor one per dimension
    /// * [`ShapeError::InvertedRange`] for a range with `low > high`
    /// * [`IndexError`](crate::error::IndexError) if a bound is out of range
    pub fn get_slice(&self, spec: &SliceSpec) -> TensorResult<Self>
    where
        T: Clone,
    {
        let bounds = self.resolve_region(spec)?;
        let extents = bounds.extents();
        tracing::debug!(shape = ?self.shape(), %spec, ?extents, "extracting slice");

        let elements = self
            .region_offsets(&bounds)?
            .into_iter()
            .map(|offset| self.elements[offset].clone())
            .collect();

        let slice = Self {
            shape: Shape::from_vec(extents),
            elements,
            name: self.slice_name(spec),
            show_name: self.show_name,
            format: self.format.clone(),
        };
        slice.debug_check();
        Ok(slice)
    }

    /// Write `value` into the region selected by `spec`.
    ///
    /// `value` must have exactly the shape [`get_slice`](Self::get_slice)
    /// would return for the same spec. Its elements are written in the same
    /// row-major order a read walks, so `set_slice(spec, &get_slice(spec))`
    /// is a no-op. Nothing is written unless every check passes.
    ///
    /// # Errors
    ///
    /// Everything [`get_slice`](Self::get_slice) reports, plus
    /// [`ShapeError::SliceSizeMismatch`] when `value`'s shape differs from the
    /// region's extents.
    ///
    /// ```
    /// use tenplus_core::{SliceSpec, TensorStore};
    ///
    /// let mut t = TensorStore::from_elem(&[3, 3], 0).unwrap();
    /// let patch = TensorStore::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// t.set_slice(&"1:2, 0:1".parse().unwrap(), &patch).unwrap();
    /// assert_eq!(t.as_slice(), &[0, 0, 0, 1, 2, 0, 3, 4, 0]);
    ///
    /// let wrong = TensorStore::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
    /// assert!(t.set_slice(&"1:2, 0:1".parse().unwrap(), &wrong).is_err());
    /// ```
    pub fn set_slice(&mut self, spec: &SliceSpec, value: &TensorStore<T>) -> TensorResult<()>
    where
        T: Clone,
    {
        let bounds = self.resolve_region(spec)?;
        let extents = bounds.extents();
        if value.shape() != extents.as_slice() {
            return Err(ShapeError::SliceSizeMismatch {
                expected: extents,
                got: value.shape().to_vec(),
            }
            .into());
        }
        tracing::debug!(shape = ?self.shape(), %spec, ?extents, "assigning slice");

        let offsets = self.region_offsets(&bounds)?;
        for (offset, element) in offsets.into_iter().zip(value.iter()) {
            self.elements[offset] = element.clone();
        }
        Ok(())
    }
}
