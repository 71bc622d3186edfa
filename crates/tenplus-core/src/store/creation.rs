//! Validated tensor constructors
//!
//! Construction is atomic: either every invariant holds and a store is
//! returned, or a [`ShapeError`] is returned and nothing is built.
//!
//! Named constructors take an optional name and an optional name toggle.
//! When the toggle is omitted it defaults to `true` exactly when a name is
//! given.

use super::types::TensorStore;
use crate::cursor::MultiIndexCursor;
use crate::error::ShapeError;
use crate::format::NumberFormat;
use crate::shape::{element_count, validate_shape, Shape};

impl<T> TensorStore<T> {
    /// Create a tensor from row-major data.
    ///
    /// # Errors
    ///
    /// * [`ShapeError::NonPositiveDimension`] for a rank-0 shape or a zero
    ///   dimension
    /// * [`ShapeError::DataLengthMismatch`] if `data.len()` differs from the
    ///   product of `shape`
    ///
    /// # Examples
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let tensor = TensorStore::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 2]);
    /// assert!(!tensor.show_name());
    ///
    /// assert!(TensorStore::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).is_err());
    /// assert!(TensorStore::from_vec(Vec::<f64>::new(), &[0, 2]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, ShapeError> {
        Self::from_vec_named(data, shape, None, None)
    }

    /// [`from_vec`](Self::from_vec) with display name settings.
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let a = TensorStore::from_vec_named(vec![1, 2], &[2], Some("a"), None).unwrap();
    /// assert_eq!(a.name(), Some("a"));
    /// assert!(a.show_name());
    ///
    /// let b = TensorStore::from_vec_named(vec![1, 2], &[2], Some("b"), Some(false)).unwrap();
    /// assert!(!b.show_name());
    /// ```
    pub fn from_vec_named(
        data: Vec<T>,
        shape: &[usize],
        name: Option<&str>,
        show_name: Option<bool>,
    ) -> Result<Self, ShapeError> {
        validate_shape(shape)?;
        let expected = element_count(shape);
        if data.len() != expected {
            return Err(ShapeError::DataLengthMismatch {
                expected,
                got: data.len(),
            });
        }

        let store = Self {
            shape: Shape::from_slice(shape),
            elements: data,
            name: name.map(str::to_owned),
            show_name: show_name.unwrap_or(name.is_some()),
            format: NumberFormat::default(),
        };
        store.debug_check();
        Ok(store)
    }

    /// Create a tensor of `shape` filled with clones of `value`.
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let fives = TensorStore::from_elem(&[2, 3], 5).unwrap();
    /// assert_eq!(fives.as_slice(), &[5; 6]);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        Self::from_elem_named(shape, value, None, None)
    }

    /// [`from_elem`](Self::from_elem) with display name settings.
    pub fn from_elem_named(
        shape: &[usize],
        value: T,
        name: Option<&str>,
        show_name: Option<bool>,
    ) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        validate_shape(shape)?;
        let data = vec![value; element_count(shape)];
        Self::from_vec_named(data, shape, name, show_name)
    }

    /// Create a tensor by evaluating `f` at every coordinate, in row-major
    /// order.
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let t = TensorStore::from_fn(&[2, 3], |c| c[0] * 10 + c[1]).unwrap();
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(shape: &[usize], f: F) -> Result<Self, ShapeError>
    where
        F: FnMut(Vec<usize>) -> T,
    {
        let data = MultiIndexCursor::over_shape(shape)?.map(f).collect();
        Self::from_vec(data, shape)
    }

    /// Copy another tensor's shape, elements and number format into a new,
    /// independent store with its own name settings.
    ///
    /// The format is cloned, never shared: changing it on either tensor
    /// afterwards leaves the other untouched.
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let a = TensorStore::from_vec(vec![1, 2, 3], &[3]).unwrap();
    /// let mut b = TensorStore::from_existing(&a, Some("b"), None);
    /// b.format_mut().width = 3;
    ///
    /// assert_eq!(b.as_slice(), a.as_slice());
    /// assert_eq!(a.format().width, 8);
    /// assert!(b.show_name());
    /// ```
    pub fn from_existing(other: &Self, name: Option<&str>, show_name: Option<bool>) -> Self
    where
        T: Clone,
    {
        Self {
            shape: other.shape.clone(),
            elements: other.elements.clone(),
            name: name.map(str::to_owned),
            show_name: show_name.unwrap_or(name.is_some()),
            format: other.format.clone(),
        }
    }
}
