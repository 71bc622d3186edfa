//! Rank-constrained conveniences over [`TensorStore`]
//!
//! [`Vector`] and [`Matrix`] only pin the rank (1 and 2). They dereference to
//! the wrapped store, so element access and slicing come from
//! `TensorStore` unchanged.
//!
//! ```
//! use tenplus_core::{Matrix, Vector};
//!
//! let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!((m.rows(), m.columns()), (2, 3));
//! assert_eq!(m.column(1).unwrap().as_slice(), &[2, 5]);
//! assert_eq!(*m.get(&[1, 0]).unwrap(), 4);
//!
//! let v = Vector::from_vec(vec![1.0, 2.0]).unwrap();
//! assert_eq!(v.len(), 2);
//! ```

use crate::error::{ShapeError, TensorResult};
use crate::slice::{Selector, SliceSpec};
use crate::store::TensorStore;
use std::ops::{Deref, DerefMut};

fn check_rank<T>(store: &TensorStore<T>, rank: usize) -> Result<(), ShapeError> {
    if store.rank() == rank {
        Ok(())
    } else {
        Err(ShapeError::RankMismatch {
            expected: rank,
            got: store.rank(),
        })
    }
}

/// Rank-1 tensor
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T>(TensorStore<T>);

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Result<Self, ShapeError> {
        let len = data.len();
        TensorStore::from_vec(data, &[len]).map(Self)
    }

    pub fn from_elem(len: usize, value: T) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        TensorStore::from_elem(&[len], value).map(Self)
    }

    pub fn as_tensor(&self) -> &TensorStore<T> {
        &self.0
    }

    pub fn into_tensor(self) -> TensorStore<T> {
        self.0
    }
}

impl<T> TryFrom<TensorStore<T>> for Vector<T> {
    type Error = ShapeError;

    fn try_from(store: TensorStore<T>) -> Result<Self, Self::Error> {
        check_rank(&store, 1)?;
        Ok(Self(store))
    }
}

impl<T> Deref for Vector<T> {
    type Target = TensorStore<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Rank-2 tensor
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T>(TensorStore<T>);

impl<T> Matrix<T> {
    /// Create a `rows x columns` matrix from row-major data.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        TensorStore::from_vec(data, &[rows, columns]).map(Self)
    }

    pub fn from_elem(rows: usize, columns: usize, value: T) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        TensorStore::from_elem(&[rows, columns], value).map(Self)
    }

    pub fn rows(&self) -> usize {
        self.0.shape()[0]
    }

    pub fn columns(&self) -> usize {
        self.0.shape()[1]
    }

    /// Copy of row `r` as a vector.
    pub fn row(&self, r: usize) -> TensorResult<Vector<T>>
    where
        T: Clone,
    {
        let spec = SliceSpec::new(vec![
            Selector::Single(r),
            Selector::Range(0, self.columns() - 1),
        ]);
        self.line(&spec)
    }

    /// Copy of column `c` as a vector.
    pub fn column(&self, c: usize) -> TensorResult<Vector<T>>
    where
        T: Clone,
    {
        let spec = SliceSpec::new(vec![
            Selector::Range(0, self.rows() - 1),
            Selector::Single(c),
        ]);
        self.line(&spec)
    }

    fn line(&self, spec: &SliceSpec) -> TensorResult<Vector<T>>
    where
        T: Clone,
    {
        let slice = self.0.get_slice(spec)?;
        let len = slice.len();
        let name = slice.name().map(str::to_owned);
        let mut flat = TensorStore::from_vec(slice.into_vec(), &[len])?;
        flat.set_name(name);
        flat.set_show_name(self.0.show_name());
        flat.set_format(self.0.format().clone());
        Ok(Vector(flat))
    }

    pub fn as_tensor(&self) -> &TensorStore<T> {
        &self.0
    }

    pub fn into_tensor(self) -> TensorStore<T> {
        self.0
    }
}

impl<T> TryFrom<TensorStore<T>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(store: TensorStore<T>) -> Result<Self, Self::Error> {
        check_rank(&store, 2)?;
        Ok(Self(store))
    }
}

impl<T> Deref for Matrix<T> {
    type Target = TensorStore<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Matrix<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
