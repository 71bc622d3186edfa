//! Element access with the linear / coordinate dual mode
//!
//! A subscript of exactly one integer is a **linear index** into the
//! row-major element buffer, whatever the rank of the tensor. A subscript of
//! any other length is a list of per-dimension coordinates and must match
//! the rank exactly. [`Subscript`] makes the two modes explicit; the
//! conversions from slices and arrays pick the mode by length.
//!
//! ```
//! use tenplus_core::{Subscript, TensorStore};
//!
//! let t = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//!
//! // coordinates
//! assert_eq!(t.get(&[1, 2]).unwrap(), &6);
//! // one integer: linear order
//! assert_eq!(t.get(&[4]).unwrap(), &5);
//! // explicit forms
//! assert_eq!(t.get(Subscript::Linear(0)).unwrap(), &1);
//! assert_eq!(t.get_at(&[0, 1]).unwrap(), &2);
//!
//! assert!(t.get(&[1, 2, 0]).is_err());
//! assert!(t.get(&[6]).is_err());
//! ```

use super::types::TensorStore;
use crate::cursor::MultiIndexCursor;
use crate::error::IndexError;
use crate::shape::sub2ind;
use std::ops::{Index, IndexMut};

/// Address of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscript<'a> {
    /// Row-major offset into the element buffer
    Linear(usize),
    /// One coordinate per dimension
    Coords(&'a [usize]),
}

impl<'a> From<usize> for Subscript<'a> {
    fn from(index: usize) -> Self {
        Subscript::Linear(index)
    }
}

impl<'a> From<&'a [usize]> for Subscript<'a> {
    fn from(subscripts: &'a [usize]) -> Self {
        match subscripts {
            [index] => Subscript::Linear(*index),
            coords => Subscript::Coords(coords),
        }
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for Subscript<'a> {
    fn from(subscripts: &'a [usize; N]) -> Self {
        Subscript::from(&subscripts[..])
    }
}

impl<'a> From<&'a Vec<usize>> for Subscript<'a> {
    fn from(subscripts: &'a Vec<usize>) -> Self {
        Subscript::from(subscripts.as_slice())
    }
}

impl<T> TensorStore<T> {
    /// Storage offset addressed by `subscript`, after bounds checking.
    pub fn offset_of(&self, subscript: Subscript<'_>) -> Result<usize, IndexError> {
        match subscript {
            Subscript::Linear(index) => {
                if index < self.len() {
                    Ok(index)
                } else {
                    Err(IndexError::LinearOutOfBounds {
                        index,
                        len: self.len(),
                    })
                }
            }
            Subscript::Coords(coords) => sub2ind(coords, &self.shape),
        }
    }

    /// Element at `subscript` (linear if one integer, coordinates otherwise).
    pub fn get<'s>(&self, subscript: impl Into<Subscript<'s>>) -> Result<&T, IndexError> {
        let offset = self.offset_of(subscript.into())?;
        Ok(&self.elements[offset])
    }

    /// Mutable element at `subscript`.
    pub fn get_mut<'s>(
        &mut self,
        subscript: impl Into<Subscript<'s>>,
    ) -> Result<&mut T, IndexError> {
        let offset = self.offset_of(subscript.into())?;
        Ok(&mut self.elements[offset])
    }

    /// Overwrite the element at `subscript`.
    pub fn set<'s>(
        &mut self,
        subscript: impl Into<Subscript<'s>>,
        value: T,
    ) -> Result<(), IndexError> {
        *self.get_mut(subscript)? = value;
        Ok(())
    }

    /// Element at row-major offset `index`.
    pub fn get_linear(&self, index: usize) -> Result<&T, IndexError> {
        self.get(Subscript::Linear(index))
    }

    pub fn set_linear(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        self.set(Subscript::Linear(index), value)
    }

    /// Element at per-dimension `coords`, which must match the rank even
    /// for rank-1 tensors.
    pub fn get_at(&self, coords: &[usize]) -> Result<&T, IndexError> {
        self.get(Subscript::Coords(coords))
    }

    pub fn set_at(&mut self, coords: &[usize], value: T) -> Result<(), IndexError> {
        self.set(Subscript::Coords(coords), value)
    }

    /// Row-major iterator pairing each element with its coordinates.
    ///
    /// ```
    /// use tenplus_core::TensorStore;
    ///
    /// let t = TensorStore::from_vec(vec!['a', 'b', 'c', 'd'], &[2, 2]).unwrap();
    /// let last = t.indexed_iter().last().unwrap();
    /// assert_eq!(last, (vec![1, 1], &'d'));
    /// ```
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> + '_ {
        MultiIndexCursor::over_shape(&self.shape)
            .into_iter()
            .flatten()
            .zip(self.elements.iter())
    }
}

/// Dual-mode indexing by array: `t[[i]]` is linear, `t[[i, j, ..]]` is
/// per-dimension.
///
/// # Panics
///
/// Panics when the subscript is out of bounds or has the wrong rank. Use
/// [`TensorStore::get`] for a checked variant.
impl<T, const N: usize> Index<[usize; N]> for TensorStore<T> {
    type Output = T;

    fn index(&self, index: [usize; N]) -> &Self::Output {
        match self.get(&index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for TensorStore<T> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        match self.get_mut(&index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Index<&[usize]> for TensorStore<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<&[usize]> for TensorStore<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::IndexError;
    use crate::shape::sub2ind;
    use crate::{Subscript, TensorStore};

    fn sample() -> TensorStore<i32> {
        TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap()
    }

    #[test]
    fn test_dual_mode_get() {
        let t = sample();
        assert_eq!(*t.get(&[1, 2]).unwrap(), 6);
        assert_eq!(*t.get(&[0]).unwrap(), 1);
        assert_eq!(*t.get(5).unwrap(), 6);
        assert_eq!(
            t.get(&[1, 2, 0]).unwrap_err(),
            IndexError::RankMismatch {
                expected: 2,
                got: 3
            }
        );
        assert_eq!(
            t.get(&[6]).unwrap_err(),
            IndexError::LinearOutOfBounds { index: 6, len: 6 }
        );
    }

    #[test]
    fn test_explicit_coords_on_rank_one() {
        let t = TensorStore::from_vec(vec![10, 20, 30], &[3]).unwrap();
        assert_eq!(*t.get_at(&[2]).unwrap(), 30);
        assert_eq!(
            t.get_at(&[3]).unwrap_err(),
            IndexError::OutOfBounds {
                dim: 0,
                index: 3,
                size: 3
            }
        );
        assert!(t.get(Subscript::Coords(&[])).is_err());
    }

    #[test]
    fn test_linear_matches_coordinates() {
        let t = TensorStore::from_fn(&[2, 3, 4], |c| c[0] * 100 + c[1] * 10 + c[2]).unwrap();
        for (coords, value) in t.indexed_iter() {
            let offset = sub2ind(&coords, t.shape()).unwrap();
            assert_eq!(t.get_linear(offset).unwrap(), value);
            assert_eq!(t.get_at(&coords).unwrap(), value);
        }
    }

    #[test]
    fn test_set_modes() {
        let mut t = sample();
        t.set(&[0, 1], 20).unwrap();
        t.set(&[5], 60).unwrap();
        t.set_at(&[1, 0], 40).unwrap();
        assert_eq!(t.as_slice(), &[1, 20, 3, 40, 5, 60]);
    }

    #[test]
    fn test_failed_set_leaves_elements() {
        let mut t = sample();
        assert!(t.set(&[2, 0], 0).is_err());
        assert!(t.set_linear(42, 0).is_err());
        assert_eq!(t, sample());
    }

    #[test]
    fn test_index_operators() {
        let mut t = sample();
        assert_eq!(t[[1, 2]], 6);
        assert_eq!(t[[3]], 4);
        t[[0, 0]] = 7;
        let coords = vec![0, 0];
        assert_eq!(t[coords.as_slice()], 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_operator_panics() {
        let t = sample();
        let _ = t[[2, 0]];
    }
}
