//! Conversion between multi-dimensional subscripts and linear offsets
//!
//! All tensors in this crate are stored in row-major order: the last
//! dimension varies fastest. For a shape `[d0, d1, ..., dn]` the weight of
//! dimension `i` is the product of every entry after it, so the offset of a
//! coordinate `c` is `sum(c[i] * weight[i])`.
//!
//! # Examples
//!
//! ```
//! use tenplus_core::shape::{ind2sub, sub2ind};
//!
//! let shape = [2, 3, 4];
//! assert_eq!(sub2ind(&[1, 2, 3], &shape).unwrap(), 23);
//! assert_eq!(ind2sub(23, &shape).unwrap(), vec![1, 2, 3]);
//! ```

use crate::error::{IndexError, ShapeError};
use smallvec::SmallVec;

/// Shape type using SmallVec to avoid heap allocation for common ranks.
pub type Shape = SmallVec<[usize; 6]>;

/// Number of elements described by `shape`.
///
/// Defined as 1 for an empty shape, which validated tensors never have.
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Check that `shape` has rank >= 1 and only positive dimensions.
pub fn validate_shape(shape: &[usize]) -> Result<(), ShapeError> {
    if shape.is_empty() {
        return Err(ShapeError::NonPositiveDimension { dim: 0 });
    }
    if let Some(dim) = shape.iter().position(|&d| d == 0) {
        return Err(ShapeError::NonPositiveDimension { dim });
    }
    Ok(())
}

/// Row-major weight of every dimension of `shape`.
///
/// ```
/// use tenplus_core::shape::row_major_strides;
///
/// assert_eq!(row_major_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
/// ```
pub fn row_major_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = SmallVec::from_elem(1, shape.len());
    let mut prev = 1;
    for (stride, &dim) in strides.iter_mut().rev().zip(shape.iter().rev()) {
        *stride = prev;
        prev *= dim;
    }
    strides
}

/// Row-major linear offset of `subscripts` inside `shape`.
///
/// Fails if the number of subscripts differs from the rank, or if any
/// coordinate lies outside its dimension. Never clamps.
pub fn sub2ind(subscripts: &[usize], shape: &[usize]) -> Result<usize, IndexError> {
    if subscripts.len() != shape.len() {
        return Err(IndexError::RankMismatch {
            expected: shape.len(),
            got: subscripts.len(),
        });
    }

    let mut offset = 0;
    for (dim, (&index, &size)) in subscripts.iter().zip(shape).enumerate() {
        if index >= size {
            return Err(IndexError::OutOfBounds { dim, index, size });
        }
        offset = offset * size + index;
    }
    Ok(offset)
}

/// Decompose a linear offset back into coordinates by repeated division.
pub fn ind2sub(index: usize, shape: &[usize]) -> Result<Vec<usize>, IndexError> {
    let len = element_count(shape);
    if index >= len {
        return Err(IndexError::LinearOutOfBounds { index, len });
    }

    let mut coords = vec![0; shape.len()];
    let mut rest = index;
    for (coord, &size) in coords.iter_mut().rev().zip(shape.iter().rev()) {
        *coord = rest % size;
        rest /= size;
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_shape() {
        assert!(validate_shape(&[2, 3]).is_ok());
        assert_eq!(
            validate_shape(&[]),
            Err(ShapeError::NonPositiveDimension { dim: 0 })
        );
        assert_eq!(
            validate_shape(&[2, 0, 3]),
            Err(ShapeError::NonPositiveDimension { dim: 1 })
        );
    }

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[2, 3, 4]), 24);
        assert_eq!(element_count(&[7]), 7);
        assert_eq!(element_count(&[]), 1);
    }

    #[test]
    fn test_sub2ind_row_major() {
        let shape = [2, 3];
        assert_eq!(sub2ind(&[0, 0], &shape).unwrap(), 0);
        assert_eq!(sub2ind(&[0, 2], &shape).unwrap(), 2);
        assert_eq!(sub2ind(&[1, 0], &shape).unwrap(), 3);
        assert_eq!(sub2ind(&[1, 2], &shape).unwrap(), 5);
    }

    #[test]
    fn test_sub2ind_errors() {
        assert_eq!(
            sub2ind(&[1, 2, 0], &[2, 3]),
            Err(IndexError::RankMismatch {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(
            sub2ind(&[2, 0], &[2, 3]),
            Err(IndexError::OutOfBounds {
                dim: 0,
                index: 2,
                size: 2
            })
        );
    }

    #[test]
    fn test_strides_match_sub2ind() {
        let shape = [3, 4, 5];
        let strides = row_major_strides(&shape);
        let coords = [2, 1, 3];
        let by_strides: usize = coords.iter().zip(&strides).map(|(c, s)| c * s).sum();
        assert_eq!(sub2ind(&coords, &shape).unwrap(), by_strides);
    }

    #[test]
    fn test_ind2sub_out_of_bounds() {
        assert_eq!(
            ind2sub(6, &[2, 3]),
            Err(IndexError::LinearOutOfBounds { index: 6, len: 6 })
        );
    }
}
