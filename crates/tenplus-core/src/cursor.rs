//! Row-major walking of rectangular index regions
//!
//! [`MultiIndexCursor`] enumerates every coordinate between an inclusive
//! lower and upper bound exactly once, last dimension fastest. Slice
//! extraction and assignment both walk their region with it, which keeps
//! reads and writes in the same order.
//!
//! [`FaceCursor`] reuses the same carry logic over the *reversed* higher
//! dimensions of a tensor to enumerate its 2-D matrix faces in display
//! order (dimension 2 fastest).
//!
//! # Examples
//!
//! ```
//! use tenplus_core::cursor::MultiIndexCursor;
//!
//! let cursor = MultiIndexCursor::new(vec![0, 0], vec![1, 2]).unwrap();
//! let coords: Vec<Vec<usize>> = cursor.collect();
//! assert_eq!(
//!     coords,
//!     vec![
//!         vec![0, 0], vec![0, 1], vec![0, 2],
//!         vec![1, 0], vec![1, 1], vec![1, 2],
//!     ]
//! );
//! ```

use crate::error::ShapeError;
use crate::shape::validate_shape;
use std::iter::FusedIterator;

/// Iterator over every coordinate of an inclusive rectangular region.
///
/// Starts at `lower`. Each step increments the last coordinate; when it
/// passes its upper bound it is reset to its lower bound and the carry moves
/// one dimension to the left. A carry past the first dimension exhausts the
/// cursor for good: build a new one to walk the region again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiIndexCursor {
    current: Vec<usize>,
    lower: Vec<usize>,
    upper: Vec<usize>,
    remaining: usize,
    exhausted: bool,
}

impl MultiIndexCursor {
    /// Create a cursor over `lower..=upper` (per dimension).
    ///
    /// # Errors
    ///
    /// * [`ShapeError::RankMismatch`] if the bounds have different lengths
    /// * [`ShapeError::InvertedRange`] if some `lower[i] > upper[i]`
    /// * [`ShapeError::RegionTooLarge`] if the position count overflows `usize`
    pub fn new(lower: Vec<usize>, upper: Vec<usize>) -> Result<Self, ShapeError> {
        if lower.len() != upper.len() {
            return Err(ShapeError::RankMismatch {
                expected: lower.len(),
                got: upper.len(),
            });
        }
        for (dim, (&low, &high)) in lower.iter().zip(&upper).enumerate() {
            if low > high {
                return Err(ShapeError::InvertedRange { dim, low, high });
            }
        }

        let remaining = lower
            .iter()
            .zip(&upper)
            .try_fold(1usize, |count, (&low, &high)| {
                (high - low).checked_add(1)?.checked_mul(count)
            })
            .ok_or(ShapeError::RegionTooLarge)?;

        Ok(Self {
            current: lower.clone(),
            lower,
            upper,
            remaining,
            exhausted: false,
        })
    }

    /// Cursor over the full index space of `shape`.
    pub fn over_shape(shape: &[usize]) -> Result<Self, ShapeError> {
        validate_shape(shape)?;
        let lower = vec![0; shape.len()];
        let upper = shape.iter().map(|&d| d - 1).collect();
        Self::new(lower, upper)
    }

    /// Coordinate the next call to `next()` will yield, if any.
    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.current)
        }
    }

    pub fn lower(&self) -> &[usize] {
        &self.lower
    }

    pub fn upper(&self) -> &[usize] {
        &self.upper
    }

    /// Number of positions walked per dimension.
    pub fn extents(&self) -> Vec<usize> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&low, &high)| high - low + 1)
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move to the next coordinate, carrying leftwards on overflow.
    ///
    /// Returns `false` once the carry runs past dimension 0.
    fn advance(&mut self) -> bool {
        for dim in (0..self.current.len()).rev() {
            if self.current[dim] < self.upper[dim] {
                self.current[dim] += 1;
                return true;
            }
            self.current[dim] = self.lower[dim];
        }
        self.exhausted = true;
        false
    }
}

impl Iterator for MultiIndexCursor {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        self.remaining -= 1;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MultiIndexCursor {}

impl FusedIterator for MultiIndexCursor {}

/// One 2-D face of a tensor, as produced by [`FaceCursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Coordinates of dimensions 2 and up, in dimension order.
    /// Empty for tensors of rank <= 2.
    pub index: Vec<usize>,
    /// Number of dimension boundaries crossed since the previous face:
    /// 0 for the first face, 1 when only dimension 2 moved, 2 when
    /// dimension 3 moved, and so on.
    pub boundaries: usize,
}

/// Enumerates the matrix faces (dimensions 0 and 1 held whole) of a tensor.
///
/// Faces come out with dimension 2 advancing fastest, then dimension 3, and
/// so on, which is the reverse of storage order. Internally this is a
/// [`MultiIndexCursor`] over the reversed higher dimensions whose output is
/// reversed back.
///
/// ```
/// use tenplus_core::cursor::FaceCursor;
///
/// let faces: Vec<Vec<usize>> = FaceCursor::new(&[2, 2, 2, 2])
///     .unwrap()
///     .map(|face| face.index)
///     .collect();
/// assert_eq!(faces, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct FaceCursor {
    inner: MultiIndexCursor,
    previous: Option<Vec<usize>>,
}

impl FaceCursor {
    pub fn new(shape: &[usize]) -> Result<Self, ShapeError> {
        validate_shape(shape)?;
        let higher = shape.get(2..).unwrap_or(&[]);
        let lower = vec![0; higher.len()];
        let upper = higher.iter().rev().map(|&d| d - 1).collect();
        Ok(Self {
            inner: MultiIndexCursor::new(lower, upper)?,
            previous: None,
        })
    }
}

impl Iterator for FaceCursor {
    type Item = Face;

    fn next(&mut self) -> Option<Self::Item> {
        let mut index = self.inner.next()?;
        index.reverse();

        let boundaries = match &self.previous {
            None => 0,
            Some(prev) => prev
                .iter()
                .zip(&index)
                .rposition(|(a, b)| a != b)
                .map_or(0, |dim| dim + 1),
        };
        self.previous = Some(index.clone());

        Some(Face { index, boundaries })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FaceCursor {}

impl FusedIterator for FaceCursor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_row_major_order_then_exhausted() {
        let mut cursor = MultiIndexCursor::new(vec![0, 0], vec![1, 2]).unwrap();
        assert_eq!(cursor.len(), 6);
        let expected = [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]];
        for coords in expected {
            assert_eq!(cursor.next().unwrap(), coords.to_vec());
        }
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_cursor_offset_region() {
        let cursor = MultiIndexCursor::new(vec![1, 2, 0], vec![2, 2, 1]).unwrap();
        let coords: Vec<_> = cursor.collect();
        assert_eq!(
            coords,
            vec![vec![1, 2, 0], vec![1, 2, 1], vec![2, 2, 0], vec![2, 2, 1]]
        );
    }

    #[test]
    fn test_cursor_single_point() {
        let mut cursor = MultiIndexCursor::new(vec![3, 4], vec![3, 4]).unwrap();
        assert_eq!(cursor.current(), Some(&[3, 4][..]));
        assert_eq!(cursor.next(), Some(vec![3, 4]));
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_cursor_invalid_bounds() {
        assert_eq!(
            MultiIndexCursor::new(vec![0], vec![1, 2]).unwrap_err(),
            ShapeError::RankMismatch {
                expected: 1,
                got: 2
            }
        );
        assert_eq!(
            MultiIndexCursor::new(vec![0, 3], vec![1, 2]).unwrap_err(),
            ShapeError::InvertedRange {
                dim: 1,
                low: 3,
                high: 2
            }
        );
    }

    #[test]
    fn test_cursor_oversized_region() {
        assert_eq!(
            MultiIndexCursor::new(vec![0], vec![usize::MAX]).unwrap_err(),
            ShapeError::RegionTooLarge
        );
        assert_eq!(
            MultiIndexCursor::new(vec![0, 0], vec![1 << 40, 1 << 40]).unwrap_err(),
            ShapeError::RegionTooLarge
        );
        let edge = MultiIndexCursor::new(vec![1], vec![usize::MAX]).unwrap();
        assert_eq!(edge.len(), usize::MAX);
    }

    #[test]
    fn test_cursor_over_shape_counts() {
        let cursor = MultiIndexCursor::over_shape(&[2, 3, 4]).unwrap();
        assert_eq!(cursor.extents(), vec![2, 3, 4]);
        assert_eq!(cursor.count(), 24);
    }

    #[test]
    fn test_face_cursor_low_rank_has_one_face() {
        let faces: Vec<_> = FaceCursor::new(&[3, 4]).unwrap().collect();
        assert_eq!(
            faces,
            vec![Face {
                index: vec![],
                boundaries: 0
            }]
        );
    }

    #[test]
    fn test_face_cursor_boundaries() {
        let faces: Vec<_> = FaceCursor::new(&[1, 1, 2, 2]).unwrap().collect();
        let boundaries: Vec<_> = faces.iter().map(|f| f.boundaries).collect();
        assert_eq!(boundaries, vec![0, 1, 2, 1]);
        assert_eq!(faces[2].index, vec![0, 1]);
    }
}
