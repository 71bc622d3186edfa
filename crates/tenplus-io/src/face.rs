//! Matrix-face addressing shared by the CSV writer and the grid renderer

use tenplus_core::shape::row_major_strides;
use tenplus_core::Shape;

/// Storage offsets of the 2-D faces of a tensor with a given shape.
///
/// A rank-1 tensor is a single row; otherwise dimensions 0 and 1 are the
/// rows and columns of each face and dimensions 2.. pick the face.
pub(crate) struct FaceLayout {
    pub rows: usize,
    pub columns: usize,
    strides: Shape,
}

impl FaceLayout {
    pub fn new(shape: &[usize]) -> Self {
        let (rows, columns) = match *shape {
            [] => (0, 0),
            [columns] => (1, columns),
            [rows, columns, ..] => (rows, columns),
        };
        Self {
            rows,
            columns,
            strides: row_major_strides(shape),
        }
    }

    /// Offsets of row `r` on the face at `higher`, left to right.
    pub fn row(&self, higher: &[usize], r: usize) -> impl Iterator<Item = usize> {
        let (start, column_stride) = match self.strides.as_slice() {
            [] => (0, 0),
            [stride] => (0, *stride),
            [row_stride, column_stride, rest @ ..] => {
                let face_start: usize = higher.iter().zip(rest).map(|(i, s)| i * s).sum();
                (face_start + r * row_stride, *column_stride)
            }
        };
        (0..self.columns).map(move |c| start + c * column_stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offsets_follow_row_major_layout() {
        let layout = FaceLayout::new(&[2, 3, 2]);
        assert_eq!((layout.rows, layout.columns), (2, 3));
        assert_eq!(layout.row(&[0], 0).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(layout.row(&[1], 1).collect::<Vec<_>>(), vec![7, 9, 11]);

        let vector = FaceLayout::new(&[4]);
        assert_eq!((vector.rows, vector.columns), (1, 4));
        assert_eq!(vector.row(&[], 0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
