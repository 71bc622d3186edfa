//! Comma-separated text round-tripping
//!
//! # Layout
//!
//! Elements of a row are separated by commas and rows by newlines. Tensors
//! of rank 3 and up are written as a sequence of matrix faces (dimensions 0
//! and 1) in display order, dimension 2 advancing fastest. Consecutive faces
//! are separated by a line made only of semicolons, one per dimension
//! boundary crossed: `;` between the matrices of a 3-D tensor, `;;` between
//! the 3-D blocks of a 4-D tensor, and so on.
//!
//! ```text
//! 1,2
//! 3,4
//! ;
//! 5,6
//! 7,8
//! ```
//!
//! A single row parses back as a rank-1 tensor, and trailing dimensions of
//! extent 1 leave no separators behind, so those shapes collapse on the way
//! back.
//!
//! # Examples
//!
//! ```
//! use tenplus_core::TensorStore;
//! use tenplus_io::csv::{from_csv, to_csv};
//!
//! let t = TensorStore::from_vec((1..=8).collect::<Vec<i32>>(), &[2, 2, 2]).unwrap();
//! let text = to_csv(&t);
//! assert_eq!(text, "1,3\n5,7\n;\n2,4\n6,8");
//!
//! let back: TensorStore<i32> = from_csv(&text).unwrap();
//! assert_eq!(back, t);
//! ```

use crate::error::CsvError;
use crate::face::FaceLayout;
use std::fmt::Display;
use std::str::FromStr;
use tenplus_core::{FaceCursor, MultiIndexCursor, TensorStore};

/// Write `tensor` as comma-separated text.
pub fn to_csv<T: Display>(tensor: &TensorStore<T>) -> String {
    let shape = tensor.shape();
    let elements = tensor.as_slice();
    let layout = FaceLayout::new(shape);
    let mut lines = Vec::new();

    for face in FaceCursor::new(shape).into_iter().flatten() {
        if face.boundaries > 0 {
            lines.push(";".repeat(face.boundaries));
        }
        for r in 0..layout.rows {
            let cells: Vec<String> = layout
                .row(&face.index, r)
                .map(|offset| elements[offset].to_string())
                .collect();
            lines.push(cells.join(","));
        }
    }

    lines.join("\n")
}

/// Parse comma-separated text produced by [`to_csv`].
pub fn from_csv<T>(text: &str) -> Result<TensorStore<T>, CsvError>
where
    T: FromStr,
    T::Err: Display,
{
    from_csv_named(text, None, None)
}

/// [`from_csv`] with display name settings; `show_name` defaults to
/// whether a name is given.
pub fn from_csv_named<T>(
    text: &str,
    name: Option<&str>,
    show_name: Option<bool>,
) -> Result<TensorStore<T>, CsvError>
where
    T: FromStr,
    T::Err: Display,
{
    let (faces, separators) = split_faces(text)?;
    let (rows, columns) = check_rectangular(&faces)?;

    let levels: Vec<usize> = separators.iter().map(|&(_, level)| level).collect();
    let higher = higher_extents(&levels, faces.len())?;

    let shape: Vec<usize> = if higher.is_empty() && rows == 1 {
        vec![columns]
    } else {
        [rows, columns].into_iter().chain(higher.iter().copied()).collect()
    };
    check_separators(&shape, faces.len(), &levels)?;
    tracing::debug!(?shape, faces = faces.len(), "parsed csv layout");

    // Face number of a higher-dimension coordinate, dimension 2 fastest
    let mut face_strides = Vec::with_capacity(higher.len());
    let mut stride = 1;
    for &extent in &higher {
        face_strides.push(stride);
        stride *= extent;
    }

    let mut data = Vec::with_capacity(shape.iter().product());
    for coords in MultiIndexCursor::over_shape(&shape)? {
        let (face, r, c) = if shape.len() == 1 {
            (0, 0, coords[0])
        } else {
            let face = coords[2..]
                .iter()
                .zip(&face_strides)
                .map(|(i, s)| i * s)
                .sum::<usize>();
            (face, coords[0], coords[1])
        };
        let (line, cells) = &faces[face][r];
        data.push(parse_cell(cells[c], *line)?);
    }

    Ok(TensorStore::from_vec_named(data, &shape, name, show_name)?)
}

type RawRow<'a> = (usize, Vec<&'a str>);

/// Group non-empty lines into faces and collect `(line, level)` separators.
fn split_faces(text: &str) -> Result<(Vec<Vec<RawRow<'_>>>, Vec<(usize, usize)>), CsvError> {
    let mut faces = Vec::new();
    let mut separators = Vec::new();
    let mut current: Vec<RawRow<'_>> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.chars().all(|ch| ch == ';') {
            if current.is_empty() {
                return Err(CsvError::MisplacedSeparator { line });
            }
            faces.push(std::mem::take(&mut current));
            separators.push((line, trimmed.len()));
        } else {
            current.push((line, trimmed.split(',').map(str::trim).collect()));
        }
    }

    if current.is_empty() {
        return match separators.last() {
            Some(&(line, _)) => Err(CsvError::MisplacedSeparator { line }),
            None => Err(CsvError::Empty),
        };
    }
    faces.push(current);
    Ok((faces, separators))
}

/// Every face must have the same rows and every row the same columns.
fn check_rectangular(faces: &[Vec<RawRow<'_>>]) -> Result<(usize, usize), CsvError> {
    let rows = faces[0].len();
    let columns = faces[0][0].1.len();

    for face in faces {
        if face.len() != rows {
            return Err(CsvError::RaggedFace {
                line: face[0].0,
                expected: rows,
                got: face.len(),
            });
        }
        for (line, cells) in face {
            if cells.len() != columns {
                return Err(CsvError::RaggedRow {
                    line: *line,
                    expected: columns,
                    got: cells.len(),
                });
            }
        }
    }
    Ok((rows, columns))
}

/// Extents of dimensions 2.. implied by the separator levels.
///
/// The faces before the first separator deeper than `k` form one block of
/// dimensions `2..k+2`; its size divided by the previous block size is the
/// extent of dimension `k + 1`.
fn higher_extents(levels: &[usize], faces: usize) -> Result<Vec<usize>, CsvError> {
    let depth = levels.iter().copied().max().unwrap_or(0);
    let mut extents = Vec::with_capacity(depth);
    let mut inner = 1;

    for k in 1..=depth {
        let block = levels
            .iter()
            .position(|&level| level > k)
            .map_or(faces, |i| i + 1);
        if block % inner != 0 {
            return Err(CsvError::InconsistentSeparators);
        }
        extents.push(block / inner);
        inner = block;
    }
    Ok(extents)
}

/// The separators must be exactly the ones `to_csv` writes for `shape`.
fn check_separators(shape: &[usize], faces: usize, levels: &[usize]) -> Result<(), CsvError> {
    let expected: Vec<usize> = FaceCursor::new(shape)?
        .skip(1)
        .map(|face| face.boundaries)
        .collect();
    if expected.len() + 1 != faces || expected != levels {
        return Err(CsvError::InconsistentSeparators);
    }
    Ok(())
}

fn parse_cell<T>(cell: &str, line: usize) -> Result<T, CsvError>
where
    T: FromStr,
    T::Err: Display,
{
    if cell.is_empty() {
        return Err(CsvError::EmptyElement { line });
    }
    cell.parse().map_err(|err: T::Err| CsvError::InvalidElement {
        line,
        value: cell.to_string(),
        reason: err.to_string(),
    })
}
