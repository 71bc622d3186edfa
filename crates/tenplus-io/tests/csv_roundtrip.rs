//! CSV and display integration tests
//!
//! These tests check that the text formats built on top of the core
//! accessors agree with the core's own indexing.

use proptest::prelude::*;
use tenplus_core::{element_count, SliceSpec, TensorStore};
use tenplus_io::{from_csv, render, to_csv, CsvError, TensorDisplay};

// Shapes whose CSV form is unambiguous: several rows, trailing extents > 1
fn roundtrip_shape() -> impl Strategy<Value = Vec<usize>> {
    (2usize..4, 1usize..4, prop::collection::vec(2usize..4, 0..=2)).prop_map(
        |(rows, columns, higher)| {
            let mut shape = vec![rows, columns];
            shape.extend(higher);
            shape
        },
    )
}

proptest! {
    #[test]
    fn prop_csv_roundtrip(shape in roundtrip_shape()) {
        let data: Vec<i64> = (0..element_count(&shape) as i64).map(|x| x * 7 - 3).collect();
        let t = TensorStore::from_vec(data, &shape).unwrap();
        let back: TensorStore<i64> = from_csv(&to_csv(&t)).unwrap();
        prop_assert_eq!(back, t);
    }
}

#[test]
fn test_single_row_collapses_to_vector() {
    let row = TensorStore::from_vec(vec![1, 2, 3], &[1, 3]).unwrap();
    let back: TensorStore<i32> = from_csv(&to_csv(&row)).unwrap();
    assert_eq!(back.shape(), &[3]);
    assert_eq!(back.as_slice(), row.as_slice());
}

#[test]
fn test_csv_face_matches_slice() {
    let t = TensorStore::from_fn(&[2, 3, 2], |c| c[0] * 100 + c[1] * 10 + c[2]).unwrap();
    let text = to_csv(&t);
    let first_face = text.split("\n;\n").next().unwrap();

    let face = t.get_slice(&"0:1, 0:2, 0".parse::<SliceSpec>().unwrap()).unwrap();
    let face = TensorStore::from_vec(face.into_vec(), &[2, 3]).unwrap();
    assert_eq!(first_face, to_csv(&face));
}

#[test]
fn test_float_csv_and_parse_error() {
    let t: TensorStore<f64> = from_csv("0.5, -1.25\n3, 4e2").unwrap();
    assert_eq!(t.as_slice(), &[0.5, -1.25, 3.0, 400.0]);

    let err = from_csv::<f64>("1,2\n3,abc").unwrap_err();
    match err {
        CsvError::InvalidElement { line, value, .. } => {
            assert_eq!(line, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_display_of_slice_uses_derived_name_and_format() {
    let mut t =
        TensorStore::from_vec_named(vec![1, 2, 3, 4, 5, 6], &[2, 3], Some("M"), None).unwrap();
    t.format_mut().width = 2;

    let s = t.get_slice(&"0:1, 1:2".parse::<SliceSpec>().unwrap()).unwrap();
    assert_eq!(render(&s), "M[0:1, 1:2] =\n2  3\n5  6\n");
    assert_eq!(s.display().to_string(), render(&s));
}
