//! Integration tests for tenplus-core
//!
//! These tests exercise the public API end to end: construction, dual-mode
//! access, slicing and the rank-constrained wrappers.

use tenplus_core::{
    FaceCursor, IndexError, Matrix, MultiIndexCursor, Selector, ShapeError, SliceSpec,
    TensorError, TensorStore, Vector,
};

#[test]
fn test_documented_scenarios() {
    let t = TensorStore::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();

    // Coordinates vs linear order
    assert_eq!(*t.get(&[1, 2]).unwrap(), 6);
    assert_eq!(*t.get(&[0]).unwrap(), 1);

    // Block slice
    let spec = SliceSpec::new(vec![Selector::Range(0, 1), Selector::Range(1, 2)]);
    let block = t.get_slice(&spec).unwrap();
    assert_eq!(block.shape(), &[2, 2]);
    assert_eq!(block.as_slice(), &[2, 3, 5, 6]);

    // Rank mismatch
    assert!(matches!(
        t.get(&[1, 2, 0]),
        Err(IndexError::RankMismatch { .. })
    ));

    // Cursor order
    let coords: Vec<_> = MultiIndexCursor::new(vec![0, 0], vec![1, 2])
        .unwrap()
        .collect();
    assert_eq!(
        coords,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2]
        ]
    );
}

#[test]
fn test_slice_of_slice_matches_direct_slice() {
    let t = TensorStore::from_fn(&[4, 5, 3], |c| c[0] * 100 + c[1] * 10 + c[2]).unwrap();

    let outer = t.get_slice(&"1:3, 1:4, 0:2".parse().unwrap()).unwrap();
    let inner = outer.get_slice(&"1:2, 0:1, 2".parse().unwrap()).unwrap();
    let direct = t.get_slice(&"2:3, 1:2, 2".parse().unwrap()).unwrap();

    assert_eq!(inner, direct);
    assert_eq!(direct.as_slice(), &[212, 222, 312, 322]);
}

#[test]
fn test_set_slice_then_read_back_3d() {
    let mut t = TensorStore::from_elem(&[2, 3, 4], 0.0).unwrap();
    let spec: SliceSpec = "1, 0:2, 1:2".parse().unwrap();
    let patch = TensorStore::from_fn(&[1, 3, 2], |c| (c[1] * 2 + c[2]) as f64 + 0.5).unwrap();

    t.set_slice(&spec, &patch).unwrap();

    assert_eq!(*t.get(&[1, 0, 1]).unwrap(), 0.5);
    assert_eq!(*t.get(&[1, 2, 2]).unwrap(), 5.5);
    assert_eq!(*t.get(&[0, 0, 1]).unwrap(), 0.0);
    assert_eq!(t.get_slice(&spec).unwrap(), patch);
}

#[test]
fn test_error_paths_leave_tensor_untouched() {
    let original = TensorStore::from_fn(&[3, 3], |c| c[0] * 3 + c[1]).unwrap();
    let mut t = original.clone();

    let value = TensorStore::from_elem(&[2, 2], 9).unwrap();
    let errors = [
        t.set_slice(&"0:2, 0:1".parse().unwrap(), &value).unwrap_err(),
        t.set_slice(&"2:3, 0:1".parse().unwrap(), &value).unwrap_err(),
        t.set_slice(&"0:1, 0:1, 0".parse().unwrap(), &value).unwrap_err(),
    ];

    assert!(matches!(
        errors[0],
        TensorError::Shape(ShapeError::SliceSizeMismatch { .. })
    ));
    assert!(errors[1].is_index());
    assert!(matches!(
        errors[2],
        TensorError::Shape(ShapeError::RankMismatch {
            expected: 2,
            got: 3
        })
    ));
    assert_eq!(t, original);
}

#[test]
fn test_face_cursor_order_for_display() {
    let faces: Vec<Vec<usize>> = FaceCursor::new(&[2, 2, 3, 2])
        .unwrap()
        .map(|face| face.index)
        .collect();
    assert_eq!(
        faces,
        vec![
            vec![0, 0],
            vec![1, 0],
            vec![2, 0],
            vec![0, 1],
            vec![1, 1],
            vec![2, 1]
        ]
    );
}

#[test]
fn test_wrappers_compose_over_store() {
    let m = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let col: Vector<i32> = m.column(0).unwrap();
    assert_eq!(col.as_slice(), &[1, 3, 5]);

    let back: Matrix<i32> = Matrix::try_from(m.clone().into_tensor()).unwrap();
    assert_eq!(back, m);
}
