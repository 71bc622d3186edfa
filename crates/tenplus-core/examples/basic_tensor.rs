//! Basic tensor construction and element access.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use tenplus_core::{sub2ind, Matrix, Subscript, TensorStore, Vector};

fn main() -> anyhow::Result<()> {
    println!("=== tenplus-core: Basic Tensors ===\n");

    let t = TensorStore::from_vec_named((1..=24).collect(), &[2, 3, 4], Some("T"), None)?;
    println!(
        "{} has shape {:?} and {} elements",
        t.name().unwrap_or("?"),
        t.shape(),
        t.len()
    );

    // Several integers are coordinates, one integer is a linear index
    println!("T[1, 2, 3] = {}", t.get(&[1, 2, 3])?);
    println!("T[23]      = {}", t.get(&[23])?);
    println!("offset of [1, 2, 3] = {}", sub2ind(&[1, 2, 3], t.shape())?);
    println!("explicit linear 5   = {}", t.get(Subscript::Linear(5))?);

    match t.get(&[2, 0, 0]) {
        Ok(v) => println!("unexpected value {v}"),
        Err(err) => println!("out of bounds: {err}"),
    }

    let mut copy = TensorStore::from_existing(&t, Some("U"), Some(false));
    copy.set(&[0, 0, 0], 100)?;
    copy.format_mut().width = 4;
    println!(
        "\ncopy U[0] = {}, original T[0] = {}, widths {} / {}",
        copy.get(&[0])?,
        t.get(&[0])?,
        copy.format().width,
        t.format().width
    );

    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    let v = Vector::from_elem(3, 0.5)?;
    println!(
        "\nmatrix {}x{}, second row {:?}",
        m.rows(),
        m.columns(),
        m.row(1)?.as_slice()
    );
    println!("vector {:?}", v.as_slice());

    Ok(())
}
