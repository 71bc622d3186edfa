//! Slice extraction and assignment.
//!
//! Run with:
//! ```bash
//! cargo run --example slices
//! ```

use tenplus_core::{FaceCursor, SliceSpec, TensorStore};

fn main() -> anyhow::Result<()> {
    println!("=== tenplus-core: Slices ===\n");

    let mut t = TensorStore::from_fn(&[3, 4], |c| c[0] * 10 + c[1])?;
    t.set_name(Some("grid".to_string()));

    let spec: SliceSpec = "0:1, 1:2".parse()?;
    let block = t.get_slice(&spec)?;
    println!(
        "{} -> shape {:?}, elements {:?}",
        block.name().unwrap_or("?"),
        block.shape(),
        block.as_slice()
    );

    // One selector addresses the flat element range
    let flat = t.get_slice(&"5:8".parse::<SliceSpec>()?)?;
    println!("linear 5:8 -> {:?}", flat.as_slice());

    // Write a block back somewhere else
    let target: SliceSpec = "1:2, 2:3".parse()?;
    t.set_slice(&target, &block)?;
    println!("after set_slice: {:?}", t.as_slice());

    let wrong = TensorStore::from_elem(&[3], 0)?;
    if let Err(err) = t.set_slice(&target, &wrong) {
        println!("rejected: {err}");
    }

    println!("\nfaces of a [2, 2, 2, 3] tensor:");
    for face in FaceCursor::new(&[2, 2, 2, 3])? {
        println!(
            "  (:, :, {:?})  boundaries crossed: {}",
            face.index, face.boundaries
        );
    }

    Ok(())
}
