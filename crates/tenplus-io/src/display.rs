//! Human-readable grid rendering
//!
//! Elements are laid out as aligned columns using the tensor's own
//! [`NumberFormat`](tenplus_core::NumberFormat). Tensors of rank 3 and up are
//! printed as a sequence of matrix faces in display order (dimension 2
//! fastest), each headed by a label such as `T(:, :, 1, 0) =`.
//!
//! ```
//! use tenplus_core::TensorStore;
//! use tenplus_io::display::TensorDisplay;
//!
//! let mut t = TensorStore::from_vec_named(vec![1, 2, 3, 4], &[2, 2], Some("A"), None).unwrap();
//! t.format_mut().width = 3;
//! assert_eq!(t.display().to_string(), "A =\n1   2\n3   4\n");
//! ```

use crate::face::FaceLayout;
use std::fmt::{self, Display};
use tenplus_core::{FaceCursor, TensorStore};

/// Grid rendering of a tensor, created by [`TensorDisplay::display`]
pub struct DisplayGrid<'a, T> {
    tensor: &'a TensorStore<T>,
}

impl<'a, T> DisplayGrid<'a, T> {
    pub fn new(tensor: &'a TensorStore<T>) -> Self {
        Self { tensor }
    }

    /// Name to print, if the tensor has one and wants it shown.
    fn shown_name(&self) -> Option<&'a str> {
        if self.tensor.show_name() {
            self.tensor.name()
        } else {
            None
        }
    }
}

impl<T: Display> DisplayGrid<'_, T> {
    fn write_face(
        &self,
        f: &mut fmt::Formatter<'_>,
        layout: &FaceLayout,
        higher: &[usize],
    ) -> fmt::Result {
        let format = self.tensor.format();
        let elements = self.tensor.as_slice();

        for r in 0..layout.rows {
            let cells: Vec<String> = layout
                .row(higher, r)
                .map(|offset| format.format_value(&elements[offset]))
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

impl<T: Display> Display for DisplayGrid<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.shown_name();
        let layout = FaceLayout::new(self.tensor.shape());

        if self.tensor.rank() <= 2 {
            if let Some(name) = name {
                writeln!(f, "{name} =")?;
            }
            return self.write_face(f, &layout, &[]);
        }

        let faces = match FaceCursor::new(self.tensor.shape()) {
            Ok(faces) => faces,
            Err(_) => return Err(fmt::Error),
        };
        for (i, face) in faces.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let label: Vec<String> = face.index.iter().map(usize::to_string).collect();
            writeln!(f, "{}(:, :, {}) =", name.unwrap_or(""), label.join(", "))?;
            self.write_face(f, &layout, &face.index)?;
        }
        Ok(())
    }
}

/// Adds `.display()` to tensors, mirroring `Path::display`.
pub trait TensorDisplay<T> {
    fn display(&self) -> DisplayGrid<'_, T>;
}

impl<T> TensorDisplay<T> for TensorStore<T> {
    fn display(&self) -> DisplayGrid<'_, T> {
        DisplayGrid::new(self)
    }
}

/// Render `tensor` to a string.
pub fn render<T: Display>(tensor: &TensorStore<T>) -> String {
    DisplayGrid::new(tensor).to_string()
}
