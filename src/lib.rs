pub mod hal;
pub mod loom;

pub use loom::{
    layout::Shape,
    matrix::{DimensionError, IndexError, Matrix, MatrixError},
    num::{DataType, Scalar},
    ops::RowOp,
    slice::Slice,
};
