use crate::loom::{layout::Shape, matrix::Matrix, slice::Slice};

/// Copies a row-major buffer of exactly `shape.size()` values.
#[derive(Debug, Clone)]
pub struct CopyOp<'a, T> {
    pub shape: Shape,
    pub source: &'a [T],
}

/// Element-wise sum of two matrices of the same shape.
#[derive(Debug, Clone)]
pub struct AddOp<'a, T> {
    pub lhs: &'a Matrix<T>,
    pub rhs: &'a Matrix<T>,
}

/// Matrix product of `[m, k]` and `[k, n]`.
#[derive(Debug, Clone)]
pub struct DotOp<'a, T> {
    pub lhs: &'a Matrix<T>,
    pub rhs: &'a Matrix<T>,
    pub shape: Shape,
}

#[derive(Debug, Clone)]
pub struct TransposeOp<'a, T> {
    pub input: &'a Matrix<T>,
}

/// Copies a checked rectangular region.
#[derive(Debug, Clone)]
pub struct SliceOp<'a, T> {
    pub input: &'a Matrix<T>,
    pub slice: Slice,
    pub shape: Shape,
}
