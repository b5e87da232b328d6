use super::ops::{AddOp, DotOp, SliceOp, TransposeOp};
use crate::loom::{
    layout::Shape,
    matrix::{DimensionError, Matrix},
    num::Scalar,
    ops::RowOp,
    slice::Slice,
};

impl<T: Scalar> Matrix<T> {
    /// # Element-wise Addition (`add`)
    /// Adds two matrices cell by cell, one row per task.
    ///
    /// ## Arguments
    /// * `self` - The first operand.
    /// * `other` - The second operand, must have the same shape as `self`.
    ///
    /// ## Returns
    /// * `Result<Matrix<T>, DimensionError>` - A new matrix holding the sum,
    ///   or an error if the shapes differ.
    pub fn add(&self, other: &Matrix<T>) -> Result<Self, DimensionError> {
        if self.shape() != other.shape() {
            log::debug!("add rejected: {} + {}", self.shape(), other.shape());
            return Err(DimensionError::Add(self.shape(), other.shape()));
        }
        let op = AddOp {
            lhs: self,
            rhs: other,
        };
        Ok(op.execute())
    }

    /// # Matrix Multiplication (`dot`)
    /// Multiplies `self` of shape `[M, K]` by `other` of shape `[K, N]`, one output row per task.
    ///
    /// Each output cell is accumulated in place over `K` in ascending order.
    ///
    /// ## Returns
    /// * `Result<Matrix<T>, DimensionError>` - A new matrix of shape `[M, N]`,
    ///   or an error if the inner dimensions disagree.
    pub fn dot(&self, other: &Matrix<T>) -> Result<Self, DimensionError> {
        if self.cols() != other.rows() {
            log::debug!("dot rejected: {} x {}", self.shape(), other.shape());
            return Err(DimensionError::Dot(self.shape(), other.shape()));
        }
        let shape = Shape::new(self.rows(), other.cols())?;
        let op = DotOp {
            lhs: self,
            rhs: other,
            shape,
        };
        Ok(op.execute())
    }

    /// # Transpose (`transpose`)
    /// Returns a new matrix of shape `[cols, rows]` with `output[c][r] = self[r][c]`.
    pub fn transpose(&self) -> Self {
        TransposeOp { input: self }.execute()
    }

    /// # Sub-matrix (`slice`)
    /// Copies columns `[x, x2)` of rows `[y, y2)` into a new matrix of shape `[y2 - y, x2 - x]`.
    ///
    /// Note the column range comes first. See [`Matrix::slice_with`] for named ranges.
    ///
    /// ## Returns
    /// * `Result<Matrix<T>, DimensionError>` - The copied region, or an error if the
    ///   rectangle is empty or exceeds the shape of `self`.
    #[inline]
    pub fn slice(&self, x: usize, x2: usize, y: usize, y2: usize) -> Result<Self, DimensionError> {
        self.slice_with(Slice::new(x, x2, y, y2))
    }

    /// Copies the region selected by `slice` into a new matrix.
    ///
    /// ```
    /// use weft::Matrix;
    ///
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
    /// let bottom = m.slice_with((0..2, 1..2))?;
    /// assert_eq!(bottom.as_slice(), &[3.0, 4.0]);
    /// # Ok::<(), weft::DimensionError>(())
    /// ```
    pub fn slice_with(&self, slice: impl Into<Slice>) -> Result<Self, DimensionError> {
        let slice = slice.into().check(self.shape()).inspect_err(|err| {
            log::debug!("slice rejected: {err}");
        })?;
        let shape = slice.shape()?;
        let op = SliceOp {
            input: self,
            slice,
            shape,
        };
        Ok(op.execute())
    }
}
