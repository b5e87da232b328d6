use itertools::Itertools;
use thiserror::Error;

use super::{
    layout::Shape,
    num::Scalar,
    ops::RowOp,
    slice::Slice,
};
use crate::hal::ops::CopyOp;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("dimension error: negative shape ({0}, {1})")]
    Negative(isize, isize),
    #[error("dimension error: shape ({0}, {1}) overflows the element count")]
    Overflow(usize, usize),
    #[error("dimension error: shape {0} needs more values than the {1} in source")]
    Source(Shape, usize),
    #[error("dimension error: cannot add shape {1} to {0}")]
    Add(Shape, Shape),
    #[error("dimension error: inner dimensions of {0} and {1} do not agree")]
    Dot(Shape, Shape),
    #[error("dimension error: slice {1} is out of range for shape {0}")]
    Slice(Shape, Slice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index error: ({row}, {col}) is out of range for shape {shape}")]
pub struct IndexError {
    pub shape: Shape,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// A dense matrix of `rows * cols` values in row-major order.
///
/// The matrix exclusively owns its buffer. Operations never mutate their operands;
/// each returns a freshly allocated matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix of zeros with the given shape.
    #[inline]
    pub fn zeros(shape: Shape) -> Self {
        let data = bytemuck::zeroed_vec(shape.size());
        Self { shape, data }
    }

    /// Create a `rows x cols` matrix. Every cell starts as zero.
    ///
    /// # Errors
    /// Returns [`DimensionError::Overflow`] if `rows * cols` is not addressable.
    ///
    /// # Example
    /// ```
    /// let m = weft::Matrix::<f64>::new(3, 2).unwrap();
    /// assert_eq!(m.get(2, 1), Ok(0.0));
    /// ```
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        Ok(Self::zeros(Shape::new(rows, cols)?))
    }

    /// Create a `rows x cols` matrix by copying row-major values out of `source`.
    ///
    /// Rows are copied in parallel. The matrix never aliases `source`; values past
    /// `rows * cols` are ignored.
    ///
    /// # Errors
    /// Returns [`DimensionError::Source`] if `source` holds fewer than `rows * cols` values.
    pub fn from_slice(rows: usize, cols: usize, source: &[T]) -> Result<Self, DimensionError> {
        let shape = Shape::new(rows, cols)?;
        if source.len() < shape.size() {
            log::debug!("copy rejected: {} values for shape {shape}", source.len());
            return Err(DimensionError::Source(shape, source.len()));
        }
        let source = &source[..shape.size()];
        Ok(CopyOp { shape, source }.execute())
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, DimensionError> {
        let mut output = Self::new(n, n)?;
        for index in 0..n {
            let offset = output.shape.offset(index, index);
            output.data[offset] = T::one();
        }
        Ok(output)
    }

    /// Wrap a buffer produced by a row op. `data` must hold exactly `shape.size()` values.
    #[inline]
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.size(), data.len());
        Self { shape, data }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Size of the buffer in bytes.
    #[inline]
    pub fn data_size(&self) -> usize {
        self.shape.size() * T::DATA_TYPE.size()
    }

    /// Returns the underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns row `index` as a slice.
    ///
    /// # Panics
    /// Panics if `index >= rows`.
    #[inline]
    pub fn row(&self, index: usize) -> &[T] {
        let start = self.shape.offset(index, 0);
        &self.data[start..start + self.cols()]
    }

    /// Iterates over column `index` from top to bottom.
    ///
    /// # Panics
    /// The iterator panics if `index >= cols` and the matrix has rows.
    #[inline]
    pub fn column(&self, index: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.rows()).map(move |row| self.data[self.shape.offset(row, index)])
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, IndexError> {
        match self.shape.contains(row, col) {
            true => Ok(self.shape.offset(row, col)),
            false => Err(IndexError {
                shape: self.shape,
                row,
                col,
            }),
        }
    }

    /// Gets the value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, IndexError> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }

    /// Sets the value at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), IndexError> {
        let offset = self.check_index(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Prints the rows, one per line, followed by the shape.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: Scalar> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for index in 0..self.rows() {
            writeln!(f, "{}", self.row(index).iter().format(" "))?;
        }
        write!(f, "{}", self.shape)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use half::f16;
    use itertools::Itertools;

    use super::{DimensionError, IndexError, Matrix, MatrixError};
    use crate::loom::layout::Shape;

    #[test]
    fn test_new() -> Result<(), Box<dyn Error>> {
        let mut m = Matrix::<f64>::new(3, 2)?;
        assert_eq!(m.shape(), Shape::new(3, 2)?);
        assert_eq!((m.rows(), m.cols()), (3, 2));
        for (r, c) in itertools::iproduct!(0..3, 0..2) {
            assert_eq!(m.get(r, c)?, 0.0);
        }

        m.set(2, 1, 4.5)?;
        assert_eq!(m.get(2, 1)?, 4.5);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 4.5]);

        assert_eq!(m.data_size(), 6 * size_of::<f64>());
        assert_eq!(Matrix::<f16>::new(3, 2)?.data_size(), 6 * size_of::<f16>());

        let empty = Matrix::<f32>::new(0, 4)?;
        assert_eq!(empty.as_slice().len(), 0);
        assert_eq!(empty.to_string(), "(0, 4)");
        Ok(())
    }

    #[test]
    fn test_new_overflow() {
        assert_eq!(
            Matrix::<f64>::new(usize::MAX, usize::MAX),
            Err(DimensionError::Overflow(usize::MAX, usize::MAX))
        );
    }

    #[test]
    fn test_index_error() -> Result<(), Box<dyn Error>> {
        let mut m = Matrix::<f64>::new(2, 3)?;
        let shape = m.shape();
        assert_eq!(m.get(2, 0), Err(IndexError { shape, row: 2, col: 0 }));
        assert_eq!(m.get(0, 3), Err(IndexError { shape, row: 0, col: 3 }));
        assert_eq!(
            m.set(5, 5, 1.0),
            Err(IndexError { shape, row: 5, col: 5 })
        );
        assert_eq!(m.as_slice(), &[0.0; 6]);

        let err: MatrixError = m.get(9, 9).unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "index error: (9, 9) is out of range for shape (2, 3)"
        );
        Ok(())
    }

    #[test]
    fn test_from_slice() -> Result<(), Box<dyn Error>> {
        fastrand::seed(42);

        const ROWS: usize = 7;
        const COLS: usize = 5;
        let mut data = (0..ROWS * COLS).map(|_| fastrand::f64()).collect_vec();
        let m = Matrix::from_slice(ROWS, COLS, &data)?;
        for (r, c) in itertools::iproduct!(0..ROWS, 0..COLS) {
            assert_eq!(m.get(r, c)?, data[r * COLS + c]);
        }

        // the matrix owns a deep copy
        let snapshot = data.clone();
        data.iter_mut().for_each(|x| *x += 1.0);
        assert_eq!(m.as_slice(), &snapshot[..]);

        assert_eq!(m.row(3), &snapshot[15..20]);
        assert_eq!(
            m.column(1).collect_vec(),
            (0..ROWS).map(|r| snapshot[r * COLS + 1]).collect_vec()
        );
        Ok(())
    }

    #[test]
    fn test_from_slice_short_source() -> Result<(), Box<dyn Error>> {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(
            Matrix::from_slice(2, 2, &data),
            Err(DimensionError::Source(Shape::new(2, 2)?, 3))
        );

        // trailing values are ignored
        let m = Matrix::from_slice(1, 2, &data)?;
        assert_eq!(m.as_slice(), &[1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_identity() -> Result<(), Box<dyn Error>> {
        let m = Matrix::<f16>::identity(3)?;
        for (r, c) in itertools::iproduct!(0..3, 0..3) {
            let expected = if r == c { f16::ONE } else { f16::ZERO };
            assert_eq!(m.get(r, c)?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Box<dyn Error>> {
        let m = Matrix::from_slice(2, 3, &[1.0, 2.5, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(m.to_string(), "1 2.5 3\n4 5 6\n(2, 3)");

        // one line per row, even when rows are empty
        let m = Matrix::<f64>::new(2, 0)?;
        assert_eq!(m.to_string(), "\n\n(2, 0)");

        let m = Matrix::<f64>::new(0, 3)?;
        assert_eq!(m.to_string(), "(0, 3)");
        Ok(())
    }
}
