use derive_more::Display;

use super::matrix::DimensionError;

/// Dimensions of a row-major matrix.
///
/// A `Shape` can only be obtained through [`Shape::new`] or its `TryFrom` impls,
/// so `rows * cols` is always addressable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({rows}, {cols})")]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Creates a shape. Returns error if the element count overflows.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        match rows.checked_mul(cols) {
            Some(_) => Ok(Self { rows, cols }),
            None => Err(DimensionError::Overflow(rows, cols)),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Linear offset of `(row, col)` in a row-major buffer. Does not check bounds.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The shape with rows and columns swapped.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = DimensionError;

    #[inline]
    fn try_from((rows, cols): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(rows, cols)
    }
}

impl TryFrom<(isize, isize)> for Shape {
    type Error = DimensionError;

    fn try_from((rows, cols): (isize, isize)) -> Result<Self, Self::Error> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Self::new(r, c),
            _ => Err(DimensionError::Negative(rows, cols)),
        }
    }
}
