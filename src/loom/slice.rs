use std::ops::Range;

use derive_more::{Display, From, Into};

use super::{layout::Shape, matrix::DimensionError};

/// A half-open rectangle of a matrix: columns `cols`, rows `rows`.
///
/// Columns come first, matching the argument order of [`Matrix::slice`](super::matrix::Matrix::slice).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, From, Into, Display)]
#[display("[{}..{}, {}..{}]", cols.start, cols.end, rows.start, rows.end)]
pub struct Slice {
    pub cols: Range<usize>,
    pub rows: Range<usize>,
}

impl Slice {
    /// Columns `[x, x2)` and rows `[y, y2)`.
    #[inline]
    pub fn new(x: usize, x2: usize, y: usize, y2: usize) -> Self {
        Self {
            cols: x..x2,
            rows: y..y2,
        }
    }

    /// Shape of the region this slice selects. Only meaningful once checked.
    #[inline]
    pub fn shape(&self) -> Result<Shape, DimensionError> {
        Shape::new(self.rows.len(), self.cols.len())
    }

    /// Checks that the slice is non-empty and lies within `shape`.
    pub fn check(self, shape: Shape) -> Result<Self, DimensionError> {
        let (x, x2) = (self.cols.start, self.cols.end);
        let (y, y2) = (self.rows.start, self.rows.end);
        let valid = x < shape.cols()
            && x2 <= shape.cols()
            && y < shape.rows()
            && y2 <= shape.rows()
            && x2 > x
            && y2 > y;
        match valid {
            true => Ok(self),
            false => Err(DimensionError::Slice(shape, self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::Slice;
    use crate::loom::{layout::Shape, matrix::DimensionError};

    #[test]
    fn test_slice_check() -> Result<(), Box<dyn Error>> {
        let shape = Shape::new(3, 3)?;

        let slice = Slice::new(1, 3, 0, 2).check(shape)?;
        assert_eq!(slice.shape()?, Shape::new(2, 2)?);
        assert_eq!(slice.to_string(), "[1..3, 0..2]");

        let slice: Slice = (0..1, 2..3).into();
        assert_eq!(slice, Slice::new(0, 1, 2, 3));
        assert!(slice.check(shape).is_ok());

        for slice in [
            Slice::new(0, 4, 0, 2),
            Slice::new(3, 3, 0, 2),
            Slice::new(0, 2, 0, 4),
            Slice::new(0, 2, 3, 3),
            Slice::new(2, 1, 0, 2),
            Slice::new(1, 1, 0, 2),
            Slice::new(0, 2, 1, 1),
        ] {
            assert_eq!(
                slice.clone().check(shape),
                Err(DimensionError::Slice(shape, slice))
            );
        }
        Ok(())
    }
}
