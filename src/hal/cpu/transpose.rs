use itertools::Itertools;

use crate::{
    hal::ops::TransposeOp,
    loom::{layout::Shape, num::Scalar, ops::RowOp},
};

impl<T: Scalar> RowOp<T> for TransposeOp<'_, T> {
    const NAME: &'static str = "transpose";

    fn shape(&self) -> Shape {
        self.input.shape().transposed()
    }

    /// Output row `index` is input column `index`.
    fn row(&self, index: usize, output: &mut [T]) {
        for (z, x) in output.iter_mut().zip_eq(self.input.column(index)) {
            *z = x;
        }
    }
}
