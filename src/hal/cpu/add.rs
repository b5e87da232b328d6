use itertools::Itertools;

use crate::{
    hal::ops::AddOp,
    loom::{layout::Shape, num::Scalar, ops::RowOp},
};

impl<T: Scalar> RowOp<T> for AddOp<'_, T> {
    const NAME: &'static str = "add";

    fn shape(&self) -> Shape {
        self.lhs.shape()
    }

    fn row(&self, index: usize, output: &mut [T]) {
        let x = self.lhs.row(index);
        let y = self.rhs.row(index);
        for (z, (&x, &y)) in output.iter_mut().zip_eq(x.iter().zip_eq(y)) {
            *z = x + y;
        }
    }
}
