use itertools::Itertools;

use crate::{
    hal::ops::DotOp,
    loom::{
        layout::Shape,
        num::Scalar,
        ops::RowOp,
    },
};

impl<T: Scalar> RowOp<T> for DotOp<'_, T> {
    const NAME: &'static str = "dot";

    fn shape(&self) -> Shape {
        self.shape
    }

    fn row(&self, index: usize, output: &mut [T]) {
        output.fill(T::zero());

        // accumulate `a[index, j] * b[j, ..]` into the output row, `j` ascending
        let a = self.lhs.row(index);
        for (j, &x) in a.iter().enumerate() {
            let b = self.rhs.row(j);
            for (z, &y) in output.iter_mut().zip_eq(b) {
                *z = *z + x * y;
            }
        }
    }
}
