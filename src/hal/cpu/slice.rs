use crate::{
    hal::ops::SliceOp,
    loom::{layout::Shape, num::Scalar, ops::RowOp},
};

impl<T: Scalar> RowOp<T> for SliceOp<'_, T> {
    const NAME: &'static str = "slice";

    fn shape(&self) -> Shape {
        self.shape
    }

    fn row(&self, index: usize, output: &mut [T]) {
        let row = self.input.row(self.slice.rows.start + index);
        output.copy_from_slice(&row[self.slice.cols.clone()]);
    }
}
