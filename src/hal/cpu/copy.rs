use crate::{
    hal::ops::CopyOp,
    loom::{layout::Shape, num::Scalar, ops::RowOp},
};

impl<T: Scalar> RowOp<T> for CopyOp<'_, T> {
    const NAME: &'static str = "copy";

    fn shape(&self) -> Shape {
        self.shape
    }

    fn row(&self, index: usize, output: &mut [T]) {
        let start = self.shape.offset(index, 0);
        output.copy_from_slice(&self.source[start..start + self.shape.cols()]);
    }
}
