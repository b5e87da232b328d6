use super::{layout::Shape, matrix::Matrix, num::Scalar, platform};

/// A matrix operation that computes every output row independently.
///
/// Implementors read only from their operands, so rows can be produced concurrently
/// into disjoint slices of the output buffer.
pub trait RowOp<T: Scalar>: Sync {
    /// Name of the op, used in logs and trace spans.
    const NAME: &'static str;

    /// Shape of the output matrix.
    fn shape(&self) -> Shape;

    /// Computes output row `index` into `output`, which holds `shape().cols()` zeros.
    fn row(&self, index: usize, output: &mut [T]);

    /// Allocates the output, runs [`RowOp::row`] for every row and joins.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all, fields(op = Self::NAME)))]
    fn execute(&self) -> Matrix<T>
    where
        Self: Sized,
    {
        let shape = self.shape();
        log::trace!(
            "{}: fan out {} rows of {shape} {} ({} bytes)",
            Self::NAME,
            shape.rows(),
            T::DATA_TYPE,
            shape.size() * T::DATA_TYPE.size()
        );

        let mut data = bytemuck::zeroed_vec(shape.size());
        platform::for_each_row(&mut data, shape.cols(), |index, output| {
            self.row(index, output)
        });
        Matrix::from_parts(shape, data)
    }
}
