//! The `loom` module provides the foundations of the dense matrix type.
//!
//! ## Key Components
//! 1. **Matrix**:
//!    - Owns a contiguous row-major buffer (`Matrix`), addressed through a checked `Shape`.
//!    - Bounds-checked element access, rectangular `Slice` descriptors.
//!
//! 2. **Numerical System**:
//!    - Scalar types (`f64`, `f32`, `f16`) and their data type metadata (`DataType`).
//!
//! 3. **Execution Model**:
//!    - Operations are described as `RowOp`s, each output row computed independently.
//!    - Rows fan out over rayon's pool, or one scoped thread per row without the `rayon` feature,
//!      and are joined before the operation returns.
//!
//! ## Design Principles
//! - **Fail fast**: shapes are validated before any allocation or task spawn.
//! - **Disjoint writes**: every task owns exactly one output row; operands are only read.

pub mod layout;
pub mod matrix;
pub mod num;
pub mod ops;
pub mod platform;
pub mod slice;
