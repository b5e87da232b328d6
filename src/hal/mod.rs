//! Row ops of the matrix and their CPU kernels.

pub mod cpu;
pub mod frontend;
pub mod ops;
