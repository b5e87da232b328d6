use std::ops::{Add, Mul};

use bytemuck::Pod;
use derive_more::Display;
use half::f16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DataType {
    F64,
    F32,
    F16,
}

impl DataType {
    /// Returns the size in bytes of one element of this data type.
    pub const fn size(self) -> usize {
        match self {
            DataType::F64 => 8,
            DataType::F32 => 4,
            DataType::F16 => 2,
        }
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f16 {
    fn zero() -> Self {
        Self::ZERO
    }
}

pub trait One {
    fn one() -> Self;
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f16 {
    fn one() -> Self {
        Self::ONE
    }
}

/// Element type of a [`Matrix`](super::matrix::Matrix).
///
/// Zeroed bytes must be the additive identity, which is why the trait is sealed to IEEE floats.
pub trait Scalar:
    Sized
    + Pod
    + Zero
    + One
    + Add<Output = Self>
    + Mul<Output = Self>
    + PartialEq
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + sealed::Sealed
{
    const DATA_TYPE: DataType;
}

impl Scalar for f64 {
    const DATA_TYPE: DataType = DataType::F64;
}

impl Scalar for f32 {
    const DATA_TYPE: DataType = DataType::F32;
}

impl Scalar for f16 {
    const DATA_TYPE: DataType = DataType::F16;
}

mod sealed {
    use half::f16;

    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for f16 {}
}

#[cfg(test)]
mod tests {
    use half::f16;

    use super::{DataType, One, Scalar, Zero};

    #[test]
    fn test_data_type() {
        assert_eq!(f64::DATA_TYPE.size(), size_of::<f64>());
        assert_eq!(f32::DATA_TYPE.size(), size_of::<f32>());
        assert_eq!(f16::DATA_TYPE.size(), size_of::<f16>());
        assert_eq!(DataType::F16.to_string(), "F16");
    }

    #[test]
    fn test_zeroed_is_zero() {
        assert_eq!(bytemuck::zeroed_vec::<f64>(3), vec![f64::zero(); 3]);
        assert_eq!(bytemuck::zeroed_vec::<f16>(3), vec![f16::zero(); 3]);
        assert_eq!(f16::one() + f16::one(), f16::from_f32(2.0));
    }
}
