use std::fmt;

/// Data types a backing tensor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 16-bit floating point (IEEE 754 half-precision, via the `half` crate).
    F16,
    /// 32-bit floating point.
    F32,
    /// 8-bit signed integer.
    S8,
    /// 32-bit signed integer.
    S32,
    /// 8-bit asymmetric quantized (unsigned value + scale/offset metadata).
    QAsymm8,
}

impl DType {
    /// Size in bytes of a single element.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::F16 => std::mem::size_of::<half::f16>(),
            DType::F32 => 4,
            DType::S8 => 1,
            DType::S32 => 4,
            DType::QAsymm8 => 1,
        }
    }

    /// Returns true for asymmetric quantized types.
    ///
    /// An asymmetric quantized input forces convolution-style bias operands
    /// to accumulate in S32; see the backend lowerers.
    pub fn is_quantized_asymmetric(&self) -> bool {
        matches!(self, DType::QAsymm8)
    }

    /// Returns true for any quantized type.
    pub fn is_quantized(&self) -> bool {
        self.is_quantized_asymmetric()
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::F16 => write!(f, "f16"),
            DType::F32 => write!(f, "f32"),
            DType::S8 => write!(f, "s8"),
            DType::S32 => write!(f, "s32"),
            DType::QAsymm8 => write!(f, "qasymm8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_bytes() {
        assert_eq!(DType::F16.size_in_bytes(), 2);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::S8.size_in_bytes(), 1);
        assert_eq!(DType::S32.size_in_bytes(), 4);
        assert_eq!(DType::QAsymm8.size_in_bytes(), 1);
    }

    #[test]
    fn test_quantized_predicates() {
        assert!(DType::QAsymm8.is_quantized_asymmetric());
        for dtype in &[DType::F16, DType::F32, DType::S8, DType::S32] {
            assert!(!dtype.is_quantized_asymmetric());
            assert!(!dtype.is_quantized());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::QAsymm8.to_string(), "qasymm8");
        assert_eq!(DType::S32.to_string(), "s32");
    }
}
