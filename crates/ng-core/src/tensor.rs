use std::sync::RwLock;

use crate::dtype::DType;
use crate::shape::Shape;
use crate::types::QuantizationInfo;

/// A backend-resident tensor handle.
///
/// The device allocation itself belongs to the backend allocator; this handle
/// carries the metadata the lowering pass reads. The data type sits behind a
/// `RwLock` because lowering a quantized convolution rewrites the bias
/// operand's dtype in place, and the handle is shared between the producer
/// and every consumer node.
#[derive(Debug)]
pub struct DeviceTensor {
    dtype: RwLock<DType>,
    shape: Shape,
    quantization: Option<QuantizationInfo>,
}

impl DeviceTensor {
    /// Create a tensor handle with the given dtype and shape.
    pub fn new(dtype: DType, shape: Shape) -> Self {
        Self {
            dtype: RwLock::new(dtype),
            shape,
            quantization: None,
        }
    }

    /// Attach quantization metadata. Builder-style, used at allocation time.
    pub fn with_quantization(mut self, quantization: QuantizationInfo) -> Self {
        self.quantization = Some(quantization);
        self
    }

    /// Returns the current data type.
    pub fn dtype(&self) -> DType {
        *self.dtype.read().expect("device tensor dtype lock poisoned")
    }

    /// Rewrite the data type.
    ///
    /// The only caller during lowering is the bias coercion for quantized
    /// convolution paths.
    pub fn set_dtype(&self, dtype: DType) {
        *self.dtype.write().expect("device tensor dtype lock poisoned") = dtype;
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Quantization metadata, if any. Diagnostics only.
    pub fn quantization(&self) -> Option<QuantizationInfo> {
        self.quantization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_rewrite() {
        let t = DeviceTensor::new(DType::S8, Shape::from_slice(&[16]));
        assert_eq!(t.dtype(), DType::S8);
        t.set_dtype(DType::S32);
        assert_eq!(t.dtype(), DType::S32);
    }

    #[test]
    fn test_shape_and_quantization() {
        let t = DeviceTensor::new(DType::QAsymm8, Shape::from_slice(&[1, 4, 4, 8]))
            .with_quantization(QuantizationInfo {
                scale: 0.5,
                offset: 128,
            });
        assert_eq!(t.shape().dims(), &[1, 4, 4, 8]);
        assert_eq!(t.quantization().unwrap().offset, 128);
    }

    #[test]
    fn test_no_quantization_by_default() {
        let t = DeviceTensor::new(DType::F32, Shape::from_slice(&[2]));
        assert!(t.quantization().is_none());
    }
}
