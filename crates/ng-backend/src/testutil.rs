//! Fixtures shared by the lowerer unit tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use ng_core::{DType, DeviceTensor, QuantizationInfo, Shape, Target};
use ng_graph::{GraphTensor, TensorDescriptor, TensorId};

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

fn next_id() -> TensorId {
    TensorId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// A GPU-tagged graph tensor with a bound backing tensor.
pub(crate) fn gpu_tensor(dims: &[usize], dtype: DType) -> Arc<GraphTensor> {
    let tensor = Arc::new(GraphTensor::new(
        next_id(),
        TensorDescriptor::new(Target::Gpu, Shape::from_slice(dims), dtype),
    ));
    tensor
        .bind(Arc::new(DeviceTensor::new(dtype, Shape::from_slice(dims))))
        .unwrap();
    tensor
}

/// A GPU-tagged graph tensor whose backing tensor carries quantization
/// metadata.
pub(crate) fn quantized_tensor(dims: &[usize], dtype: DType) -> Arc<GraphTensor> {
    let tensor = Arc::new(GraphTensor::new(
        next_id(),
        TensorDescriptor::new(Target::Gpu, Shape::from_slice(dims), dtype),
    ));
    tensor
        .bind(Arc::new(
            DeviceTensor::new(dtype, Shape::from_slice(dims)).with_quantization(
                QuantizationInfo {
                    scale: 0.1,
                    offset: 128,
                },
            ),
        ))
        .unwrap();
    tensor
}

/// A GPU-tagged graph tensor the allocator never bound.
pub(crate) fn unbound_tensor(dims: &[usize], dtype: DType) -> Arc<GraphTensor> {
    Arc::new(GraphTensor::new(
        next_id(),
        TensorDescriptor::new(Target::Gpu, Shape::from_slice(dims), dtype),
    ))
}

/// A tensor tagged for the CPU backend (wrong backend for this pass).
pub(crate) fn cpu_tensor(dims: &[usize], dtype: DType) -> Arc<GraphTensor> {
    let tensor = Arc::new(GraphTensor::new(
        next_id(),
        TensorDescriptor::new(Target::Cpu, Shape::from_slice(dims), dtype),
    ));
    tensor
        .bind(Arc::new(DeviceTensor::new(dtype, Shape::from_slice(dims))))
        .unwrap();
    tensor
}
