//! `ng-core` - Core tensor, parameter, and kernel-instance types for nngraph.
//!
//! This crate provides:
//! - `DType` and `Shape` descriptors shared across the workspace
//! - Operation parameter types (activation, pad/stride, pooling, ...)
//! - `DeviceTensor`, the backend-resident tensor handle
//! - `MemoryManager`, the shared scratch-pool registry
//! - The `Function` trait and the configured GPU kernel instance types

pub mod dtype;
pub mod function;
pub mod kernels;
pub mod memory;
pub mod shape;
pub mod tensor;
pub mod types;

// Re-export primary types at the crate root for convenience.
pub use dtype::DType;
pub use function::Function;
pub use memory::MemoryManager;
pub use shape::Shape;
pub use tensor::DeviceTensor;
pub use types::{
    ActivationFunction, ActivationInfo, ConvertPolicy, ConvolutionMethod,
    DepthwiseConvolutionMethod, EltwiseOp, NormType, NormalizationInfo, PadStrideInfo, PoolType,
    PoolingInfo, QuantizationInfo, Target,
};
