//! Configured GPU kernel instances.
//!
//! One type per kernel the GPU backend ships. Each instance holds the backing
//! tensors it operates on and its configuration parameters; the numeric
//! implementations live in the runtime execution library. Instances are
//! created fully configured by the backend lowering pass and never mutated
//! afterwards.

use std::any::Any;
use std::sync::Arc;

use crate::function::Function;
use crate::memory::MemoryManager;
use crate::tensor::DeviceTensor;
use crate::types::{
    ActivationInfo, ConvertPolicy, NormalizationInfo, PadStrideInfo, PoolingInfo,
};

/// Element-wise activation kernel.
#[derive(Debug)]
pub struct GpuActivation {
    pub input: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub info: ActivationInfo,
}

impl GpuActivation {
    pub fn new(input: Arc<DeviceTensor>, output: Arc<DeviceTensor>, info: ActivationInfo) -> Self {
        Self {
            input,
            output,
            info,
        }
    }
}

impl Function for GpuActivation {
    fn name(&self) -> &'static str {
        "GpuActivation"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Batch normalization kernel, optionally with a fused activation.
#[derive(Debug)]
pub struct GpuBatchNormalization {
    pub input: Arc<DeviceTensor>,
    pub mean: Arc<DeviceTensor>,
    pub variance: Arc<DeviceTensor>,
    pub beta: Arc<DeviceTensor>,
    pub gamma: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub epsilon: f32,
    pub fused_activation: Option<ActivationInfo>,
}

impl GpuBatchNormalization {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: Arc<DeviceTensor>,
        mean: Arc<DeviceTensor>,
        variance: Arc<DeviceTensor>,
        beta: Arc<DeviceTensor>,
        gamma: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        epsilon: f32,
        fused_activation: Option<ActivationInfo>,
    ) -> Self {
        Self {
            input,
            mean,
            variance,
            beta,
            gamma,
            output,
            epsilon,
            fused_activation,
        }
    }
}

impl Function for GpuBatchNormalization {
    fn name(&self) -> &'static str {
        "GpuBatchNormalization"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Direct convolution kernel. Needs no scratch memory.
#[derive(Debug)]
pub struct GpuDirectConvolution {
    pub input: Arc<DeviceTensor>,
    pub weights: Arc<DeviceTensor>,
    pub biases: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub conv_info: PadStrideInfo,
}

impl GpuDirectConvolution {
    pub fn new(
        input: Arc<DeviceTensor>,
        weights: Arc<DeviceTensor>,
        biases: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        conv_info: PadStrideInfo,
    ) -> Self {
        Self {
            input,
            weights,
            biases,
            output,
            conv_info,
        }
    }
}

impl Function for GpuDirectConvolution {
    fn name(&self) -> &'static str {
        "GpuDirectConvolution"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// General (im2col + GEMM) convolution kernel backed by scratch pools.
#[derive(Debug)]
pub struct GpuConvolution {
    pub input: Arc<DeviceTensor>,
    pub weights: Arc<DeviceTensor>,
    pub biases: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub conv_info: PadStrideInfo,
    pub memory_manager: Option<Arc<MemoryManager>>,
}

impl GpuConvolution {
    pub fn new(
        memory_manager: Option<Arc<MemoryManager>>,
        input: Arc<DeviceTensor>,
        weights: Arc<DeviceTensor>,
        biases: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        conv_info: PadStrideInfo,
    ) -> Self {
        if let Some(mm) = &memory_manager {
            mm.register();
        }
        Self {
            input,
            weights,
            biases,
            output,
            conv_info,
            memory_manager,
        }
    }
}

impl Function for GpuConvolution {
    fn name(&self) -> &'static str {
        "GpuConvolution"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Concatenation of N inputs along the depth axis.
#[derive(Debug)]
pub struct GpuDepthConcatenate {
    pub inputs: Vec<Arc<DeviceTensor>>,
    pub output: Arc<DeviceTensor>,
}

impl GpuDepthConcatenate {
    pub fn new(inputs: Vec<Arc<DeviceTensor>>, output: Arc<DeviceTensor>) -> Self {
        Self { inputs, output }
    }

    /// Number of inputs wired into this unit.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Function for GpuDepthConcatenate {
    fn name(&self) -> &'static str {
        "GpuDepthConcatenate"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Depthwise convolution, optimized fixed 3x3 window variant.
#[derive(Debug)]
pub struct GpuDepthwiseConvolution3x3 {
    pub input: Arc<DeviceTensor>,
    pub weights: Arc<DeviceTensor>,
    pub biases: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub conv_info: PadStrideInfo,
}

impl GpuDepthwiseConvolution3x3 {
    pub fn new(
        input: Arc<DeviceTensor>,
        weights: Arc<DeviceTensor>,
        biases: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        conv_info: PadStrideInfo,
    ) -> Self {
        Self {
            input,
            weights,
            biases,
            output,
            conv_info,
        }
    }
}

impl Function for GpuDepthwiseConvolution3x3 {
    fn name(&self) -> &'static str {
        "GpuDepthwiseConvolution3x3"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Element-wise addition with a wrap/saturate overflow policy.
#[derive(Debug)]
pub struct GpuArithmeticAddition {
    pub lhs: Arc<DeviceTensor>,
    pub rhs: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub policy: ConvertPolicy,
}

impl GpuArithmeticAddition {
    pub fn new(
        lhs: Arc<DeviceTensor>,
        rhs: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        policy: ConvertPolicy,
    ) -> Self {
        Self {
            lhs,
            rhs,
            output,
            policy,
        }
    }
}

impl Function for GpuArithmeticAddition {
    fn name(&self) -> &'static str {
        "GpuArithmeticAddition"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Element-wise multiplication with a fixed output scale.
#[derive(Debug)]
pub struct GpuPixelWiseMultiplication {
    pub lhs: Arc<DeviceTensor>,
    pub rhs: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub scale: f32,
}

impl GpuPixelWiseMultiplication {
    pub fn new(
        lhs: Arc<DeviceTensor>,
        rhs: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        scale: f32,
    ) -> Self {
        Self {
            lhs,
            rhs,
            output,
            scale,
        }
    }
}

impl Function for GpuPixelWiseMultiplication {
    fn name(&self) -> &'static str {
        "GpuPixelWiseMultiplication"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Fully connected (dense) kernel backed by scratch pools.
#[derive(Debug)]
pub struct GpuFullyConnected {
    pub input: Arc<DeviceTensor>,
    pub weights: Arc<DeviceTensor>,
    pub biases: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub memory_manager: Option<Arc<MemoryManager>>,
}

impl GpuFullyConnected {
    pub fn new(
        memory_manager: Option<Arc<MemoryManager>>,
        input: Arc<DeviceTensor>,
        weights: Arc<DeviceTensor>,
        biases: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
    ) -> Self {
        if let Some(mm) = &memory_manager {
            mm.register();
        }
        Self {
            input,
            weights,
            biases,
            output,
            memory_manager,
        }
    }
}

impl Function for GpuFullyConnected {
    fn name(&self) -> &'static str {
        "GpuFullyConnected"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Local response normalization kernel.
#[derive(Debug)]
pub struct GpuNormalization {
    pub input: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub info: NormalizationInfo,
}

impl GpuNormalization {
    pub fn new(
        input: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        info: NormalizationInfo,
    ) -> Self {
        Self {
            input,
            output,
            info,
        }
    }
}

impl Function for GpuNormalization {
    fn name(&self) -> &'static str {
        "GpuNormalization"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Spatial pooling kernel.
#[derive(Debug)]
pub struct GpuPooling {
    pub input: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub info: PoolingInfo,
}

impl GpuPooling {
    pub fn new(input: Arc<DeviceTensor>, output: Arc<DeviceTensor>, info: PoolingInfo) -> Self {
        Self {
            input,
            output,
            info,
        }
    }
}

impl Function for GpuPooling {
    fn name(&self) -> &'static str {
        "GpuPooling"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Softmax kernel with a sharpening coefficient, backed by scratch pools.
#[derive(Debug)]
pub struct GpuSoftmax {
    pub input: Arc<DeviceTensor>,
    pub output: Arc<DeviceTensor>,
    pub beta: f32,
    pub memory_manager: Option<Arc<MemoryManager>>,
}

impl GpuSoftmax {
    pub fn new(
        memory_manager: Option<Arc<MemoryManager>>,
        input: Arc<DeviceTensor>,
        output: Arc<DeviceTensor>,
        beta: f32,
    ) -> Self {
        if let Some(mm) = &memory_manager {
            mm.register();
        }
        Self {
            input,
            output,
            beta,
            memory_manager,
        }
    }
}

impl Function for GpuSoftmax {
    fn name(&self) -> &'static str {
        "GpuSoftmax"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
