//! Backend tags and operation parameter types shared by the graph IR and the
//! kernel instances.

use std::fmt;

/// Hardware backend a tensor or memory manager is tagged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Host CPU backend.
    Cpu,
    /// The GPU compute backend this workspace lowers for.
    Gpu,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cpu => write!(f, "cpu"),
            Target::Gpu => write!(f, "gpu"),
        }
    }
}

/// Quantization metadata attached to a backing tensor.
///
/// Read only for diagnostics; the lowering pass never rescales data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizationInfo {
    pub scale: f32,
    pub offset: i32,
}

/// Activation functions an activation (or fused-activation) node can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationFunction {
    Relu,
    BoundedRelu,
    Logistic,
    Tanh,
    LeakyRelu,
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFunction::Relu => write!(f, "relu"),
            ActivationFunction::BoundedRelu => write!(f, "bounded_relu"),
            ActivationFunction::Logistic => write!(f, "logistic"),
            ActivationFunction::Tanh => write!(f, "tanh"),
            ActivationFunction::LeakyRelu => write!(f, "leaky_relu"),
        }
    }
}

/// Activation function selector plus its two coefficients.
///
/// The meaning of `a` and `b` depends on the function (e.g. the upper bound
/// for bounded ReLU, the negative slope for leaky ReLU).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationInfo {
    pub function: ActivationFunction,
    pub a: f32,
    pub b: f32,
}

impl ActivationInfo {
    pub fn new(function: ActivationFunction, a: f32, b: f32) -> Self {
        Self { function, a, b }
    }
}

/// Stride and padding configuration for windowed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadStrideInfo {
    pub stride_x: usize,
    pub stride_y: usize,
    pub pad_left: usize,
    pub pad_top: usize,
    pub pad_right: usize,
    pub pad_bottom: usize,
}

impl PadStrideInfo {
    /// Symmetric padding constructor.
    pub fn new(stride_x: usize, stride_y: usize, pad_x: usize, pad_y: usize) -> Self {
        Self {
            stride_x,
            stride_y,
            pad_left: pad_x,
            pad_top: pad_y,
            pad_right: pad_x,
            pad_bottom: pad_y,
        }
    }
}

impl Default for PadStrideInfo {
    fn default() -> Self {
        Self::new(1, 1, 0, 0)
    }
}

/// Pooling reduction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolType {
    Max,
    Avg,
    L2,
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolType::Max => write!(f, "max"),
            PoolType::Avg => write!(f, "avg"),
            PoolType::L2 => write!(f, "l2"),
        }
    }
}

/// Pool method plus window and stride parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolingInfo {
    pub pool_type: PoolType,
    pub pool_size: usize,
    pub pad_stride: PadStrideInfo,
}

/// Normalization method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormType {
    /// Normalize across feature maps.
    CrossMap,
    /// Normalize within a single feature map.
    InMap,
}

impl fmt::Display for NormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormType::CrossMap => write!(f, "cross_map"),
            NormType::InMap => write!(f, "in_map"),
        }
    }
}

/// Normalization method plus window parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationInfo {
    pub norm_type: NormType,
    pub norm_size: usize,
    pub alpha: f32,
    pub beta: f32,
    pub kappa: f32,
}

/// Element-wise binary operation codes carried by the graph IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EltwiseOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for EltwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EltwiseOp::Add => write!(f, "add"),
            EltwiseOp::Sub => write!(f, "sub"),
            EltwiseOp::Mul => write!(f, "mul"),
            EltwiseOp::Div => write!(f, "div"),
        }
    }
}

/// Overflow policy for integer element-wise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertPolicy {
    Wrap,
    Saturate,
}

/// Algorithm hint for convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvolutionMethod {
    /// Direct convolution, no scratch memory required.
    Direct,
    /// General (im2col + GEMM) convolution, uses the shared memory manager.
    Gemm,
}

/// Algorithm hint for depthwise convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthwiseConvolutionMethod {
    /// Optimized fixed 3x3 kernel variant, the only one the GPU backend ships.
    Optimized3x3,
    /// Generic window sizes.
    Generic,
}
