use std::sync::Arc;

use ng_core::{
    ActivationInfo, ConvertPolicy, ConvolutionMethod, DepthwiseConvolutionMethod, EltwiseOp,
    NormalizationInfo, PadStrideInfo, PoolingInfo,
};

use crate::tensor::GraphTensor;

/// Identifier of a node within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// The operation a node performs, with its operation-specific parameters
/// carried inline.
///
/// A closed enumeration: backends match on it exhaustively, and kinds a
/// backend does not lower fall through to "no unit" rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Activation(ActivationInfo),
    BatchNormalization {
        epsilon: f32,
        fused_activation: Option<ActivationInfo>,
    },
    Convolution {
        conv_info: PadStrideInfo,
        method: ConvolutionMethod,
    },
    DepthConcatenate {
        enabled: bool,
    },
    DepthwiseConvolution {
        conv_info: PadStrideInfo,
        method: DepthwiseConvolutionMethod,
    },
    Eltwise {
        op: EltwiseOp,
        policy: ConvertPolicy,
    },
    Flatten,
    FullyConnected,
    Normalization(NormalizationInfo),
    Pooling(PoolingInfo),
    Reshape,
    Softmax {
        beta: f32,
    },
}

impl Op {
    /// Stable operation name used in diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Op::Activation(_) => "activation",
            Op::BatchNormalization { .. } => "batch normalization",
            Op::Convolution { .. } => "convolution",
            Op::DepthConcatenate { .. } => "depth concatenate",
            Op::DepthwiseConvolution { .. } => "depthwise convolution",
            Op::Eltwise { .. } => "eltwise",
            Op::Flatten => "flatten",
            Op::FullyConnected => "fully connected",
            Op::Normalization(_) => "normalization",
            Op::Pooling(_) => "pooling",
            Op::Reshape => "reshape",
            Op::Softmax { .. } => "softmax",
        }
    }
}

/// One layer operation in the computation graph.
///
/// Input and output slots hold shared references into the graph's tensor
/// arena; a `None` slot means "no tensor wired here". Nodes are immutable
/// once built.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    op: Op,
    inputs: Vec<Option<Arc<GraphTensor>>>,
    outputs: Vec<Option<Arc<GraphTensor>>>,
}

impl Node {
    pub fn new(
        id: NodeId,
        name: impl Into<String>,
        op: Op,
        inputs: Vec<Option<Arc<GraphTensor>>>,
        outputs: Vec<Option<Arc<GraphTensor>>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            op,
            inputs,
            outputs,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Tensor wired into input slot `i`, if the slot exists and is non-empty.
    pub fn input(&self, i: usize) -> Option<&Arc<GraphTensor>> {
        self.inputs.get(i).and_then(|slot| slot.as_ref())
    }

    /// Tensor wired into output slot `i`, if the slot exists and is non-empty.
    pub fn output(&self, i: usize) -> Option<&Arc<GraphTensor>> {
        self.outputs.get(i).and_then(|slot| slot.as_ref())
    }
}
