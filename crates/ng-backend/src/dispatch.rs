//! The dispatch table: the sole externally invoked operation of this crate.

use ng_core::Function;
use ng_graph::{ExecutionContext, Node, Op};

use crate::error::Result;
use crate::lowerers;

/// Lower one graph node into an executable kernel instance.
///
/// Returns `Ok(None)` when there is nothing to execute: no node was given,
/// the node's kind is not lowered by this backend (another backend may pick
/// it up), or the node is administratively disabled. Fatal precondition
/// violations and unsupported configurations abort the pass as
/// [`crate::LowerError`].
///
/// The returned unit is exclusively owned by the caller.
pub fn lower(node: Option<&Node>, ctx: &ExecutionContext) -> Result<Option<Box<dyn Function>>> {
    let Some(node) = node else {
        return Ok(None);
    };

    match node.op() {
        Op::Activation(info) => lowerers::activation::lower(node, info).map(Some),
        Op::BatchNormalization {
            epsilon,
            fused_activation,
        } => lowerers::batch_norm::lower(node, *epsilon, *fused_activation).map(Some),
        Op::Convolution { conv_info, method } => {
            lowerers::convolution::lower(node, ctx, *conv_info, *method).map(Some)
        }
        Op::DepthConcatenate { enabled } => lowerers::depth_concat::lower(node, *enabled),
        Op::DepthwiseConvolution { conv_info, method } => {
            lowerers::depthwise::lower(node, *conv_info, *method).map(Some)
        }
        Op::Eltwise { op, policy } => lowerers::eltwise::lower(node, *op, *policy).map(Some),
        Op::FullyConnected => lowerers::fully_connected::lower(node, ctx).map(Some),
        Op::Normalization(info) => lowerers::normalization::lower(node, info).map(Some),
        Op::Pooling(info) => lowerers::pooling::lower(node, info).map(Some),
        Op::Softmax { beta } => lowerers::softmax::lower(node, ctx, *beta).map(Some),
        Op::Flatten | Op::Reshape => {
            // Not lowered on this backend; the caller may fall back to
            // another one.
            tracing::debug!(
                node = node.name(),
                kind = node.op().kind(),
                "kind not lowered on the gpu backend"
            );
            Ok(None)
        }
    }
}
