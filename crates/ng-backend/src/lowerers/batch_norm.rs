use ng_core::kernels::GpuBatchNormalization;
use ng_core::{ActivationInfo, Function};
use ng_graph::Node;

use super::{check_arity, is_in_place};
use crate::error::{LowerError, Result};
use crate::resolver::required_operand;

const OP: &str = "batch normalization";

pub(crate) fn lower(
    node: &Node,
    epsilon: f32,
    fused_activation: Option<ActivationInfo>,
) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering batch normalization node");
    check_arity(node, OP, 5, 1)?;

    if epsilon <= 0.0 {
        return Err(LowerError::InvalidParameter {
            op: OP,
            reason: format!("epsilon must be positive, got {epsilon}"),
        });
    }

    let input = required_operand(OP, "input", node.input(0))?;
    let mean = required_operand(OP, "mean", node.input(1))?;
    let variance = required_operand(OP, "variance", node.input(2))?;
    let beta = required_operand(OP, "beta", node.input(3))?;
    let gamma = required_operand(OP, "gamma", node.input(4))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        shape = %input.shape(),
        epsilon,
        fused_activation = ?fused_activation.map(|a| a.function),
        in_place = is_in_place(&input, &output),
        "instantiated GpuBatchNormalization"
    );

    Ok(Box::new(GpuBatchNormalization::new(
        input,
        mean,
        variance,
        beta,
        gamma,
        output,
        epsilon,
        fused_activation,
    )))
}
