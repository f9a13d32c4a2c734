use ng_core::kernels::GpuDepthConcatenate;
use ng_core::Function;
use ng_graph::Node;

use super::check_output_arity;
use crate::error::{LowerError, Result};
use crate::resolver::required_operand;

const OP: &str = "depth concatenate";

/// Depth concatenation is the one lowerer that can legitimately produce no
/// unit: a disabled node is a no-op signal, not an error.
pub(crate) fn lower(node: &Node, enabled: bool) -> Result<Option<Box<dyn Function>>> {
    tracing::trace!(node = node.name(), "lowering depth concatenate node");
    check_output_arity(node, OP, 1)?;

    if !enabled {
        tracing::debug!(node = node.name(), "concatenation disabled, nothing to lower");
        return Ok(None);
    }

    if node.num_inputs() == 0 {
        return Err(LowerError::InputArity {
            op: OP,
            expected: 1,
            got: 0,
        });
    }

    let mut inputs = Vec::with_capacity(node.num_inputs());
    for i in 0..node.num_inputs() {
        inputs.push(required_operand(OP, "input", node.input(i))?);
    }
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %output.dtype(),
        shape = %output.shape(),
        num_inputs = inputs.len(),
        "instantiated GpuDepthConcatenate"
    );

    Ok(Some(Box::new(GpuDepthConcatenate::new(inputs, output))))
}
