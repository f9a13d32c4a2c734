use ng_core::kernels::GpuPooling;
use ng_core::{Function, PoolingInfo};
use ng_graph::Node;

use super::check_arity;
use crate::error::Result;
use crate::resolver::required_operand;

const OP: &str = "pooling";

pub(crate) fn lower(node: &Node, info: &PoolingInfo) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering pooling node");
    check_arity(node, OP, 1, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_shape = %input.shape(),
        output_shape = %output.shape(),
        pool_type = %info.pool_type,
        pool_size = info.pool_size,
        "instantiated GpuPooling"
    );

    Ok(Box::new(GpuPooling::new(input, output, *info)))
}
