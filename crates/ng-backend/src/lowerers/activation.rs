use ng_core::kernels::GpuActivation;
use ng_core::{ActivationInfo, Function};
use ng_graph::Node;

use super::{check_arity, is_in_place};
use crate::error::Result;
use crate::resolver::required_operand;

const OP: &str = "activation";

pub(crate) fn lower(node: &Node, info: &ActivationInfo) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering activation node");
    check_arity(node, OP, 1, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        shape = %input.shape(),
        function = %info.function,
        a = info.a,
        b = info.b,
        in_place = is_in_place(&input, &output),
        "instantiated GpuActivation"
    );

    Ok(Box::new(GpuActivation::new(input, output, *info)))
}
