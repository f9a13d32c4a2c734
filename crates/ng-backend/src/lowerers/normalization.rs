use ng_core::kernels::GpuNormalization;
use ng_core::{Function, NormalizationInfo};
use ng_graph::Node;

use super::{check_arity, is_in_place};
use crate::error::Result;
use crate::resolver::required_operand;

const OP: &str = "normalization";

pub(crate) fn lower(node: &Node, info: &NormalizationInfo) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering normalization node");
    check_arity(node, OP, 1, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_shape = %input.shape(),
        output_shape = %output.shape(),
        norm_type = %info.norm_type,
        norm_size = info.norm_size,
        in_place = is_in_place(&input, &output),
        "instantiated GpuNormalization"
    );

    Ok(Box::new(GpuNormalization::new(input, output, *info)))
}
