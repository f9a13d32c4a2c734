use ng_core::kernels::{GpuConvolution, GpuDirectConvolution};
use ng_core::{ConvolutionMethod, DType, Function, PadStrideInfo};
use ng_graph::{ExecutionContext, Node};

use super::check_arity;
use crate::error::Result;
use crate::resolver::required_operand;
use crate::BACKEND_TARGET;

const OP: &str = "convolution";

pub(crate) fn lower(
    node: &Node,
    ctx: &ExecutionContext,
    conv_info: PadStrideInfo,
    method: ConvolutionMethod,
) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering convolution node");
    check_arity(node, OP, 3, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let weights = required_operand(OP, "weights", node.input(1))?;
    let biases = required_operand(OP, "biases", node.input(2))?;
    let output = required_operand(OP, "output", node.output(0))?;

    // Quantized kernels accumulate into a wider type than they store.
    if input.dtype().is_quantized_asymmetric() {
        biases.set_dtype(DType::S32);
    }

    let unit: Box<dyn Function> = match method {
        ConvolutionMethod::Direct => Box::new(GpuDirectConvolution::new(
            input.clone(),
            weights.clone(),
            biases,
            output.clone(),
            conv_info,
        )),
        ConvolutionMethod::Gemm => Box::new(GpuConvolution::new(
            ctx.memory_manager(BACKEND_TARGET),
            input.clone(),
            weights.clone(),
            biases,
            output.clone(),
            conv_info,
        )),
    };

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_quantization = ?input.quantization(),
        weights_quantization = ?weights.quantization(),
        input_shape = %input.shape(),
        weights_shape = %weights.shape(),
        output_shape = %output.shape(),
        "instantiated {}", unit.name()
    );

    Ok(unit)
}
