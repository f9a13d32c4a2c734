use ng_core::kernels::GpuDepthwiseConvolution3x3;
use ng_core::{DType, DepthwiseConvolutionMethod, Function, PadStrideInfo};
use ng_graph::Node;

use super::check_arity;
use crate::error::{LowerError, Result};
use crate::resolver::required_operand;

const OP: &str = "depthwise convolution";

pub(crate) fn lower(
    node: &Node,
    conv_info: PadStrideInfo,
    method: DepthwiseConvolutionMethod,
) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering depthwise convolution node");
    check_arity(node, OP, 3, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let weights = required_operand(OP, "weights", node.input(1))?;
    let biases = required_operand(OP, "biases", node.input(2))?;
    let output = required_operand(OP, "output", node.output(0))?;

    // Quantized kernels accumulate into a wider type than they store.
    if input.dtype().is_quantized_asymmetric() {
        biases.set_dtype(DType::S32);
    }

    let unit = match method {
        DepthwiseConvolutionMethod::Optimized3x3 => GpuDepthwiseConvolution3x3::new(
            input.clone(),
            weights.clone(),
            biases,
            output.clone(),
            conv_info,
        ),
        DepthwiseConvolutionMethod::Generic => {
            return Err(LowerError::Unsupported {
                op: OP,
                reason: "generic depthwise convolution is not available on the gpu backend"
                    .to_string(),
            });
        }
    };

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_quantization = ?input.quantization(),
        weights_quantization = ?weights.quantization(),
        input_shape = %input.shape(),
        weights_shape = %weights.shape(),
        output_shape = %output.shape(),
        "instantiated GpuDepthwiseConvolution3x3"
    );

    Ok(Box::new(unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{gpu_tensor, quantized_tensor};
    use ng_graph::{NodeId, Op};

    fn dwc_node(input_dtype: DType, bias_dtype: DType, method: DepthwiseConvolutionMethod) -> Node {
        let input = if input_dtype.is_quantized_asymmetric() {
            quantized_tensor(&[1, 16, 16, 8], input_dtype)
        } else {
            gpu_tensor(&[1, 16, 16, 8], input_dtype)
        };
        Node::new(
            NodeId(0),
            "dwc",
            Op::DepthwiseConvolution {
                conv_info: PadStrideInfo::new(1, 1, 1, 1),
                method,
            },
            vec![
                Some(input),
                Some(gpu_tensor(&[3, 3, 8], input_dtype)),
                Some(gpu_tensor(&[8], bias_dtype)),
            ],
            vec![Some(gpu_tensor(&[1, 16, 16, 8], input_dtype))],
        )
    }

    #[test]
    fn test_optimized_3x3_lowers() {
        let node = dwc_node(
            DType::F32,
            DType::F32,
            DepthwiseConvolutionMethod::Optimized3x3,
        );
        let unit = lower(
            &node,
            PadStrideInfo::new(1, 1, 1, 1),
            DepthwiseConvolutionMethod::Optimized3x3,
        )
        .unwrap();
        assert_eq!(unit.name(), "GpuDepthwiseConvolution3x3");
    }

    #[test]
    fn test_generic_method_is_fatal() {
        let node = dwc_node(DType::F32, DType::F32, DepthwiseConvolutionMethod::Generic);
        assert!(matches!(
            lower(
                &node,
                PadStrideInfo::new(1, 1, 1, 1),
                DepthwiseConvolutionMethod::Generic,
            ),
            Err(LowerError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_quantized_input_coerces_bias_to_s32() {
        let node = dwc_node(
            DType::QAsymm8,
            DType::S8,
            DepthwiseConvolutionMethod::Optimized3x3,
        );
        lower(
            &node,
            PadStrideInfo::new(1, 1, 1, 1),
            DepthwiseConvolutionMethod::Optimized3x3,
        )
        .unwrap();
        let bias = node.input(2).unwrap().handle().unwrap();
        assert_eq!(bias.dtype(), DType::S32);
    }

    #[test]
    fn test_float_input_never_coerces_bias() {
        let node = dwc_node(
            DType::F32,
            DType::F32,
            DepthwiseConvolutionMethod::Optimized3x3,
        );
        lower(
            &node,
            PadStrideInfo::new(1, 1, 1, 1),
            DepthwiseConvolutionMethod::Optimized3x3,
        )
        .unwrap();
        let bias = node.input(2).unwrap().handle().unwrap();
        assert_eq!(bias.dtype(), DType::F32);
    }
}
