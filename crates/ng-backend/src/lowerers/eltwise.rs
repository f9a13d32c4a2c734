use ng_core::kernels::{GpuArithmeticAddition, GpuPixelWiseMultiplication};
use ng_core::{ConvertPolicy, EltwiseOp, Function};
use ng_graph::Node;

use super::check_arity;
use crate::error::{LowerError, Result};
use crate::resolver::required_operand;

const OP: &str = "eltwise";

/// Output scale for pixel-wise multiplication. The GPU kernel only ships the
/// unity-scale configuration.
const MUL_SCALE: f32 = 1.0;

pub(crate) fn lower(
    node: &Node,
    op_code: EltwiseOp,
    policy: ConvertPolicy,
) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering eltwise node");
    check_arity(node, OP, 2, 1)?;

    let lhs = required_operand(OP, "lhs", node.input(0))?;
    let rhs = required_operand(OP, "rhs", node.input(1))?;
    let output = required_operand(OP, "output", node.output(0))?;

    let unit: Box<dyn Function> = match op_code {
        EltwiseOp::Add => Box::new(GpuArithmeticAddition::new(
            lhs.clone(),
            rhs,
            output,
            policy,
        )),
        EltwiseOp::Mul => Box::new(GpuPixelWiseMultiplication::new(
            lhs.clone(),
            rhs,
            output,
            MUL_SCALE,
        )),
        EltwiseOp::Sub => {
            return Err(LowerError::Unsupported {
                op: OP,
                reason: "arithmetic subtraction is not available on the gpu backend".to_string(),
            });
        }
        EltwiseOp::Div => {
            return Err(LowerError::Unsupported {
                op: OP,
                reason: format!("unsupported element-wise operation: {op_code}"),
            });
        }
    };

    tracing::debug!(
        node = node.name(),
        dtype = %lhs.dtype(),
        shape = %lhs.shape(),
        "instantiated {}", unit.name()
    );

    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::gpu_tensor;
    use ng_core::DType;
    use ng_graph::{NodeId, Op};

    fn eltwise_node(op: EltwiseOp, policy: ConvertPolicy) -> Node {
        Node::new(
            NodeId(0),
            "elt",
            Op::Eltwise { op, policy },
            vec![
                Some(gpu_tensor(&[1, 8, 8, 4], DType::F32)),
                Some(gpu_tensor(&[1, 8, 8, 4], DType::F32)),
            ],
            vec![Some(gpu_tensor(&[1, 8, 8, 4], DType::F32))],
        )
    }

    #[test]
    fn test_add_lowers_under_any_policy() {
        for policy in [ConvertPolicy::Wrap, ConvertPolicy::Saturate] {
            let node = eltwise_node(EltwiseOp::Add, policy);
            let unit = lower(&node, EltwiseOp::Add, policy).unwrap();
            let add = unit
                .as_any()
                .downcast_ref::<GpuArithmeticAddition>()
                .unwrap();
            assert_eq!(add.policy, policy);
        }
    }

    #[test]
    fn test_mul_lowers_with_unity_scale() {
        let node = eltwise_node(EltwiseOp::Mul, ConvertPolicy::Wrap);
        let unit = lower(&node, EltwiseOp::Mul, ConvertPolicy::Wrap).unwrap();
        let mul = unit
            .as_any()
            .downcast_ref::<GpuPixelWiseMultiplication>()
            .unwrap();
        assert_eq!(mul.scale, 1.0);
    }

    #[test]
    fn test_sub_is_fatal() {
        let node = eltwise_node(EltwiseOp::Sub, ConvertPolicy::Saturate);
        assert!(matches!(
            lower(&node, EltwiseOp::Sub, ConvertPolicy::Saturate),
            Err(LowerError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_other_op_code_is_fatal() {
        let node = eltwise_node(EltwiseOp::Div, ConvertPolicy::Wrap);
        assert!(matches!(
            lower(&node, EltwiseOp::Div, ConvertPolicy::Wrap),
            Err(LowerError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_wrong_arity_is_fatal() {
        let node = Node::new(
            NodeId(0),
            "elt",
            Op::Eltwise {
                op: EltwiseOp::Add,
                policy: ConvertPolicy::Wrap,
            },
            vec![Some(gpu_tensor(&[4], DType::F32))],
            vec![Some(gpu_tensor(&[4], DType::F32))],
        );
        assert!(matches!(
            lower(&node, EltwiseOp::Add, ConvertPolicy::Wrap),
            Err(LowerError::InputArity { expected: 2, .. })
        ));
    }
}
