use ng_core::kernels::GpuSoftmax;
use ng_core::Function;
use ng_graph::{ExecutionContext, Node};

use super::{check_arity, is_in_place};
use crate::error::{LowerError, Result};
use crate::resolver::required_operand;
use crate::BACKEND_TARGET;

const OP: &str = "softmax";

pub(crate) fn lower(node: &Node, ctx: &ExecutionContext, beta: f32) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering softmax node");
    check_arity(node, OP, 1, 1)?;

    if beta <= 0.0 {
        return Err(LowerError::InvalidParameter {
            op: OP,
            reason: format!("beta must be positive, got {beta}"),
        });
    }

    let input = required_operand(OP, "input", node.input(0))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_shape = %input.shape(),
        output_shape = %output.shape(),
        beta,
        in_place = is_in_place(&input, &output),
        "instantiated GpuSoftmax"
    );

    // Scratch memory comes from this backend's own manager.
    Ok(Box::new(GpuSoftmax::new(
        ctx.memory_manager(BACKEND_TARGET),
        input,
        output,
        beta,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::gpu_tensor;
    use ng_core::{DType, MemoryManager, Target};
    use ng_graph::{NodeId, Op};
    use std::sync::Arc;

    fn softmax_node(beta: f32) -> Node {
        Node::new(
            NodeId(0),
            "sm",
            Op::Softmax { beta },
            vec![Some(gpu_tensor(&[1, 1000], DType::F32))],
            vec![Some(gpu_tensor(&[1, 1000], DType::F32))],
        )
    }

    #[test]
    fn test_requests_own_backend_manager() {
        let gpu_mm = Arc::new(MemoryManager::new(Target::Gpu));
        let cpu_mm = Arc::new(MemoryManager::new(Target::Cpu));
        let mut ctx = ExecutionContext::new(Target::Gpu);
        ctx.insert_memory_manager(gpu_mm.clone());
        ctx.insert_memory_manager(cpu_mm.clone());

        let unit = lower(&softmax_node(1.0), &ctx, 1.0).unwrap();
        let sm = unit.as_any().downcast_ref::<GpuSoftmax>().unwrap();
        assert_eq!(sm.beta, 1.0);
        assert_eq!(gpu_mm.registered(), 1);
        assert_eq!(cpu_mm.registered(), 0);
    }

    #[test]
    fn test_non_positive_beta_is_fatal() {
        let ctx = ExecutionContext::new(Target::Gpu);
        for beta in [0.0, -2.0] {
            assert!(matches!(
                lower(&softmax_node(beta), &ctx, beta),
                Err(LowerError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_wrong_arity_is_fatal() {
        let node = Node::new(
            NodeId(0),
            "sm",
            Op::Softmax { beta: 1.0 },
            vec![],
            vec![Some(gpu_tensor(&[1, 10], DType::F32))],
        );
        let ctx = ExecutionContext::new(Target::Gpu);
        assert!(matches!(
            lower(&node, &ctx, 1.0),
            Err(LowerError::InputArity { expected: 1, got: 0, .. })
        ));
    }
}
