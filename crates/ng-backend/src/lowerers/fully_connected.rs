use ng_core::kernels::GpuFullyConnected;
use ng_core::Function;
use ng_graph::{ExecutionContext, Node};

use super::check_arity;
use crate::error::Result;
use crate::resolver::required_operand;
use crate::BACKEND_TARGET;

const OP: &str = "fully connected";

pub(crate) fn lower(node: &Node, ctx: &ExecutionContext) -> Result<Box<dyn Function>> {
    tracing::trace!(node = node.name(), "lowering fully connected node");
    check_arity(node, OP, 3, 1)?;

    let input = required_operand(OP, "input", node.input(0))?;
    let weights = required_operand(OP, "weights", node.input(1))?;
    let biases = required_operand(OP, "biases", node.input(2))?;
    let output = required_operand(OP, "output", node.output(0))?;

    tracing::debug!(
        node = node.name(),
        dtype = %input.dtype(),
        input_shape = %input.shape(),
        weights_shape = %weights.shape(),
        biases_shape = %biases.shape(),
        output_shape = %output.shape(),
        "instantiated GpuFullyConnected"
    );

    Ok(Box::new(GpuFullyConnected::new(
        ctx.memory_manager(BACKEND_TARGET),
        input,
        weights,
        biases,
        output,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::gpu_tensor;
    use crate::LowerError;
    use ng_core::{DType, MemoryManager, Target};
    use ng_graph::{NodeId, Op};
    use std::sync::Arc;

    fn fc_node() -> Node {
        Node::new(
            NodeId(0),
            "fc",
            Op::FullyConnected,
            vec![
                Some(gpu_tensor(&[1, 64], DType::F32)),
                Some(gpu_tensor(&[64, 10], DType::F32)),
                Some(gpu_tensor(&[10], DType::F32)),
            ],
            vec![Some(gpu_tensor(&[1, 10], DType::F32))],
        )
    }

    #[test]
    fn test_always_requests_the_shared_manager() {
        let mm = Arc::new(MemoryManager::new(Target::Gpu));
        let mut ctx = ExecutionContext::new(Target::Gpu);
        ctx.insert_memory_manager(mm.clone());

        let unit = lower(&fc_node(), &ctx).unwrap();
        assert_eq!(unit.name(), "GpuFullyConnected");
        assert_eq!(mm.registered(), 1);
    }

    #[test]
    fn test_lowers_without_a_registered_manager() {
        let ctx = ExecutionContext::new(Target::Gpu);
        let unit = lower(&fc_node(), &ctx).unwrap();
        let fc = unit.as_any().downcast_ref::<GpuFullyConnected>().unwrap();
        assert!(fc.memory_manager.is_none());
    }

    #[test]
    fn test_wrong_arity_is_fatal() {
        let node = Node::new(
            NodeId(0),
            "fc",
            Op::FullyConnected,
            vec![
                Some(gpu_tensor(&[1, 64], DType::F32)),
                Some(gpu_tensor(&[64, 10], DType::F32)),
            ],
            vec![Some(gpu_tensor(&[1, 10], DType::F32))],
        );
        let ctx = ExecutionContext::new(Target::Gpu);
        assert!(matches!(
            lower(&node, &ctx),
            Err(LowerError::InputArity { expected: 3, .. })
        ));
    }
}
