use std::collections::HashMap;
use std::sync::Arc;

use crate::node::{Node, NodeId, Op};
use crate::tensor::{GraphTensor, TensorDescriptor, TensorId};

/// The computation graph: an arena of tensors keyed by id, plus the nodes
/// wired over them.
///
/// Construction and validation policy belong to the graph builder; this type
/// only guarantees the structural facts lowering relies on, namely that
/// tensors are shared handles with graph lifetime and that nodes are
/// immutable once added.
#[derive(Debug, Default)]
pub struct Graph {
    tensors: HashMap<TensorId, Arc<GraphTensor>>,
    nodes: Vec<Arc<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tensor in the arena and return its shared handle.
    pub fn add_tensor(&mut self, descriptor: TensorDescriptor) -> Arc<GraphTensor> {
        let id = TensorId(self.tensors.len() as u32);
        let tensor = Arc::new(GraphTensor::new(id, descriptor));
        self.tensors.insert(id, tensor.clone());
        tensor
    }

    /// Add a node wired over previously created tensors.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        op: Op,
        inputs: Vec<Option<Arc<GraphTensor>>>,
        outputs: Vec<Option<Arc<GraphTensor>>>,
    ) -> Arc<Node> {
        let id = NodeId(self.nodes.len() as u32);
        let node = Arc::new(Node::new(id, name, op, inputs, outputs));
        self.nodes.push(node.clone());
        node
    }

    /// Look up a tensor by id.
    pub fn tensor(&self, id: TensorId) -> Option<&Arc<GraphTensor>> {
        self.tensors.get(&id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Arc<Node>] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_core::{ActivationFunction, ActivationInfo, DType, Shape, Target};

    #[test]
    fn test_arena_sharing() {
        let mut graph = Graph::new();
        let desc = TensorDescriptor::new(Target::Gpu, Shape::from_slice(&[4]), DType::F32);
        let t0 = graph.add_tensor(desc.clone());
        let t1 = graph.add_tensor(desc);

        let node = graph.add_node(
            "act",
            Op::Activation(ActivationInfo::new(ActivationFunction::Relu, 0.0, 0.0)),
            vec![Some(t0.clone())],
            vec![Some(t1)],
        );

        // The arena and the node share one handle per tensor.
        assert!(Arc::ptr_eq(graph.tensor(t0.id()).unwrap(), &t0));
        assert!(Arc::ptr_eq(node.input(0).unwrap(), &t0));
        assert_eq!(graph.nodes().len(), 1);
        assert_eq!(node.id(), NodeId(0));
    }
}
