use std::sync::{Arc, OnceLock};

use ng_core::{DType, DeviceTensor, Shape, Target};

use crate::error::{GraphError, Result};

/// Identifier of a tensor within its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TensorId(pub u32);

/// Shape, datatype, and placement of an abstract graph tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorDescriptor {
    pub target: Target,
    pub shape: Shape,
    pub dtype: DType,
}

impl TensorDescriptor {
    pub fn new(target: Target, shape: Shape, dtype: DType) -> Self {
        Self {
            target,
            shape,
            dtype,
        }
    }
}

/// An abstract tensor reference in the computation graph.
///
/// Shared by its producer node and every consumer node through `Arc`; the
/// arena in [`crate::Graph`] keeps it alive for the lifetime of the graph.
/// The backing device tensor is bound at most once, by the allocator, after
/// graph construction and before lowering.
#[derive(Debug)]
pub struct GraphTensor {
    id: TensorId,
    descriptor: TensorDescriptor,
    handle: OnceLock<Arc<DeviceTensor>>,
}

impl GraphTensor {
    /// Create an unbound graph tensor.
    pub fn new(id: TensorId, descriptor: TensorDescriptor) -> Self {
        Self {
            id,
            descriptor,
            handle: OnceLock::new(),
        }
    }

    pub fn id(&self) -> TensorId {
        self.id
    }

    pub fn descriptor(&self) -> &TensorDescriptor {
        &self.descriptor
    }

    /// Bind the backing device tensor. Fails if one is already bound.
    pub fn bind(&self, handle: Arc<DeviceTensor>) -> Result<()> {
        self.handle
            .set(handle)
            .map_err(|_| GraphError::AlreadyBound(self.id))
    }

    /// The backing device tensor, if the allocator has bound one.
    pub fn handle(&self) -> Option<&Arc<DeviceTensor>> {
        self.handle.get()
    }
}
