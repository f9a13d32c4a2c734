//! `ng-graph` - Computation-graph IR consumed by nngraph backend lowering.
//!
//! This crate provides:
//! - `GraphTensor`, the abstract tensor reference with an optional backing
//!   handle bound by the allocator
//! - `Node` and the tagged `Op` enumeration of layer operations
//! - `Graph`, the tensor/node arena
//! - `ExecutionContext`, the per-pass memory-manager registry

pub mod context;
pub mod error;
pub mod graph;
pub mod node;
pub mod tensor;

pub use context::ExecutionContext;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use node::{Node, NodeId, Op};
pub use tensor::{GraphTensor, TensorDescriptor, TensorId};
