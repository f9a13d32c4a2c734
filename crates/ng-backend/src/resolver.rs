use std::sync::Arc;

use ng_core::DeviceTensor;
use ng_graph::GraphTensor;

use crate::error::{LowerError, Result};
use crate::BACKEND_TARGET;

/// Resolve an abstract tensor reference to its backing device tensor.
///
/// An empty slot resolves to `None`, as does a tensor the allocator has not
/// bound yet. A tensor tagged for a different backend is a graph-construction
/// defect and fatal. Pure and idempotent.
pub(crate) fn backing_tensor(
    tensor: Option<&Arc<GraphTensor>>,
) -> Result<Option<Arc<DeviceTensor>>> {
    let Some(tensor) = tensor else {
        return Ok(None);
    };
    let target = tensor.descriptor().target;
    if target != BACKEND_TARGET {
        return Err(LowerError::TargetMismatch {
            expected: BACKEND_TARGET,
            got: target,
        });
    }
    Ok(tensor.handle().cloned())
}

/// Resolve an operand a lowerer cannot do without.
pub(crate) fn required_operand(
    op: &'static str,
    operand: &'static str,
    tensor: Option<&Arc<GraphTensor>>,
) -> Result<Arc<DeviceTensor>> {
    backing_tensor(tensor)?.ok_or(LowerError::MissingOperand { op, operand })
}
