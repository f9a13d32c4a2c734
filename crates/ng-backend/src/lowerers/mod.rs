//! Per-operation lowerers.
//!
//! Each module lowers one operation kind and follows the same contract:
//! check exact arity, resolve required operands, read the node's parameters,
//! apply coercions, then construct exactly one kernel instance (or report
//! "nothing to lower" where the node allows it).

pub(crate) mod activation;
pub(crate) mod batch_norm;
pub(crate) mod convolution;
pub(crate) mod depth_concat;
pub(crate) mod depthwise;
pub(crate) mod eltwise;
pub(crate) mod fully_connected;
pub(crate) mod normalization;
pub(crate) mod pooling;
pub(crate) mod softmax;

use std::sync::Arc;

use ng_core::DeviceTensor;
use ng_graph::Node;

use crate::error::{LowerError, Result};

/// Enforce the fixed input/output arity of an operation kind.
pub(crate) fn check_arity(
    node: &Node,
    op: &'static str,
    inputs: usize,
    outputs: usize,
) -> Result<()> {
    if node.num_inputs() != inputs {
        return Err(LowerError::InputArity {
            op,
            expected: inputs,
            got: node.num_inputs(),
        });
    }
    check_output_arity(node, op, outputs)
}

/// Output-side arity check alone, for variadic-input operations.
pub(crate) fn check_output_arity(node: &Node, op: &'static str, outputs: usize) -> Result<()> {
    if node.num_outputs() != outputs {
        return Err(LowerError::OutputArity {
            op,
            expected: outputs,
            got: node.num_outputs(),
        });
    }
    Ok(())
}

/// Whether a node reads and writes the same backing tensor. Diagnostics
/// only; in-place operation is valid.
pub(crate) fn is_in_place(input: &Arc<DeviceTensor>, output: &Arc<DeviceTensor>) -> bool {
    Arc::ptr_eq(input, output)
}
