use ng_core::Target;
use thiserror::Error;

/// Fatal conditions that abort a lowering pass.
///
/// Arity, operand, and target violations are graph-construction defects;
/// unsupported configurations are explicit rejections of an algorithm choice
/// this backend does not ship. Non-fatal outcomes (disabled node, kind not
/// lowered by this backend) are `Ok(None)` from the dispatcher, not errors.
#[derive(Error, Debug)]
pub enum LowerError {
    #[error("{op} node has {got} inputs, expected {expected}")]
    InputArity {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{op} node has {got} outputs, expected {expected}")]
    OutputArity {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{op} node is missing a backing tensor for its {operand} operand")]
    MissingOperand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("tensor is tagged for the {got} backend, but this pass lowers for {expected}")]
    TargetMismatch { expected: Target, got: Target },
    #[error("{op}: unsupported configuration: {reason}")]
    Unsupported { op: &'static str, reason: String },
    #[error("{op}: invalid parameter: {reason}")]
    InvalidParameter { op: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, LowerError>;
