//! `ng-backend` - GPU backend lowering for the nngraph computation graph.
//!
//! Translates graph nodes into configured kernel instances for the GPU
//! backend. The single public operation is [`lower`]: it dispatches a node to
//! the lowerer for its operation kind, which validates arity and operands,
//! resolves backing tensors, applies quantization coercions, selects an
//! algorithm variant where one exists, and hands the constructed unit back to
//! the caller.
//!
//! `Ok(None)` means "no unit to execute" (no node, a kind this backend does
//! not lower, or an administratively disabled node); fatal precondition
//! violations and unsupported configurations are [`LowerError`]s that abort
//! the whole pass.

pub mod dispatch;
pub mod error;
mod lowerers;
mod resolver;

#[cfg(test)]
pub(crate) mod testutil;

pub use dispatch::lower;
pub use error::{LowerError, Result};

use ng_core::Target;

/// The backend this crate lowers for. Tensors routed here must be tagged
/// with it.
pub const BACKEND_TARGET: Target = Target::Gpu;
