use std::any::Any;
use std::fmt::Debug;

/// A configured, ready-to-run kernel instance for one graph node.
///
/// The lowering pass returns these as `Box<dyn Function>`; the caller owns
/// the unit exclusively from then on. Numeric execution lives in the runtime
/// library, so the trait only exposes what the compilation side needs: a
/// stable kernel name for diagnostics and downcast access for callers that
/// know the concrete type.
pub trait Function: Debug + Send + Sync {
    /// Stable name of the kernel this unit wraps (e.g. "GpuActivation").
    fn name(&self) -> &'static str;

    /// Downcast access to the concrete kernel instance.
    fn as_any(&self) -> &dyn Any;
}
