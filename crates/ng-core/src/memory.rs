use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::Target;

/// A shared registry of scratch memory pools.
///
/// One manager serves every kernel instance of a compilation pass that asks
/// for scratch memory; kernels hold it through `Arc`. Pool contents are the
/// runtime's concern, so at this layer the manager only tracks its backend
/// affinity and how many kernels registered with it.
#[derive(Debug)]
pub struct MemoryManager {
    target: Target,
    registered: AtomicUsize,
}

impl MemoryManager {
    /// Create a manager serving the given backend.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            registered: AtomicUsize::new(0),
        }
    }

    /// Backend this manager allocates for.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Record one kernel instance taking a reference to this manager.
    pub fn register(&self) {
        self.registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of kernel instances registered so far.
    pub fn registered(&self) -> usize {
        self.registered.load(Ordering::Relaxed)
    }
}
