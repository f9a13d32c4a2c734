use std::collections::HashMap;
use std::sync::Arc;

use ng_core::{MemoryManager, Target};

/// Per-pass execution context handed to the backend lowering entry point.
///
/// Carries the target backend of the pass and a registry of shared memory
/// managers keyed by backend tag. The registry is populated before lowering
/// starts and only read afterwards, so lookups may run concurrently.
#[derive(Debug)]
pub struct ExecutionContext {
    target: Target,
    memory_managers: HashMap<Target, Arc<MemoryManager>>,
}

impl ExecutionContext {
    /// Create a context for a pass targeting the given backend.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            memory_managers: HashMap::new(),
        }
    }

    /// Backend this compilation pass targets.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Register a memory manager under its own target tag.
    pub fn insert_memory_manager(&mut self, manager: Arc<MemoryManager>) {
        self.memory_managers.insert(manager.target(), manager);
    }

    /// Look up the shared memory manager for a backend, if one is registered.
    pub fn memory_manager(&self, target: Target) -> Option<Arc<MemoryManager>> {
        self.memory_managers.get(&target).cloned()
    }
}
