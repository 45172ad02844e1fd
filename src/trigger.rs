use crate::error::Result;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Uniform interface for anything that can be triggered without arguments, regardless of what
/// it is bound to.
pub trait Trigger {
    fn trigger_id(&self) -> TriggerId;
    /// Invoke, reporting when the target could not be reached.
    fn try_trigger(&self) -> Result<()>;
    /// Invoke, ignoring (but logging) when the target could not be reached.
    fn trigger(&self);
}

static ID_COUNT: AtomicUsize = AtomicUsize::new(0);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, PartialOrd, Ord)]
pub struct TriggerId {
    id: usize,
}

impl TriggerId {
    pub fn new() -> Self {
        Self {
            id: ID_COUNT.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn get(&self) -> usize {
        self.id
    }
}

impl Default for TriggerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "trigger#{}", self.id)
    }
}
