//! Shared pointer aliases used for callback targets and parameters.

cfg_if! {
    if #[cfg(feature = "std")] {
        use std::sync::{Arc, Weak};
    } else {
        use alloc::sync::{Arc, Weak};
    }
}

/// A shared ptr
pub type ShrPtr<T> = Arc<T>;

/// A sync/send mutable shared ptr
pub type SShrPtr<T> = Arc<spin::Mutex<T>>;

/// A non owning version of `SShrPtr`, see `Arc::downgrade`
pub type WShrPtr<T> = Weak<spin::Mutex<T>>;

/// Wrap a value so it can be the target of callbacks or bound as one of their parameters.
///
/// Parameters bound through the returned handle are read when the callback is triggered, so
/// changes made with `ParamSet::set` (or through `lock`) are seen by the bound method.
pub fn new_shared<T>(value: T) -> SShrPtr<T> {
    Arc::new(spin::Mutex::new(value))
}

/// Get a non owning handle to a target.
pub fn downgrade<T>(ptr: &SShrPtr<T>) -> WShrPtr<T> {
    Arc::downgrade(ptr)
}
