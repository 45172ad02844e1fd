//! Handles a callback can hold to reach the object its method is bound to.

use crate::error::{Error, Result};
use crate::ptr::{SShrPtr, WShrPtr};
use spin::Mutex;

/// Something that can lend out exclusive access to the object a callback is bound to.
///
/// Access waits for the lock, so a target shared between threads sees every call. A lock the
/// current thread already took on behalf of a callback (a bound method triggering another
/// callback on its own object, or a lent parameter that is the target itself) is reported as
/// `Error::Busy` instead. Triggering a callback while holding its target's lock by hand, outside
/// of any callback, never returns.
pub trait Target {
    type Object;

    fn with_object<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Self::Object) -> R;
}

/// Shared ownership, the target lives at least as long as the callback.
impl<T> Target for SShrPtr<T> {
    type Object = T;

    fn with_object<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        lock_with(&**self, f)
    }
}

/// No ownership, the target may be gone by the time the callback is triggered.
impl<T> Target for WShrPtr<T> {
    type Object = T;

    fn with_object<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let target = self.upgrade().ok_or(Error::Expired)?;
        lock_with(&*target, f)
    }
}

/// Borrowed, the borrow checker keeps the target alive.
impl<'a, T> Target for &'a Mutex<T> {
    type Object = T;

    fn with_object<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        lock_with(*self, f)
    }
}

/// Lock `mutex` for the duration of `f`, failing with `Error::Busy` if this thread already
/// holds it through another `lock_with`.
pub(crate) fn lock_with<T, R, F>(mutex: &Mutex<T>, f: F) -> Result<R>
where
    F: FnOnce(&mut T) -> R,
{
    let _held = Held::enter(mutex)?;
    let mut guard = mutex.lock();
    Ok(f(&mut *guard))
}

cfg_if! {
    if #[cfg(feature = "std")] {
        use core::cell::RefCell;

        std::thread_local! {
            static HELD: RefCell<Vec<usize>> = RefCell::new(Vec::new());
        }

        /// Marks a lock as taken by this thread until dropped.
        struct Held(usize);

        impl Held {
            fn enter<T>(mutex: &Mutex<T>) -> Result<Self> {
                let addr = mutex as *const Mutex<T> as usize;
                HELD.with(|held| {
                    let mut held = held.borrow_mut();
                    if held.contains(&addr) {
                        Err(Error::Busy)
                    } else {
                        held.push(addr);
                        Ok(Held(addr))
                    }
                })
            }
        }

        impl Drop for Held {
            fn drop(&mut self) {
                let addr = self.0;
                let _ = HELD.try_with(|held| {
                    let mut held = held.borrow_mut();
                    if let Some(i) = held.iter().rposition(|a| *a == addr) {
                        held.swap_remove(i);
                    }
                });
            }
        }
    } else {
        //XXX no thread locals, reentrant locking spins forever
        struct Held;

        impl Held {
            fn enter<T>(_mutex: &Mutex<T>) -> Result<Self> {
                Ok(Held)
            }
        }
    }
}
