use thiserror::Error;

/// Why a callback could not reach its target.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The callback only holds a weak handle and the target has been dropped.
    #[error("callback target no longer exists")]
    Expired,
    /// The target or a lent parameter is already locked by this thread, a bound method is
    /// triggering a callback on its own object or a lent parameter is the target itself.
    #[error("callback target is already locked by this thread")]
    Busy,
}

pub type Result<T> = core::result::Result<T, Error>;
