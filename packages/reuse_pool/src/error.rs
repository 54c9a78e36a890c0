use thiserror::Error;

/// Raised when a pool's item factory cannot construct a new item.
///
/// A factory that cannot produce items is a configuration defect, not a transient condition,
/// so the pool makes no attempt to retry - the error is surfaced immediately from
/// [`acquire()`][crate::ReusePool::acquire] or [`prewarm()`][crate::ReusePool::prewarm]
/// and the pool remains usable should the caller fix the underlying problem.
#[derive(Debug, Error)]
#[error("item factory failed to construct a new pool item")]
pub struct FactoryFailed {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl FactoryFailed {
    pub(crate) fn new(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self { source }
    }
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`FactoryFailed`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, FactoryFailed>;
