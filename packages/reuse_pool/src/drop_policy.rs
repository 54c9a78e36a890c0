/// Determines how a [`ReusePool`][crate::ReusePool] treats the items still waiting in its
/// queue when the pool itself is dropped.
///
/// By default, queued items are dropped without any lifecycle notification.
///
/// # Examples
///
/// ```
/// use reuse_pool::{DropPolicy, ReusePool};
///
/// struct Sensor;
/// impl reuse_pool::Reusable for Sensor {}
///
/// // The drop policy is set at pool creation time.
/// let pool = ReusePool::builder()
///     .factory(|| Sensor)
///     .drop_policy(DropPolicy::NotifyItems)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// Queued items are dropped without receiving any lifecycle notification.
    /// This is the default.
    #[default]
    DiscardItems,

    /// Every item still in the queue receives exactly one
    /// [`on_destroy`][crate::ItemLifecycle::on_destroy] notification before being dropped.
    ///
    /// Use this when items hold resources or subscriptions that the lifecycle strategy
    /// established and that must be undone before the items disappear.
    NotifyItems,
}
