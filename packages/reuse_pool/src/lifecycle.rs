/// Lifecycle hooks a [`ReusePool`][crate::ReusePool] invokes as items move between the
/// queue and its callers.
///
/// This is a strategy object supplied at pool construction via
/// [`ReusePoolBuilder::lifecycle()`][crate::ReusePoolBuilder::lifecycle], not something the
/// pool is subclassed or wrapped to obtain. All methods default to no-ops; `()` implements
/// the trait with the defaults and serves as the lifecycle of pools that need no hooks.
///
/// # Symmetry requirements
///
/// [`on_release()`][Self::on_release] must undo whatever [`on_acquire()`][Self::on_acquire]
/// established (subscriptions, registrations, borrowed capabilities), or the effects leak
/// and accumulate across repeated acquire/release cycles of the same item.
///
/// [`on_destroy()`][Self::on_destroy] must cope with items arriving from either direction:
/// an item destroyed out of the queue during pool teardown last passed through
/// `on_release`, while an item a caller destroys after acquiring it last passed through
/// `on_acquire`. Undoing the acquire-time effects must therefore be safe even when they
/// were already undone.
///
/// # Examples
///
/// ```
/// use reuse_pool::{ItemLifecycle, ReusePool};
///
/// struct Connection {
///     registered: bool,
/// }
/// impl reuse_pool::Reusable for Connection {}
///
/// struct Registry;
///
/// impl ItemLifecycle<Connection> for Registry {
///     fn on_acquire(&mut self, item: &mut Connection) {
///         item.registered = true;
///     }
///
///     fn on_release(&mut self, item: &mut Connection) {
///         item.registered = false;
///     }
///
///     fn on_destroy(&mut self, item: &mut Connection) {
///         item.registered = false;
///     }
/// }
///
/// let mut pool = ReusePool::builder()
///     .factory(|| Connection { registered: false })
///     .lifecycle(Registry)
///     .build();
///
/// let connection = pool.acquire()?;
/// assert!(connection.registered);
/// # Ok::<(), reuse_pool::FactoryFailed>(())
/// ```
pub trait ItemLifecycle<T> {
    /// Invoked on every item handed out by [`acquire()`][crate::ReusePool::acquire],
    /// whether it came from the queue or fresh from the factory, before the caller
    /// receives it.
    fn on_acquire(&mut self, _item: &mut T) {}

    /// Invoked on every item passed to [`release()`][crate::ReusePool::release], after the
    /// item has been [deactivated][crate::Reusable::deactivate] and before it is queued.
    fn on_release(&mut self, _item: &mut T) {}

    /// Invoked exactly once per queued item when a pool with
    /// [`DropPolicy::NotifyItems`][crate::DropPolicy::NotifyItems] is dropped, immediately
    /// before the item itself is dropped.
    fn on_destroy(&mut self, _item: &mut T) {}
}

/// The no-op lifecycle, for pools whose items need no transition logic.
impl<T> ItemLifecycle<T> for () {}
