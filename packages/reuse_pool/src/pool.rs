use std::collections::VecDeque;
use std::fmt;

use crate::error::Result;
use crate::{DropPolicy, FactoryFailed, ItemLifecycle, ReusePoolBuilder, Reusable};

/// The factory capability a pool uses to manufacture items on demand.
///
/// Boxed so the pool does not need a type parameter for it; factories run rarely enough
/// (only when the queue is empty) that the indirection does not matter. Factories must be
/// [`Send`] so that pools stay thread-mobile when their items and lifecycle are.
pub(crate) type BoxedFactory<T> = Box<
    dyn FnMut() -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>> + Send,
>;

/// An object reuse pool that amortizes construction cost by recycling previously built
/// items in FIFO order.
///
/// Items are handed out by [`acquire()`][1] and handed back by [`release()`][2]. When the
/// queue of available items is empty, `acquire()` manufactures exactly one new item via the
/// caller-supplied factory and returns it directly, without queueing it first. Released
/// items wait in a FIFO queue: the item released longest ago is the next one reused.
///
/// A caller-supplied [`ItemLifecycle`] strategy observes every transition: `on_acquire`
/// fires once per `acquire()`, `on_release` once per `release()`, and `on_destroy` once
/// per queued item when a pool configured with [`DropPolicy::NotifyItems`] is dropped.
///
/// # Ownership
///
/// The pool owns the items in its queue; `acquire()` moves an item out to the caller and
/// `release()` moves it back in. An item is therefore in the queue or in the caller's
/// possession, never both, and duplicate queue membership cannot be expressed. An item the
/// caller never releases simply leaves the pool's tracking - it remains valid, just
/// unmanaged.
///
/// # Examples
///
/// ```
/// use reuse_pool::ReusePool;
///
/// struct Scratch {
///     bytes: Vec<u8>,
/// }
/// impl reuse_pool::Reusable for Scratch {}
///
/// let mut pool = ReusePool::builder()
///     .factory(|| Scratch {
///         bytes: Vec::with_capacity(4096),
///     })
///     .build();
///
/// // The queue is empty, so this manufactures a fresh item.
/// let mut scratch = pool.acquire()?;
/// scratch.bytes.extend_from_slice(b"payload");
///
/// // Hand it back; the next acquire reuses it instead of building another.
/// pool.release(scratch);
/// let again = pool.acquire()?;
/// assert_eq!(again.bytes.capacity(), 4096);
/// # Ok::<(), reuse_pool::FactoryFailed>(())
/// ```
///
/// # Thread safety
///
/// The pool is thread-mobile ([`Send`]) when `T` and the lifecycle are, and can be moved
/// between threads; factories are always required to be [`Send`]. It is never [`Sync`]:
/// every operation takes `&mut self` and completes synchronously without blocking, so
/// embedding a pool in a multi-threaded host requires external synchronization with
/// exclusive ownership per pool instance.
///
/// [1]: Self::acquire
/// [2]: Self::release
pub struct ReusePool<T, L = ()>
where
    T: Reusable,
    L: ItemLifecycle<T>,
{
    /// Items ready for reuse. FIFO: insertion order is reuse order.
    available: VecDeque<T>,

    factory: BoxedFactory<T>,

    lifecycle: L,

    drop_policy: DropPolicy,
}

impl<T> ReusePool<T, ()>
where
    T: Reusable,
{
    /// Starts building a new [`ReusePool`].
    ///
    /// The factory is mandatory; the lifecycle strategy and
    /// [drop policy][DropPolicy] are optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Pallet;
    /// impl reuse_pool::Reusable for Pallet {}
    ///
    /// let pool = ReusePool::builder().factory(|| Pallet).build();
    /// assert!(pool.is_empty());
    /// ```
    pub fn builder() -> ReusePoolBuilder<T, ()> {
        ReusePoolBuilder::new()
    }
}

impl<T, L> ReusePool<T, L>
where
    T: Reusable,
    L: ItemLifecycle<T>,
{
    pub(crate) fn new_inner(factory: BoxedFactory<T>, lifecycle: L, drop_policy: DropPolicy) -> Self {
        Self {
            available: VecDeque::new(),
            factory,
            lifecycle,
            drop_policy,
        }
    }

    /// Takes an item from the pool, manufacturing a new one if none are available.
    ///
    /// The front of the queue (the item released longest ago) is reused first. When the
    /// queue is empty, the factory is invoked exactly once and the fresh item goes
    /// straight to the caller - it is never queued first. Either way,
    /// [`on_acquire`][ItemLifecycle::on_acquire] runs on the item before it is returned.
    ///
    /// Never blocks. The caller is responsible for eventually passing the item to
    /// [`release()`][Self::release]; there is no automatic return on scope exit.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryFailed`] if the queue was empty and the factory could not
    /// construct a new item. The pool itself remains usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Envelope(u32);
    /// impl reuse_pool::Reusable for Envelope {}
    ///
    /// let mut serial = 0;
    /// let mut pool = ReusePool::builder()
    ///     .factory(move || {
    ///         serial += 1;
    ///         Envelope(serial)
    ///     })
    ///     .build();
    ///
    /// let first = pool.acquire()?;
    /// assert_eq!(first.0, 1);
    ///
    /// pool.release(first);
    ///
    /// // Reused, not remanufactured.
    /// let reused = pool.acquire()?;
    /// assert_eq!(reused.0, 1);
    /// # Ok::<(), reuse_pool::FactoryFailed>(())
    /// ```
    pub fn acquire(&mut self) -> Result<T> {
        let mut item = match self.available.pop_front() {
            Some(item) => item,
            None => (self.factory)().map_err(FactoryFailed::new)?,
        };

        self.lifecycle.on_acquire(&mut item);
        Ok(item)
    }

    /// Returns an item to the pool for future reuse.
    ///
    /// The item is [deactivated][Reusable::deactivate], passed to
    /// [`on_release`][ItemLifecycle::on_release], and appended to the back of the queue,
    /// after which it is eligible for a future [`acquire()`][Self::acquire].
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Probe {
    ///     live: bool,
    /// }
    ///
    /// impl reuse_pool::Reusable for Probe {
    ///     fn deactivate(&mut self) {
    ///         self.live = false;
    ///     }
    /// }
    ///
    /// let mut pool = ReusePool::builder().factory(|| Probe { live: true }).build();
    ///
    /// let probe = pool.acquire()?;
    /// pool.release(probe);
    /// assert_eq!(pool.len(), 1);
    ///
    /// // The parked item was deactivated on the way into the queue.
    /// let parked = pool.acquire()?;
    /// assert!(!parked.live);
    /// # Ok::<(), reuse_pool::FactoryFailed>(())
    /// ```
    pub fn release(&mut self, mut item: T) {
        item.deactivate();
        self.lifecycle.on_release(&mut item);
        self.available.push_back(item);
    }

    /// Manufactures `count` items up front and releases each into the queue.
    ///
    /// Every prewarmed item travels the normal release path, so it is deactivated and
    /// receives one [`on_release`][ItemLifecycle::on_release] notification. Use this to
    /// pay construction costs at a convenient time instead of on first demand.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryFailed`] on the first factory failure. Items constructed before
    /// the failure remain in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Crate;
    /// impl reuse_pool::Reusable for Crate {}
    ///
    /// let mut pool = ReusePool::builder().factory(|| Crate).build();
    ///
    /// pool.prewarm(8)?;
    /// assert_eq!(pool.len(), 8);
    /// # Ok::<(), reuse_pool::FactoryFailed>(())
    /// ```
    pub fn prewarm(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let item = (self.factory)().map_err(FactoryFailed::new)?;
            self.release(item);
        }
        Ok(())
    }

    /// The number of items currently available for reuse.
    ///
    /// Items in callers' possession are not counted - the pool does not track them.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Part;
    /// impl reuse_pool::Reusable for Part {}
    ///
    /// let mut pool = ReusePool::builder().factory(|| Part).build();
    /// assert_eq!(pool.len(), 0);
    ///
    /// let part = pool.acquire()?;
    /// assert_eq!(pool.len(), 0);
    ///
    /// pool.release(part);
    /// assert_eq!(pool.len(), 1);
    /// # Ok::<(), reuse_pool::FactoryFailed>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Whether the pool has no items available for reuse.
    ///
    /// An empty pool is not an error state; the next [`acquire()`][Self::acquire] simply
    /// manufactures a fresh item.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Shrinks the queue's backing storage to fit the items currently waiting in it.
    ///
    /// The items themselves are untouched; only excess queue capacity is released.
    #[cfg_attr(test, mutants::skip)] // Capacity release is not observable through the public API.
    pub fn shrink_to_fit(&mut self) {
        self.available.shrink_to_fit();
    }

    /// The [drop policy][DropPolicy] this pool was built with.
    #[must_use]
    #[inline]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }
}

impl<T, L> Drop for ReusePool<T, L>
where
    T: Reusable,
    L: ItemLifecycle<T>,
{
    fn drop(&mut self) {
        if self.drop_policy == DropPolicy::NotifyItems {
            // Direct dequeue: drained items get exactly one on_destroy and no
            // spurious on_acquire. The factory is never involved, so teardown
            // cannot fail.
            while let Some(mut item) = self.available.pop_front() {
                self.lifecycle.on_destroy(&mut item);
            }
        }
    }
}

impl<T, L> fmt::Debug for ReusePool<T, L>
where
    T: Reusable,
    L: ItemLifecycle<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusePool")
            .field("available", &self.available.len())
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}
