use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::{ItemLifecycle, ReusePool, Reusable};

/// A single-threaded channel through which retired items find their way back to the pool
/// that owns them.
///
/// Consumers that finish with an item often have no access to the pool it came from. A
/// `ReturnQueue` decouples the two: items carry a [`ReturnSender`] installed by the pool's
/// lifecycle strategy on acquire (and removed again on release), the consumer sends the
/// item into the queue when it retires, and the pool's owner periodically drains the queue
/// back into the pool with [`drain_into()`][Self::drain_into].
///
/// Installing the sender in [`on_acquire`][ItemLifecycle::on_acquire] and clearing it in
/// [`on_release`][ItemLifecycle::on_release] and [`on_destroy`][ItemLifecycle::on_destroy]
/// keeps the subscription symmetric, so no item ever holds a sender while parked in the
/// queue.
///
/// # Examples
///
/// ```
/// use reuse_pool::{ItemLifecycle, ReturnQueue, ReturnSender, ReusePool};
///
/// struct Courier {
///     return_to: Option<ReturnSender<Courier>>,
/// }
/// impl reuse_pool::Reusable for Courier {}
///
/// struct Dispatch {
///     returns: ReturnQueue<Courier>,
/// }
///
/// impl ItemLifecycle<Courier> for Dispatch {
///     fn on_acquire(&mut self, item: &mut Courier) {
///         item.return_to = Some(self.returns.sender());
///     }
///
///     fn on_release(&mut self, item: &mut Courier) {
///         item.return_to = None;
///     }
///
///     fn on_destroy(&mut self, item: &mut Courier) {
///         item.return_to = None;
///     }
/// }
///
/// let returns = ReturnQueue::new();
/// let mut pool = ReusePool::builder()
///     .factory(|| Courier { return_to: None })
///     .lifecycle(Dispatch {
///         returns: returns.clone(),
///     })
///     .build();
///
/// // A consumer retires the item without ever seeing the pool.
/// let mut courier = pool.acquire()?;
/// let sender = courier.return_to.take().expect("installed on acquire");
/// sender.send(courier);
///
/// // The owner drains retired items back into the pool.
/// assert_eq!(returns.drain_into(&mut pool), 1);
/// assert_eq!(pool.len(), 1);
/// # Ok::<(), reuse_pool::FactoryFailed>(())
/// ```
///
/// # Thread safety
///
/// Strictly single-threaded: the queue is reference-counted without synchronization, and
/// all endpoints must live on the thread that created it.
pub struct ReturnQueue<T> {
    items: Rc<RefCell<VecDeque<T>>>,
}

impl<T> ReturnQueue<T> {
    /// Creates a new, empty return queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Creates a sender endpoint that retired items can travel through.
    ///
    /// Senders hold only a weak reference: once every `ReturnQueue` handle is dropped,
    /// sends become silent no-ops and the sent items are dropped.
    #[must_use]
    pub fn sender(&self) -> ReturnSender<T> {
        ReturnSender {
            items: Rc::downgrade(&self.items),
        }
    }

    /// The number of retired items waiting to be drained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether any retired items are waiting to be drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Releases every waiting item into the given pool, in the order the items were sent.
    ///
    /// Each item travels the pool's normal [`release()`][ReusePool::release] path, so it
    /// is deactivated and receives an [`on_release`][ItemLifecycle::on_release]
    /// notification. Items sent into the queue while draining is in progress (for example
    /// from within a lifecycle hook) are drained in the same call.
    ///
    /// Returns the number of items released.
    pub fn drain_into<L>(&self, pool: &mut ReusePool<T, L>) -> usize
    where
        T: Reusable,
        L: ItemLifecycle<T>,
    {
        let mut released = 0_usize;
        loop {
            // The borrow must end before release() runs, as hooks may send again.
            let next = self.items.borrow_mut().pop_front();
            let Some(item) = next else {
                break;
            };

            pool.release(item);
            released = released
                .checked_add(1)
                .expect("released count is bounded by the number of items that fit in memory");
        }
        released
    }
}

impl<T> Default for ReturnQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ReturnQueue<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> fmt::Debug for ReturnQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturnQueue")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// The sending endpoint of a [`ReturnQueue`].
///
/// Cloneable and cheap; items typically carry one in an `Option` slot while acquired.
/// Sending moves the item into the queue by value. If every [`ReturnQueue`] handle has
/// been dropped, the sent item is dropped instead - retiring an item whose owner is gone
/// is not an error.
pub struct ReturnSender<T> {
    items: Weak<RefCell<VecDeque<T>>>,
}

impl<T> ReturnSender<T> {
    /// Sends a retired item back to the queue, or drops it if the queue is gone.
    pub fn send(&self, item: T) {
        if let Some(items) = self.items.upgrade() {
            items.borrow_mut().push_back(item);
        }
    }

    /// Whether the queue this sender feeds still exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.items.strong_count() > 0
    }
}

impl<T> Clone for ReturnSender<T> {
    fn clone(&self) -> Self {
        Self {
            items: Weak::clone(&self.items),
        }
    }
}

impl<T> fmt::Debug for ReturnSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturnSender")
            .field("is_connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
