use std::fmt;

use crate::pool::BoxedFactory;
use crate::{DropPolicy, ItemLifecycle, ReusePool, Reusable};

/// Builder for creating an instance of [`ReusePool`].
///
/// [`ReusePool`] requires an item factory to be specified at construction time. Use either
/// [`factory()`][Self::factory] for infallible construction or
/// [`try_factory()`][Self::try_factory] when construction can fail.
///
/// The factory is mandatory, whereas the lifecycle strategy and drop policy are optional.
///
/// # Examples
///
/// Using an infallible factory:
///
/// ```
/// use reuse_pool::ReusePool;
///
/// struct Carton {
///     contents: Vec<u8>,
/// }
/// impl reuse_pool::Reusable for Carton {}
///
/// let pool = ReusePool::builder()
///     .factory(|| Carton {
///         contents: Vec::with_capacity(64),
///     })
///     .build();
/// ```
///
/// Using a fallible factory:
///
/// ```
/// use reuse_pool::ReusePool;
///
/// struct Carton;
/// impl reuse_pool::Reusable for Carton {}
///
/// let pool = ReusePool::builder()
///     .try_factory(|| {
///         // Anything that can produce a boxed error works here.
///         Ok(Carton)
///     })
///     .build();
/// ```
///
/// # Thread safety
///
/// The builder is thread-mobile ([`Send`]) and can be safely transferred between threads,
/// allowing pool configuration to happen on a different thread than where the pool is
/// used; factories are required to be [`Send`] for this reason. The builder is not
/// thread-safe ([`Sync`]) as it contains mutable configuration state.
#[must_use]
pub struct ReusePoolBuilder<T, L = ()> {
    factory: Option<BoxedFactory<T>>,
    lifecycle: L,
    drop_policy: DropPolicy,
}

impl<T> ReusePoolBuilder<T, ()> {
    pub(crate) fn new() -> Self {
        Self {
            factory: None,
            lifecycle: (),
            drop_policy: DropPolicy::default(),
        }
    }
}

impl<T, L> ReusePoolBuilder<T, L> {
    /// Sets the factory used to construct new items when the pool has none available.
    ///
    /// The factory typically captures whatever container or context newly built items
    /// belong to; the pool itself never inspects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Label(u32);
    /// impl reuse_pool::Reusable for Label {}
    ///
    /// let mut next = 0;
    /// let pool = ReusePool::builder()
    ///     .factory(move || {
    ///         next += 1;
    ///         Label(next)
    ///     })
    ///     .build();
    /// ```
    #[inline]
    pub fn factory<F>(mut self, mut factory: F) -> Self
    where
        F: FnMut() -> T + Send + 'static,
    {
        self.factory = Some(Box::new(move || Ok(factory())));
        self
    }

    /// Sets a fallible factory used to construct new items when the pool has none
    /// available.
    ///
    /// A factory error surfaces from [`acquire()`][ReusePool::acquire] as
    /// [`FactoryFailed`][crate::FactoryFailed] with the returned error as its source.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Slot;
    /// impl reuse_pool::Reusable for Slot {}
    ///
    /// let mut remaining = 3_u32;
    /// let pool = ReusePool::builder()
    ///     .try_factory(move || {
    ///         if remaining == 0 {
    ///             return Err("slot budget exhausted".into());
    ///         }
    ///         remaining -= 1;
    ///         Ok(Slot)
    ///     })
    ///     .build();
    /// ```
    #[inline]
    pub fn try_factory<F>(mut self, factory: F) -> Self
    where
        F: FnMut() -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>
            + Send
            + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Sets the lifecycle strategy whose hooks the pool invokes as items are acquired,
    /// released and destroyed.
    ///
    /// Without this, the pool uses the no-op lifecycle `()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::{ItemLifecycle, ReusePool};
    ///
    /// struct Tag;
    /// impl reuse_pool::Reusable for Tag {}
    ///
    /// struct Audit;
    /// impl ItemLifecycle<Tag> for Audit {}
    ///
    /// let pool = ReusePool::builder().factory(|| Tag).lifecycle(Audit).build();
    /// ```
    #[inline]
    pub fn lifecycle<L2>(self, lifecycle: L2) -> ReusePoolBuilder<T, L2>
    where
        L2: ItemLifecycle<T>,
    {
        ReusePoolBuilder {
            factory: self.factory,
            lifecycle,
            drop_policy: self.drop_policy,
        }
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how to treat items
    /// still waiting in the queue when the pool is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::{DropPolicy, ReusePool};
    ///
    /// struct Tag;
    /// impl reuse_pool::Reusable for Tag {}
    ///
    /// let pool = ReusePool::builder()
    ///     .factory(|| Tag)
    ///     .drop_policy(DropPolicy::NotifyItems)
    ///     .build();
    /// ```
    #[inline]
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration.
    ///
    /// # Panics
    ///
    /// Panics if no factory has been set using either [`factory()`][Self::factory] or
    /// [`try_factory()`][Self::try_factory].
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::ReusePool;
    ///
    /// struct Tag;
    /// impl reuse_pool::Reusable for Tag {}
    ///
    /// let pool = ReusePool::builder().factory(|| Tag).build();
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn build(self) -> ReusePool<T, L>
    where
        T: Reusable,
        L: ItemLifecycle<T>,
    {
        let factory = self.factory.expect(
            "factory must be set using .factory() or .try_factory() before calling .build()",
        );
        ReusePool::new_inner(factory, self.lifecycle, self.drop_policy)
    }
}

impl<T, L> fmt::Debug for ReusePoolBuilder<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusePoolBuilder")
            .field("factory", &self.factory.as_ref().map(|_| "FnMut"))
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    struct TestItem;
    impl Reusable for TestItem {}

    // Test trait implementations.
    assert_impl_all!(ReusePoolBuilder<TestItem>: Send, Debug);
    assert_not_impl_any!(ReusePoolBuilder<TestItem>: Sync);

    #[test]
    fn builder_new_creates_default_state() {
        let builder = ReusePoolBuilder::<TestItem>::new();
        assert!(builder.factory.is_none());
        assert_eq!(builder.drop_policy, DropPolicy::default());
    }

    #[test]
    fn factory_sets_factory() {
        let builder = ReusePoolBuilder::new().factory(|| TestItem);
        assert!(builder.factory.is_some());
    }

    #[test]
    fn try_factory_sets_factory() {
        let builder = ReusePoolBuilder::new().try_factory(|| Ok(TestItem));
        assert!(builder.factory.is_some());
    }

    #[test]
    fn drop_policy_sets_policy_correctly() {
        let builder = ReusePoolBuilder::<TestItem>::new().drop_policy(DropPolicy::NotifyItems);
        assert_eq!(builder.drop_policy, DropPolicy::NotifyItems);

        let builder = ReusePoolBuilder::<TestItem>::new().drop_policy(DropPolicy::DiscardItems);
        assert_eq!(builder.drop_policy, DropPolicy::DiscardItems);
    }

    #[test]
    fn drop_policy_can_be_overridden() {
        let builder = ReusePoolBuilder::<TestItem>::new()
            .drop_policy(DropPolicy::NotifyItems)
            .drop_policy(DropPolicy::DiscardItems);
        assert_eq!(builder.drop_policy, DropPolicy::DiscardItems);
    }

    #[test]
    fn lifecycle_is_carried_through_chaining() {
        struct Marker;
        impl ItemLifecycle<TestItem> for Marker {}

        let builder = ReusePoolBuilder::new()
            .factory(|| TestItem)
            .lifecycle(Marker)
            .drop_policy(DropPolicy::NotifyItems);

        assert!(builder.factory.is_some());
        assert_eq!(builder.drop_policy, DropPolicy::NotifyItems);
    }

    #[test]
    fn build_with_factory_succeeds() {
        let pool = ReusePoolBuilder::new().factory(|| TestItem).build();
        assert!(pool.is_empty());
    }

    #[test]
    #[should_panic]
    fn build_without_factory_panics() {
        let _pool = ReusePoolBuilder::<TestItem>::new().build();
    }

    #[test]
    #[should_panic]
    fn build_with_only_drop_policy_panics() {
        let _pool = ReusePoolBuilder::<TestItem>::new()
            .drop_policy(DropPolicy::NotifyItems)
            .build();
    }

    #[test]
    fn builder_chain_order_independence() {
        let pool1 = ReusePoolBuilder::new()
            .factory(|| TestItem)
            .drop_policy(DropPolicy::NotifyItems)
            .build();

        let pool2 = ReusePoolBuilder::new()
            .drop_policy(DropPolicy::NotifyItems)
            .factory(|| TestItem)
            .build();

        assert_eq!(pool1.len(), pool2.len());
    }

    #[test]
    fn builder_can_move_between_threads() {
        let builder = ReusePoolBuilder::new().factory(|| TestItem);
        let handle = std::thread::spawn(move || builder.build());
        let pool = handle.join().expect("thread completed successfully");
        assert!(pool.is_empty());
    }

    #[test]
    fn builder_is_debug() {
        let builder = ReusePoolBuilder::new().factory(|| TestItem);
        let debug_output = format!("{builder:?}");
        assert!(debug_output.contains("ReusePoolBuilder"));
    }
}
