/// Capability a type must provide to be stored in a [`ReusePool`][crate::ReusePool].
///
/// The pool parks items in a quiescent state while they wait for reuse:
/// [`release()`][crate::ReusePool::release] calls [`deactivate()`][Self::deactivate] on an
/// item before queueing it. The pool never calls [`activate()`][Self::activate] - bringing
/// an acquired item back to life is the caller's decision, typically made once the item has
/// been reconfigured for its next use.
///
/// Both methods default to no-ops, so types with no parked state can opt in with an
/// empty implementation.
///
/// # Examples
///
/// ```
/// use reuse_pool::Reusable;
///
/// struct Particle {
///     visible: bool,
/// }
///
/// impl Reusable for Particle {
///     fn activate(&mut self) {
///         self.visible = true;
///     }
///
///     fn deactivate(&mut self) {
///         self.visible = false;
///     }
/// }
/// ```
pub trait Reusable {
    /// Marks the item as live and ready for use.
    ///
    /// Called by consumers after acquiring an item, never by the pool itself.
    fn activate(&mut self) {}

    /// Marks the item as quiescent while it waits in the pool.
    ///
    /// Called by [`ReusePool::release()`][crate::ReusePool::release] before the item is
    /// queued, ahead of the [`on_release`][crate::ItemLifecycle::on_release] hook.
    fn deactivate(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget {
        active: bool,
    }

    impl Reusable for Widget {
        fn activate(&mut self) {
            self.active = true;
        }

        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    struct Stateless;
    impl Reusable for Stateless {}

    #[test]
    fn activate_and_deactivate_toggle_state() {
        let mut widget = Widget { active: false };

        widget.activate();
        assert!(widget.active);

        widget.deactivate();
        assert!(!widget.active);
    }

    #[test]
    fn default_implementations_are_no_ops() {
        let mut item = Stateless;

        // Nothing observable happens; this merely verifies the defaults are callable.
        item.activate();
        item.deactivate();
    }
}
