//! Integration tests for the `reuse_pool` package.
//!
//! These exercise the pool the way an owning simulation would: a factory tied to a
//! container, a lifecycle strategy that wires items to a return channel, and teardown
//! under both drop policies.

use std::cell::Cell;
use std::rc::Rc;

use reuse_pool::{
    DropPolicy, ItemLifecycle, ReturnQueue, ReturnSender, ReusePool, Reusable,
};

/// A pooled item in the style of a spawned simulation object: it knows whether it is
/// live and how to hand itself back when retired.
#[derive(Debug)]
struct Product {
    serial: u32,
    visible: bool,
    return_to: Option<ReturnSender<Product>>,
}

impl Reusable for Product {
    fn activate(&mut self) {
        self.visible = true;
    }

    fn deactivate(&mut self) {
        self.visible = false;
    }
}

impl Product {
    /// Retires the item, sending it back through its return channel if one is installed.
    fn retire(mut self) {
        if let Some(sender) = self.return_to.take() {
            sender.send(self);
        }
    }
}

/// Lifecycle strategy that installs the return channel on acquire and removes it again
/// on release and destroy, counting every transition.
#[derive(Clone)]
struct Routing {
    returns: ReturnQueue<Product>,
    acquires: Rc<Cell<u32>>,
    releases: Rc<Cell<u32>>,
    destroys: Rc<Cell<u32>>,
}

impl Routing {
    fn new(returns: ReturnQueue<Product>) -> Self {
        Self {
            returns,
            acquires: Rc::new(Cell::new(0)),
            releases: Rc::new(Cell::new(0)),
            destroys: Rc::new(Cell::new(0)),
        }
    }

    fn bump(counter: &Cell<u32>) {
        counter.set(counter.get().checked_add(1).expect("test counters stay small"));
    }
}

impl ItemLifecycle<Product> for Routing {
    fn on_acquire(&mut self, item: &mut Product) {
        item.return_to = Some(self.returns.sender());
        Self::bump(&self.acquires);
    }

    fn on_release(&mut self, item: &mut Product) {
        item.return_to = None;
        Self::bump(&self.releases);
    }

    fn on_destroy(&mut self, item: &mut Product) {
        item.return_to = None;
        Self::bump(&self.destroys);
    }
}

fn product_pool(
    drop_policy: DropPolicy,
) -> (ReusePool<Product, Routing>, ReturnQueue<Product>, Routing) {
    let returns = ReturnQueue::new();
    let routing = Routing::new(returns.clone());
    let mut serial = 0;

    let pool = ReusePool::builder()
        .factory(move || {
            serial += 1;
            Product {
                serial,
                visible: false,
                return_to: None,
            }
        })
        .lifecycle(routing.clone())
        .drop_policy(drop_policy)
        .build();

    (pool, returns, routing)
}

#[test]
fn full_spawn_retire_cycle() {
    let (mut pool, returns, routing) = product_pool(DropPolicy::default());

    // Spawn three products; each gets a return channel on the way out.
    let mut spawned = Vec::new();
    for _ in 0..3 {
        let mut product = pool.acquire().expect("factory is infallible");
        product.activate();
        assert!(product.return_to.is_some());
        spawned.push(product);
    }
    assert_eq!(routing.acquires.get(), 3);
    assert!(pool.is_empty());

    // Consumers retire them without touching the pool.
    for product in spawned {
        product.retire();
    }
    assert_eq!(returns.len(), 3);

    // The owner drains them back; each travels the normal release path.
    assert_eq!(returns.drain_into(&mut pool), 3);
    assert_eq!(pool.len(), 3);
    assert_eq!(routing.releases.get(), 3);

    // Reuse happens in retirement order, and parked items came back quiescent.
    let first = pool.acquire().expect("queued");
    assert_eq!(first.serial, 1);
    assert!(!first.visible);
}

#[test]
fn reuse_does_not_grow_the_population() {
    let (mut pool, returns, _routing) = product_pool(DropPolicy::default());

    let mut highest_serial = 0;
    for _ in 0..10 {
        let product = pool.acquire().expect("factory is infallible");
        highest_serial = highest_serial.max(product.serial);
        product.retire();
        returns.drain_into(&mut pool);
    }

    // One instance served all ten cycles.
    assert_eq!(highest_serial, 1);
}

#[test]
fn subscriptions_do_not_leak_across_cycles() {
    let (mut pool, returns, _routing) = product_pool(DropPolicy::default());

    let product = pool.acquire().expect("factory is infallible");
    product.retire();
    returns.drain_into(&mut pool);

    // While parked, the item must hold no return channel.
    let parked = pool.acquire().expect("queued");
    let reacquired_sender = parked.return_to.as_ref().expect("reinstalled on acquire");
    assert!(reacquired_sender.is_connected());
}

#[test]
fn teardown_notifies_exactly_the_parked_items() {
    let (mut pool, _returns, routing) = product_pool(DropPolicy::NotifyItems);

    pool.prewarm(4).expect("factory is infallible");
    let held = pool.acquire().expect("queued");

    drop(pool);

    // Three items were still parked; the held one was not the pool's to destroy.
    assert_eq!(routing.destroys.get(), 3);
    assert!(held.return_to.is_some());
}

#[test]
fn teardown_without_notification_leaves_no_trace() {
    let (mut pool, _returns, routing) = product_pool(DropPolicy::DiscardItems);

    pool.prewarm(4).expect("factory is infallible");
    let releases_before = routing.releases.get();

    drop(pool);

    assert_eq!(routing.destroys.get(), 0);
    assert_eq!(routing.releases.get(), releases_before);
}

#[test]
fn retiring_after_pool_and_queue_are_gone_is_harmless() {
    let (mut pool, returns, routing) = product_pool(DropPolicy::default());

    let product = pool.acquire().expect("factory is infallible");
    let sender = product.return_to.as_ref().expect("installed on acquire").clone();

    // The pool's lifecycle strategy holds a queue handle too, so all three must go.
    drop(pool);
    drop(routing);
    drop(returns);

    // The sender is disconnected, so this quietly drops the product.
    assert!(!sender.is_connected());
    product.retire();
}

#[test]
fn factory_failure_surfaces_through_the_public_api() {
    let mut pool = ReusePool::builder()
        .try_factory(|| Err::<Product, _>("mold is offline".into()))
        .build();

    let error = pool.acquire().expect_err("factory always fails");

    let source = std::error::Error::source(&error).expect("factory error is preserved");
    assert_eq!(source.to_string(), "mold is offline");
}
