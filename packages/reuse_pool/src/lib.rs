//! A FIFO object reuse pool with caller-supplied lifecycle hooks.
//!
//! This crate provides [`ReusePool`], a single-threaded pool that amortizes the cost of
//! constructing expensive objects by handing previously built instances back out in the
//! order they were returned. When no instance is available, the pool manufactures exactly
//! one via a caller-supplied factory and gives it straight to the caller.
//!
//! # Key features
//!
//! - **FIFO reuse**: the item released longest ago is the next one handed out
//! - **On-demand manufacturing**: an empty pool is not an error, just a factory call
//! - **Lifecycle hooks**: an [`ItemLifecycle`] strategy observes every acquire, release
//!   and destroy transition
//! - **Activatable items**: the [`Reusable`] capability lets the pool park items in a
//!   quiescent state while they wait
//! - **Configurable teardown**: [`DropPolicy`] controls whether queued items are notified
//!   when the pool is dropped
//! - **Return channel**: [`ReturnQueue`] lets consumers retire items without access to
//!   the pool that owns them
//! - **No double-checkout by construction**: items move between the queue and the caller,
//!   so an item can never be in both places or queued twice
//!
//! # Examples
//!
//! ```rust
//! use reuse_pool::{ItemLifecycle, ReusePool, Reusable};
//!
//! struct Product {
//!     defective: bool,
//!     visible: bool,
//! }
//!
//! impl Reusable for Product {
//!     fn activate(&mut self) {
//!         self.visible = true;
//!     }
//!
//!     fn deactivate(&mut self) {
//!         self.visible = false;
//!     }
//! }
//!
//! let mut pool = ReusePool::builder()
//!     .factory(|| Product {
//!         defective: false,
//!         visible: false,
//!     })
//!     .build();
//!
//! // First acquire manufactures; the caller decides when the item goes live.
//! let mut product = pool.acquire()?;
//! product.defective = true;
//! product.activate();
//!
//! // Returning the item parks it for reuse.
//! pool.release(product);
//! assert_eq!(pool.len(), 1);
//!
//! // The same instance comes back out, deactivated, ready to be reconfigured.
//! let recycled = pool.acquire()?;
//! assert!(!recycled.visible);
//! assert!(recycled.defective); // Reconfiguration is the caller's job.
//! # Ok::<(), reuse_pool::FactoryFailed>(())
//! ```
//!
//! # Thread safety
//!
//! Pools and builders are thread-mobile: a [`ReusePool`] is [`Send`] when its items and
//! lifecycle are, and every factory is required to be [`Send`]. Nothing here is [`Sync`] -
//! pool operations take `&mut self` and complete synchronously, so a pool embedded in a
//! multi-threaded host needs external synchronization with exclusive ownership per
//! instance. The [`ReturnQueue`] channel is reference-counted without synchronization and
//! is strictly single-threaded.

mod builder;
mod drop_policy;
mod error;
mod lifecycle;
mod pool;
mod returns;
mod reusable;

pub use builder::*;
pub use drop_policy::*;
pub use error::FactoryFailed;
pub use lifecycle::*;
pub use pool::ReusePool;
pub use returns::*;
pub use reusable::*;
