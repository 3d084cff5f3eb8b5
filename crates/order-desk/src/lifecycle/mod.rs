//! # Shop Lifecycle
//!
//! Starting, wiring and stopping the shop.
//!
//! - [`ShopSystem`] creates the order and menu store actors, spawns them, and hands the order
//!   store client to the [`OrderDesk`].
//! - [`OrderDesk`] is the only owner of the active queue. Every change to the queue goes
//!   through `&mut OrderDesk`, so no lock is needed; a multi-terminal setup would have to put
//!   the desk behind a single owner (a mutex or its own actor).
//! - [`setup_tracing`] configures logging.
//!
//! ## Shutdown
//!
//! 1. Drop the desk and the menu client, closing the store channels
//! 2. Each store actor sees `recv()` return `None` and exits its loop
//! 3. Await the store tasks
//!
//! The stores do not depend on each other, so the order does not matter.

pub mod desk;
pub mod system;
pub mod tracing;

pub use desk::*;
pub use system::*;
pub use self::tracing::setup_tracing;
