//! # Order Desk
//!
//! Order intake and fulfilment for a single counter: staff build orders from a cart, a bounded
//! queue holds the orders waiting to be served, and each order moves through
//! `PENDING → IN_PROGRESS → COMPLETED` until it is paid.
//!
//! - [`queue`]: the active queue, a fixed ring of 50 slots.
//! - [`lifecycle`]: [`OrderDesk`](lifecycle::OrderDesk), which admits, serves and settles
//!   orders, and [`ShopSystem`](lifecycle::ShopSystem), which runs the stores.
//! - [`search`] and [`sort`]: linear search and in-place insertion/selection sort over queue
//!   snapshots, order history and the menu.
//! - [`model`]: orders, the status machine, menu items, the cart, order codes.
//! - [`order_store`], [`menu_store`], [`clients`]: record stores built on
//!   [`record_actor`].
//! - [`config`]: layered settings.

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod menu_store;
pub mod model;
pub mod order_store;
pub mod queue;
pub mod search;
pub mod sort;

pub use error::DeskError;
