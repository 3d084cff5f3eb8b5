//! # Order Store
//!
//! The order record store: a [`ResourceActor<Order>`](record_actor::ResourceActor) that keeps
//! every order the desk has saved, in save order.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](record_actor::ActorEntity) implementation for
//!   [`Order`](crate::model::Order)
//! - [`error`]: [`StoreError`]
//! - [`new()`]: creates the actor and its [`OrderStoreClient`]
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::model::{LineItem, Order};
//! use order_desk::order_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = order_store::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let latte = LineItem::new("LAT", "Latte", "", 1, 4.50);
//!     let order = Order::new("A001", Some("Alex"), vec![latte], 0.08);
//!     let id = store.save_order(order).await?;
//!     assert_eq!(store.load_active_orders().await?.len(), 1);
//!     println!("saved {id}");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderStoreClient;
use crate::model::Order;
use record_actor::ResourceActor;

/// Creates the order store actor and its client. `buffer` is the request channel size.
pub fn new(buffer: usize) -> (ResourceActor<Order>, OrderStoreClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, OrderStoreClient::new(client))
}
