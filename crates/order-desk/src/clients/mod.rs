//! Typed clients for the record stores. Each wraps a `ResourceClient` and implements
//! [`ActorClient`](record_actor::ActorClient) for `get`, `delete` and `list`.

pub mod menu_client;
pub mod order_store_client;

pub use menu_client::MenuClient;
pub use order_store_client::OrderStoreClient;
