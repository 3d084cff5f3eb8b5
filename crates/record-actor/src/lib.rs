//! # Record Actor
//!
//! A small record store built on the actor model: each record kind gets one Tokio task that
//! owns its records and answers create / get / update / delete / action / list requests over
//! a channel. The order desk uses it as its persistence collaborator: orders and menu items
//! each live in their own actor.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the record type, its payloads and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): the request loop and the id-ordered record map.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls that return
//!    [`FrameworkError`] when the actor is unreachable or rejects the request.
//!
//! ## Concurrency Model
//!
//! - One actor per record kind, each on its own task.
//! - Requests to one actor are processed strictly in arrival order, so the record map needs
//!   no lock.
//! - Clients are cheap clones of a channel sender; dropping the last one stops the actor.
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)` rather than `new()`, so actors can be created
//! first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a list of expectations, which makes store
//! failures easy to inject. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
