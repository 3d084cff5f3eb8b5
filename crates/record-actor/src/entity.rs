//! # ActorEntity Trait
//!
//! Every record kind kept by a [`ResourceActor`](crate::ResourceActor) (orders, menu items, …)
//! implements [`ActorEntity`]. The trait names the identifier, the create/update payloads, the
//! custom actions and the error type of the record, and exposes async lifecycle hooks the actor
//! calls around each request.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after the record is built and before it is stored.
//! - [`ActorEntity::on_delete`] runs before the record is removed.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Contract for a record managed by a `ResourceActor`.
///
/// # Identifiers
/// Ids are generated by the actor from a `u32` counter starting at 1, so `Id` must be
/// constructible from `u32`. Ids are also `Ord`: the actor keeps records keyed by id, and
/// since ids are handed out sequentially, listing records in id order lists them in the
/// order they were created.
///
/// # Context
/// `Context` is injected into every hook when the actor starts (`run(context)`), so records
/// can reach other clients without holding them.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The record identifier (e.g. `OrderId`).
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a record.
    type Create: Send + Sync + Debug;

    /// Payload used to update a record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error type for this record kind.
    ///
    /// One enum per record kind, not one per message: every hook of the record returns the
    /// same error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from the generated id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    /// Returning an error rejects the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update. The actor calls this on a working copy and only stores the copy when
    /// the hook succeeds, so a rejected update leaves the stored record as it was.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
