//! # Menu Store
//!
//! Menu items live in their own [`ResourceActor<MenuItem>`](record_actor::ResourceActor).
//! Besides CRUD the store supports one action, [`MenuAction::SetAvailable`], which hides or
//! shows an item without deleting it.
//!
//! [`MenuAction::SetAvailable`]: crate::model::MenuAction::SetAvailable

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use record_actor::ResourceActor;

/// Creates the menu store actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, MenuClient::new(client))
}
