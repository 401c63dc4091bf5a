//! # User Actor
//!
//! Owns the user directory. Users have no dependencies; the only action is
//! toggling `is_active`.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](crate::framework::Record) implementation for [`User`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;

use crate::clients::UserClient;
use crate::framework::StoreActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<User>, UserClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
