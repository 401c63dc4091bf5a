//! # Team Actor
//!
//! Owns the team directory: which teams exist, the organization each belongs
//! to, and their memberships. Membership queries are answered here, so the
//! organization scope and the exclusion set are applied before results leave
//! the store.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](crate::framework::Record) implementation for [`Team`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;

use crate::clients::TeamClient;
use crate::framework::StoreActor;
use crate::model::Team;

/// Creates a new Team actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Team>, TeamClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, TeamClient::new(generic_client))
}
