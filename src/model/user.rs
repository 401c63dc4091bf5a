use crate::model::UserId;

/// A registered user in the directory.
///
/// # Store Framework
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be managed by a [`StoreActor`](crate::framework::StoreActor).
/// See `user_actor::entity` for the creation payload and actions.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Account status, for whoever delivers notifications. Mention resolution
    /// ignores it; team seats are switched off through
    /// [`TeamMembership::is_active`](crate::model::TeamMembership).
    pub is_active: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Actions supported by the user store.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    SetActive(bool),
}

impl User {
    /// Creates an active user.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_active: true,
        }
    }
}
