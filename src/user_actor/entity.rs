//! [`Record`] implementation for the [`User`] model type.

use crate::error::DirectoryError;
use crate::framework::Record;
use crate::model::{User, UserAction, UserCreate, UserId};

impl Record for User {
    type Id = UserId;
    type Create = UserCreate;
    type Action = UserAction;
    type ActionResult = ();
    type Error = DirectoryError;

    /// Creates an active user. Rejects blank names and emails without an `@`.
    fn from_create(id: UserId, params: UserCreate) -> Result<Self, DirectoryError> {
        if params.name.trim().is_empty() {
            return Err(DirectoryError::Validation("user name is empty".to_string()));
        }
        if !params.email.contains('@') {
            return Err(DirectoryError::Validation(format!(
                "invalid email: {}",
                params.email
            )));
        }
        Ok(Self::new(id, params.name, params.email))
    }

    fn handle_action(&mut self, action: UserAction) -> Result<(), DirectoryError> {
        match action {
            UserAction::SetActive(is_active) => self.is_active = is_active,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: &str) -> UserCreate {
        UserCreate {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_create_validates_payload() {
        let user = User::from_create(UserId(1), params("Alice", "alice@example.com")).unwrap();
        assert!(user.is_active);
        assert_eq!(user.id, UserId(1));

        assert!(matches!(
            User::from_create(UserId(2), params(" ", "bob@example.com")),
            Err(DirectoryError::Validation(_))
        ));
        assert!(matches!(
            User::from_create(UserId(3), params("Carol", "carol")),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn test_set_active() {
        let mut user = User::new(UserId(1), "Alice", "alice@example.com");
        user.handle_action(UserAction::SetActive(false)).unwrap();
        assert!(!user.is_active);
    }
}
