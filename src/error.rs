//! Error type shared by the directory stores and their clients.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// Both collaborator implementations report this type, so it is also what
/// [`MentionResolver`](crate::resolver::MentionResolver) returns when backed by
/// the directory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// The requested user or team was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The record already holds the value being added (e.g., a team member).
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The payload was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with a store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for DirectoryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DirectoryError::NotFound(id),
            FrameworkError::Record(inner) => match inner.downcast::<DirectoryError>() {
                Ok(error) => *error,
                Err(other) => DirectoryError::Validation(other.to_string()),
            },
            other => DirectoryError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_errors_survive_the_framework() {
        let wrapped = FrameworkError::Record(Box::new(DirectoryError::AlreadyExists(
            "user_1 in team_1".to_string(),
        )));
        assert_eq!(
            DirectoryError::from(wrapped),
            DirectoryError::AlreadyExists("user_1 in team_1".to_string())
        );
    }

    #[test]
    fn test_channel_errors_become_communication_errors() {
        assert_eq!(
            DirectoryError::from(FrameworkError::ActorClosed),
            DirectoryError::ActorCommunication("Actor closed".to_string())
        );
        assert_eq!(
            DirectoryError::from(FrameworkError::NotFound("team_9".to_string())),
            DirectoryError::NotFound("team_9".to_string())
        );
    }
}
