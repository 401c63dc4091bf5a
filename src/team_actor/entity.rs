//! [`Record`] implementation for the [`Team`] model type.

use crate::error::DirectoryError;
use crate::framework::Record;
use crate::model::{Team, TeamAction, TeamActionResult, TeamCreate, TeamId, TeamMembership};
use tracing::debug;

impl Record for Team {
    type Id = TeamId;
    type Create = TeamCreate;
    type Action = TeamAction;
    type ActionResult = TeamActionResult;
    type Error = DirectoryError;

    fn from_create(id: TeamId, params: TeamCreate) -> Result<Self, DirectoryError> {
        if params.slug.trim().is_empty() {
            return Err(DirectoryError::Validation("team slug is empty".to_string()));
        }
        Ok(Self::new(id, params.organization_id, params.slug))
    }

    /// Handles membership changes and membership queries.
    ///
    /// # Errors
    /// - `AddMember` for an existing member: [`DirectoryError::AlreadyExists`]
    /// - `RemoveMember` / `SetMemberActive` for a non-member: [`DirectoryError::NotFound`]
    ///
    /// `Members` never fails: a team outside the requested organization has no
    /// members as far as that organization is concerned.
    fn handle_action(&mut self, action: TeamAction) -> Result<TeamActionResult, DirectoryError> {
        match action {
            TeamAction::AddMember(user_id) => {
                if self.membership_mut(user_id).is_some() {
                    return Err(DirectoryError::AlreadyExists(format!(
                        "{} in {}",
                        user_id, self.id
                    )));
                }
                self.members.push(TeamMembership {
                    user_id,
                    is_active: true,
                });
                Ok(TeamActionResult::Updated)
            }
            TeamAction::RemoveMember(user_id) => {
                let before = self.members.len();
                self.members.retain(|m| m.user_id != user_id);
                if self.members.len() == before {
                    return Err(DirectoryError::NotFound(format!("{} in {}", user_id, self.id)));
                }
                Ok(TeamActionResult::Updated)
            }
            TeamAction::SetMemberActive { user_id, is_active } => {
                let team_id = self.id;
                let membership = self
                    .membership_mut(user_id)
                    .ok_or_else(|| DirectoryError::NotFound(format!("{} in {}", user_id, team_id)))?;
                membership.is_active = is_active;
                Ok(TeamActionResult::Updated)
            }
            TeamAction::Members {
                organization_id,
                exclude,
            } => {
                if organization_id != self.organization_id {
                    debug!(team_id = %self.id, %organization_id, "Team outside organization");
                    return Ok(TeamActionResult::Members(Vec::new()));
                }
                let members = self
                    .members
                    .iter()
                    .filter(|m| m.is_active && !exclude.contains(&m.user_id))
                    .map(|m| m.user_id)
                    .collect();
                Ok(TeamActionResult::Members(members))
            }
        }
    }
}
