use crate::model::{OrganizationId, TeamId, UserId};
use std::collections::BTreeSet;

/// A team within an organization.
///
/// # Store Framework
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be managed by a [`StoreActor`](crate::framework::StoreActor).
/// See `team_actor::entity` for the creation payload and actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub organization_id: OrganizationId,
    pub slug: String,
    pub members: Vec<TeamMembership>,
}

/// A user's seat on a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMembership {
    pub user_id: UserId,
    pub is_active: bool,
}

/// Payload for creating a new team.
#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub organization_id: OrganizationId,
    pub slug: String,
}

/// Actions supported by the team store.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamAction {
    AddMember(UserId),
    RemoveMember(UserId),
    SetMemberActive { user_id: UserId, is_active: bool },
    /// Active members, if the team belongs to `organization_id`, minus `exclude`.
    Members {
        organization_id: OrganizationId,
        exclude: BTreeSet<UserId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeamActionResult {
    Updated,
    Members(Vec<UserId>),
}

impl Team {
    /// Creates a team with no members.
    pub fn new(id: TeamId, organization_id: OrganizationId, slug: impl Into<String>) -> Self {
        Self {
            id,
            organization_id,
            slug: slug.into(),
            members: Vec::new(),
        }
    }

    /// Adds active memberships for `user_ids`.
    pub fn with_members(mut self, user_ids: impl IntoIterator<Item = UserId>) -> Self {
        self.members.extend(user_ids.into_iter().map(|user_id| TeamMembership {
            user_id,
            is_active: true,
        }));
        self
    }

    pub fn membership_mut(&mut self, user_id: UserId) -> Option<&mut TeamMembership> {
        self.members.iter_mut().find(|m| m.user_id == user_id)
    }
}
