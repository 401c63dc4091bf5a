//! # Team Client
//!
//! Provides a high‑level API for the team directory, and answers membership
//! queries for [`MentionResolver`](crate::resolver::MentionResolver).
use crate::clients::DirectoryClient;
use crate::error::DirectoryError;
use crate::framework::StoreClient;
use crate::model::{
    OrganizationId, Team, TeamAction, TeamActionResult, TeamCreate, TeamId, UserId,
};
use crate::resolver::TeamMembershipProvider;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Client for interacting with the Team actor.
#[derive(Clone)]
pub struct TeamClient {
    inner: StoreClient<Team>,
}

impl TeamClient {
    pub fn new(inner: StoreClient<Team>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_team(&self, params: TeamCreate) -> Result<TeamId, DirectoryError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_member(&self, team_id: TeamId, user_id: UserId) -> Result<(), DirectoryError> {
        self.update(team_id, TeamAction::AddMember(user_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
    ) -> Result<(), DirectoryError> {
        self.update(team_id, TeamAction::RemoveMember(user_id)).await
    }

    #[instrument(skip(self))]
    pub async fn set_member_active(
        &self,
        team_id: TeamId,
        user_id: UserId,
        is_active: bool,
    ) -> Result<(), DirectoryError> {
        self.update(team_id, TeamAction::SetMemberActive { user_id, is_active })
            .await
    }

    /// Active members of `team_id` within `organization_id`, minus `exclude`.
    #[instrument(skip(self, exclude), fields(excluded = exclude.len()))]
    pub async fn members(
        &self,
        team_id: TeamId,
        organization_id: OrganizationId,
        exclude: BTreeSet<UserId>,
    ) -> Result<Vec<UserId>, DirectoryError> {
        debug!("Sending request");
        let action = TeamAction::Members {
            organization_id,
            exclude,
        };
        match self.inner.perform_action(team_id, action).await? {
            TeamActionResult::Members(members) => Ok(members),
            other => Err(unexpected(other)),
        }
    }

    async fn update(&self, team_id: TeamId, action: TeamAction) -> Result<(), DirectoryError> {
        debug!(?action, "Sending request");
        match self.inner.perform_action(team_id, action).await? {
            TeamActionResult::Updated => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: TeamActionResult) -> DirectoryError {
    DirectoryError::ActorCommunication(format!("unexpected team action result: {:?}", result))
}

#[async_trait]
impl DirectoryClient<Team> for TeamClient {
    fn inner(&self) -> &StoreClient<Team> {
        &self.inner
    }
}

#[async_trait]
impl TeamMembershipProvider for TeamClient {
    type Error = DirectoryError;

    /// Asks each distinct team for its members, all at once. A team that has
    /// disappeared since the mentions were resolved contributes no one.
    #[instrument(skip(self, teams, exclude), fields(teams = teams.len()))]
    async fn get_users_from_teams(
        &self,
        organization_id: OrganizationId,
        teams: &[TeamId],
        exclude: &BTreeSet<UserId>,
    ) -> Result<Vec<UserId>, DirectoryError> {
        let distinct: BTreeSet<TeamId> = teams.iter().copied().collect();
        let lookups = distinct.into_iter().map(|team_id| async move {
            match self.members(team_id, organization_id, exclude.clone()).await {
                Err(DirectoryError::NotFound(_)) => {
                    debug!(%team_id, "Team gone, skipping");
                    Ok(Vec::new())
                }
                result => result,
            }
        });
        let members = try_join_all(lookups).await?;
        Ok(members.into_iter().flatten().collect())
    }
}
