//! # Mention Resolution
//!
//! Turns the mentions in a comment into the users who should hear about it.
//!
//! [`MentionResolver`] composes two collaborators:
//!
//! - an [`ActorResolver`], which maps mention tokens to users and teams, and
//! - a [`TeamMembershipProvider`], which lists the members of teams within an
//!   organization.
//!
//! Both are traits so the resolver can sit on top of any data-access layer. The
//! crate ships directory-backed implementations in [`clients`](crate::clients).
//!
//! ```rust,ignore
//! let resolver = MentionResolver::new(actor_resolver, membership_provider);
//! let mentioned = resolver
//!     .extract_user_ids(OrganizationId(1), &["user:1".parse()?, "team:1".parse()?])
//!     .await?;
//! // mentioned.users      = {user_1}
//! // mentioned.team_users = everyone else on team_1
//! ```

use crate::model::{Actor, Mention, MentionedUsers, OrganizationId, ResolvedActors, TeamId, UserId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Maps mention tokens to concrete actors.
#[async_trait]
pub trait ActorResolver: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves each mention to zero or one actor. Mentions that name nothing
    /// are dropped rather than reported. No ordering is guaranteed.
    async fn resolve_many(&self, mentions: &[Mention]) -> Result<Vec<Actor>, Self::Error>;
}

/// Lists the users that belong to teams.
#[async_trait]
pub trait TeamMembershipProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every user belonging to any of `teams` within `organization_id`.
    ///
    /// Implementations should leave out the ids in `exclude` when they can do
    /// so cheaply; callers must not rely on it.
    async fn get_users_from_teams(
        &self,
        organization_id: OrganizationId,
        teams: &[TeamId],
        exclude: &BTreeSet<UserId>,
    ) -> Result<Vec<UserId>, Self::Error>;
}

#[async_trait]
impl<T: ActorResolver + ?Sized> ActorResolver for Arc<T> {
    type Error = T::Error;

    async fn resolve_many(&self, mentions: &[Mention]) -> Result<Vec<Actor>, Self::Error> {
        (**self).resolve_many(mentions).await
    }
}

#[async_trait]
impl<T: TeamMembershipProvider + ?Sized> TeamMembershipProvider for Arc<T> {
    type Error = T::Error;

    async fn get_users_from_teams(
        &self,
        organization_id: OrganizationId,
        teams: &[TeamId],
        exclude: &BTreeSet<UserId>,
    ) -> Result<Vec<UserId>, Self::Error> {
        (**self)
            .get_users_from_teams(organization_id, teams, exclude)
            .await
    }
}

/// Splits mentions into directly mentioned users and users reached through
/// mentioned teams.
///
/// The resolver holds no state of its own; collaborator failures are returned
/// unchanged.
#[derive(Debug, Clone)]
pub struct MentionResolver<R, P> {
    actors: R,
    memberships: P,
}

impl<R, P> MentionResolver<R, P>
where
    R: ActorResolver,
    P: TeamMembershipProvider<Error = R::Error>,
{
    pub fn new(actors: R, memberships: P) -> Self {
        Self {
            actors,
            memberships,
        }
    }

    /// Resolves `mentions` within `organization_id`.
    ///
    /// Duplicate mentions collapse, input order is irrelevant, and a user
    /// mentioned both directly and through a team is reported only in
    /// [`MentionedUsers::users`].
    #[instrument(skip(self, mentions), fields(mentions = mentions.len()))]
    pub async fn extract_user_ids(
        &self,
        organization_id: OrganizationId,
        mentions: &[Mention],
    ) -> Result<MentionedUsers, R::Error> {
        if mentions.is_empty() {
            return Ok(MentionedUsers::default());
        }

        let actors = self.actors.resolve_many(mentions).await?;
        let resolved = ResolvedActors::partition(actors);
        let users: BTreeSet<UserId> = resolved.users.iter().copied().collect();

        if resolved.teams.is_empty() {
            debug!(users = users.len(), "No teams mentioned");
            return Ok(MentionedUsers {
                users,
                team_users: BTreeSet::new(),
            });
        }

        let members = self
            .memberships
            .get_users_from_teams(organization_id, &resolved.teams, &users)
            .await?;
        let team_users: BTreeSet<UserId> = members
            .into_iter()
            .filter(|id| !users.contains(id))
            .collect();

        debug!(
            users = users.len(),
            teams = resolved.teams.len(),
            team_users = team_users.len(),
            "Mentions resolved"
        );
        Ok(MentionedUsers { users, team_users })
    }
}
