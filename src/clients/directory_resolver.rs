use crate::clients::{DirectoryClient, TeamClient, UserClient};
use crate::error::DirectoryError;
use crate::model::{Actor, Mention, TeamId, UserId};
use crate::resolver::ActorResolver;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Resolves mentions against the user and team directories.
///
/// Users and teams are fetched concurrently, one batched request per store.
/// Mentions naming an unknown user or team are dropped. Resolved actors keep
/// the order (and duplicates) of the input.
#[derive(Clone)]
pub struct DirectoryResolver {
    users: UserClient,
    teams: TeamClient,
}

impl DirectoryResolver {
    pub fn new(users: UserClient, teams: TeamClient) -> Self {
        Self { users, teams }
    }
}

#[async_trait]
impl ActorResolver for DirectoryResolver {
    type Error = DirectoryError;

    #[instrument(skip(self, mentions), fields(mentions = mentions.len()))]
    async fn resolve_many(&self, mentions: &[Mention]) -> Result<Vec<Actor>, DirectoryError> {
        let mut user_ids: Vec<UserId> = Vec::new();
        let mut team_ids: Vec<TeamId> = Vec::new();
        for mention in mentions {
            match *mention {
                Mention::User(id) => user_ids.push(id),
                Mention::Team(id) => team_ids.push(id),
            }
        }

        let (users, teams) = tokio::join!(
            self.users.get_many(user_ids),
            self.teams.get_many(team_ids)
        );
        let known_users: HashSet<UserId> = users?.into_iter().map(|user| user.id).collect();
        let known_teams: HashSet<TeamId> = teams?.into_iter().map(|team| team.id).collect();

        let actors: Vec<Actor> = mentions
            .iter()
            .filter_map(|mention| match *mention {
                Mention::User(id) => known_users.contains(&id).then_some(Actor::User(id)),
                Mention::Team(id) => known_teams.contains(&id).then_some(Actor::Team(id)),
            })
            .collect();

        debug!(
            resolved = actors.len(),
            dropped = mentions.len() - actors.len(),
            "Resolved mentions"
        );
        Ok(actors)
    }
}
