use crate::model::{TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A resolved identity behind a [`Mention`](crate::model::Mention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Actor {
    User(UserId),
    Team(TeamId),
}

/// Resolved actors split by variant, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedActors {
    pub users: Vec<UserId>,
    pub teams: Vec<TeamId>,
}

impl ResolvedActors {
    pub fn partition(actors: impl IntoIterator<Item = Actor>) -> Self {
        let mut resolved = Self::default();
        for actor in actors {
            match actor {
                Actor::User(id) => resolved.users.push(id),
                Actor::Team(id) => resolved.teams.push(id),
            }
        }
        resolved
    }
}

/// Users to notify for a set of mentions.
///
/// `users` holds everyone mentioned by name; `team_users` holds everyone reached
/// through a mentioned team who was not also mentioned by name. The two sets
/// never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionedUsers {
    pub users: BTreeSet<UserId>,
    pub team_users: BTreeSet<UserId>,
}

impl MentionedUsers {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.team_users.is_empty()
    }

    /// Every user to notify, direct mentions first.
    pub fn recipients(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.iter().chain(self.team_users.iter()).copied()
    }
}
