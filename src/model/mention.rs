//! Mention tokens as they arrive from the comment layer.
//!
//! Accepted textual forms:
//!
//! | Token       | Meaning              |
//! |-------------|----------------------|
//! | `user:<id>` | a user               |
//! | `team:<id>` | a team               |
//! | `<id>`      | a user (bare number) |

use crate::model::{TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// An unresolved reference to a user or a team.
///
/// A mention only names an identity; whether that identity exists is decided
/// later by an [`ActorResolver`](crate::resolver::ActorResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mention {
    User(UserId),
    Team(TeamId),
}

/// Errors produced when parsing a mention token.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MentionParseError {
    #[error("Empty mention")]
    Empty,

    #[error("Unknown mention kind: {0}")]
    UnknownKind(String),

    #[error("Invalid mention id: {0}")]
    InvalidId(String),
}

impl FromStr for Mention {
    type Err = MentionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(MentionParseError::Empty);
        }

        match token.split_once(':') {
            Some(("user", id)) => parse_id(id).map(|id| Mention::User(UserId(id))),
            Some(("team", id)) => parse_id(id).map(|id| Mention::Team(TeamId(id))),
            Some((kind, _)) => Err(MentionParseError::UnknownKind(kind.to_string())),
            None => parse_id(token).map(|id| Mention::User(UserId(id))),
        }
    }
}

/// Ids are plain ASCII digits; signs and whitespace would not survive `Display`.
fn parse_id(raw: &str) -> Result<u32, MentionParseError> {
    let invalid = || MentionParseError::InvalidId(raw.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

impl Display for Mention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mention::User(id) => write!(f, "user:{}", id.0),
            Mention::Team(id) => write!(f, "team:{}", id.0),
        }
    }
}

impl TryFrom<String> for Mention {
    type Error = MentionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mention> for String {
    fn from(mention: Mention) -> Self {
        mention.to_string()
    }
}
