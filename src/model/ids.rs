//! Type-safe identifiers.
//!
//! Each identifier wraps a `u32` and renders with a kind prefix (`user_1`,
//! `team_1`, `org_1`) so log lines stay unambiguous.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Tenant scope within which teams and memberships are defined.
    OrganizationId,
    "org"
);
define_id!(
    /// Identifier of a user in the directory.
    UserId,
    "user"
);
define_id!(
    /// Identifier of a team in the directory.
    TeamId,
    "team"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(UserId(7).to_string(), "user_7");
        assert_eq!(TeamId::from(3).to_string(), "team_3");
        assert_eq!(OrganizationId(1).to_string(), "org_1");
    }
}
