//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient),
//! and the directory-backed mention collaborators.

pub mod directory_client;
pub mod directory_resolver;
pub mod team_client;
pub mod user_client;

pub use directory_client::*;
pub use directory_resolver::*;
pub use team_client::*;
pub use user_client::*;
