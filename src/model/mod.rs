//! Pure data structures: identifiers, mentions, resolved actors, and the
//! directory records implementing [`Record`](crate::framework::Record).

pub mod actor;
pub mod ids;
pub mod mention;
pub mod team;
pub mod user;

pub use actor::*;
pub use ids::*;
pub use mention::*;
pub use team::*;
pub use user::*;
