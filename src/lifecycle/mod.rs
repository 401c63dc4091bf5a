//! # System Lifecycle & Orchestration
//!
//! Starts the directory actors, wires the mention collaborators on top of
//! them, and shuts everything down again.
//!
//! ## The DirectorySystem Pattern
//!
//! ```rust,ignore
//! let system = DirectorySystem::new(&DirectoryConfig::from_env());
//!
//! let alice = system.user_client.create_user(alice_params).await?;
//! let team = system.team_client.create_team(team_params).await?;
//! system.team_client.add_member(team, alice).await?;
//!
//! let resolver = system.mention_resolver();
//! let mentioned = resolver.extract_user_ids(org, &mentions).await?;
//!
//! drop(resolver);
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! Every resolver built by [`DirectorySystem::mention_resolver`] holds client
//! clones, so it must be dropped before shutdown or the actors never stop.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber; verbosity follows `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -- user:1 team:1    # lifecycle only
//! RUST_LOG=debug cargo run -- user:1 team:1   # every store request
//! ```

pub mod config;
pub mod directory_system;
pub mod tracing;

pub use config::*;
pub use directory_system::*;
pub use self::tracing::*;
