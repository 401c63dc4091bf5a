#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Mention Resolver
//!
//! > **Who gets notified when a comment says `@alice @backend`?**
//!
//! This crate resolves the mentions in a comment into two disjoint sets of users:
//! those mentioned by name, and those reached through a mentioned team. It is
//! built on a small actor-backed directory of users and teams using Tokio.
//!
//! ## 🚀 Core Concepts
//!
//! ### Resolution is composition
//! [`MentionResolver`](resolver::MentionResolver) owns no data. It asks an
//! [`ActorResolver`](resolver::ActorResolver) what the mentions refer to, asks a
//! [`TeamMembershipProvider`](resolver::TeamMembershipProvider) who is on the
//! mentioned teams, and subtracts the people already mentioned by name.
//! Any failure from either collaborator is returned untouched.
//!
//! ### The directory is a pair of actors
//! Users and teams each live in a [`StoreActor`](framework::StoreActor): a Tokio
//! task that owns its records and processes requests one at a time. Clients
//! are cheap to clone and talk to it over channels.
//!
//! ### Mocking
//! [`MockStore`](framework::mock::MockStore) answers client requests from a
//! queue of canned responses, so clients can be tested without running actors.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Resolver ([`resolver`])
//! - **Key items**: [`MentionResolver`](resolver::MentionResolver),
//!   [`ActorResolver`](resolver::ActorResolver),
//!   [`TeamMembershipProvider`](resolver::TeamMembershipProvider).
//!
//! ### 2. The Data ([`model`])
//! - **Key items**: [`Mention`](model::Mention), [`Actor`](model::Actor),
//!   [`MentionedUsers`](model::MentionedUsers), [`User`](model::User), [`Team`](model::Team).
//!
//! ### 3. The Engine ([`framework`])
//! - **Key items**: [`Record`](framework::Record), [`StoreActor`](framework::StoreActor),
//!   [`StoreClient`](framework::StoreClient).
//!
//! ### 4. The Interface ([`clients`])
//! - **Key items**: [`UserClient`](clients::UserClient), [`TeamClient`](clients::TeamClient),
//!   [`DirectoryResolver`](clients::DirectoryResolver).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`DirectorySystem`](lifecycle::DirectorySystem),
//!   [`DirectoryConfig`](lifecycle::DirectoryConfig), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- user:1 team:1
//! ```

pub mod clients;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod resolver;
pub mod team_actor;
pub mod user_actor;
