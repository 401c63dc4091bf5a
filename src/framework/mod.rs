//! Generic record-store framework backing the user and team directories.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that stored types implement to be managed by a store actor
//! - [`StoreActor`] - Generic actor that owns a collection of records
//! - [`StoreClient`] - Cloneable, type-safe handle for talking to a [`StoreActor`]
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
