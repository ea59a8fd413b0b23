//! nexus core: transport-agnostic response payloads, runtime probes, and the
//! shared error type.
//!
//! This crate knows nothing about HTTP. The web crate composes these payloads
//! per request and serializes them; keeping them here lets tests and other
//! front ends reuse the exact wire shapes.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `NexusError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod payload;
pub mod runtime;

/// Shared result type.
pub use error::{NexusError, Result};
