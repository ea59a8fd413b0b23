//! nexus web service library entry.
//!
//! Wires config, application state, and the informational handlers into an
//! axum router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
