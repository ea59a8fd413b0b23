//! Request handlers.

pub mod info;
