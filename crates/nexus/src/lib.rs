//! Top-level facade crate for nexus.
//!
//! Re-exports core types and the web library so users can depend on a single crate.

pub mod core {
    pub use nexus_core::*;
}

pub mod web {
    pub use nexus_web::*;
}
