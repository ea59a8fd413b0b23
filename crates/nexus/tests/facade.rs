//! The facade re-exports must stay usable on their own.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use nexus::core::{runtime, NexusError};
use nexus::web::{app_state::AppState, config, router};

#[test]
fn config_and_errors_through_facade() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.label, "axum");

    let err: NexusError = config::load_from_str("version: 3\n").unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn router_builds_through_facade() {
    let state = AppState::new(config::ServiceConfig::default(), 8080);
    assert_eq!(state.port(), 8080);
    assert!(state.runtime_version().starts_with("rust "));
    let _router = router::build_router(state);
    assert_eq!(router::ENDPOINTS.len(), 5);
    assert_eq!(runtime::format_memory(3), "3 MB");
}
