//! Axum router wiring.
//!
//! Routes are registered from a single table so the endpoint list served by
//! `/` cannot drift from what is actually routed.

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::{app_state::AppState, handlers::info};

/// Paths served by this service, in registration order.
pub const ENDPOINTS: [&str; 5] = ["/", "/version", "/health", "/info", "/status"];

fn routes() -> [(&'static str, MethodRouter<AppState>); 5] {
    [
        (ENDPOINTS[0], get(info::home)),
        (ENDPOINTS[1], get(info::version)),
        (ENDPOINTS[2], get(info::health)),
        (ENDPOINTS[3], get(info::info)),
        (ENDPOINTS[4], get(info::status)),
    ]
}

pub fn build_router(state: AppState) -> Router {
    routes()
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| router.route(path, handler))
        .fallback(info::not_found)
        .with_state(state)
}
