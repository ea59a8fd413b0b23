//! Shared application state for the nexus web service.
//!
//! Immutable after startup: handlers only read from it, so cloning the
//! `Arc` per request is the only cost.

use std::sync::Arc;

use nexus_core::runtime;

use crate::{build_info, config::ServiceConfig};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    port: u16,
    build_time: String,
    runtime_version: String,
}

impl AppState {
    /// Build application state for a listener bound on `port`.
    pub fn new(cfg: ServiceConfig, port: u16) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                port,
                build_time: build_info::build_epoch()
                    .map(runtime::build_time)
                    .unwrap_or_else(|| "unknown".to_string()),
                runtime_version: runtime::runtime_version(build_info::RUSTC_VERSION),
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    /// Port the listener actually bound (not necessarily the configured one).
    pub fn port(&self) -> u16 {
        self.inner.port
    }

    pub fn build_time(&self) -> &str {
        &self.inner.build_time
    }

    pub fn runtime_version(&self) -> &str {
        &self.inner.runtime_version
    }
}
