//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use nexus_core::error::{NexusError, Result};

pub use schema::{AppSection, ServerSection, ServiceConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        NexusError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| NexusError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
