//! Command line for the `nexus-web` binary.

use std::path::PathBuf;

use clap::Parser;

use nexus_core::error::Result;

use crate::config::{self, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "nexus-web", version, about = "Read-only informational web service")]
pub struct Cli {
    /// YAML config file; built-in defaults are used when omitted.
    #[arg(long, env = "NEXUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `server.listen`.
    #[arg(long, env = "NEXUS_LISTEN")]
    pub listen: Option<String>,
}

impl Cli {
    /// Resolve the effective config: file (or defaults), then overrides.
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ServiceConfig::default(),
        };
        if let Some(listen) = &self.listen {
            cfg.server.listen = listen.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
