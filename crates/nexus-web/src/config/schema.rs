use std::net::SocketAddr;

use serde::Deserialize;
use nexus_core::error::{NexusError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub app: AppSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            app: AppSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NexusError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.app.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Label reported as `server` by `/status`.
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            label: default_label(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.label.trim().is_empty() {
            return Err(NexusError::BadRequest("server.label must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            NexusError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_label() -> String {
    "axum".into()
}

/// Descriptive metadata served by `/`, `/version`, `/health` and `/info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default = "default_features")]
    pub features: Vec<String>,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            project: default_project(),
            description: default_description(),
            framework: default_framework(),
            packaging: default_packaging(),
            features: default_features(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NexusError::BadRequest("app.name must not be empty".into()));
        }
        if self.version.trim().is_empty() {
            return Err(NexusError::BadRequest("app.version must not be empty".into()));
        }
        Ok(())
    }
}

fn default_name() -> String {
    "Nexus Artifact Management Demo Application".into()
}
fn default_version() -> String {
    "1.0.0-SNAPSHOT".into()
}
fn default_project() -> String {
    "nexus-web-demo".into()
}
fn default_description() -> String {
    "Demo web service for exercising artifact publishing and deployment".into()
}
fn default_framework() -> String {
    "Axum 0.7 / Tokio".into()
}
fn default_packaging() -> String {
    "binary".into()
}
fn default_features() -> Vec<String> {
    [
        "REST API",
        "Health Check",
        "Version Info",
        "Build Metadata",
        "Runtime Status",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
