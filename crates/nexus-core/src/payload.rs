//! Informational response payloads (JSON).
//!
//! Every payload is built fresh per request and dropped after serialization.
//! Field names are part of the wire contract; camelCase keys such as
//! `buildTime` and `javaVersion` are renamed explicitly.

use serde::{Deserialize, Serialize};

/// `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

/// `GET /version`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionResponse {
    pub application: String,
    pub version: String,
    #[serde(rename = "buildTime")]
    pub build_time: String,
    /// Runtime identifier. The key keeps its historical name for clients
    /// that already parse it.
    #[serde(rename = "javaVersion")]
    pub runtime_version: String,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthResponse {
    pub status: String,
    pub application: String,
    pub timestamp: String,
    pub uptime: String,
}

/// `GET /info`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoResponse {
    pub project: String,
    pub description: String,
    pub framework: String,
    pub packaging: String,
    pub features: Vec<String>,
}

/// `GET /status`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusResponse {
    pub server: String,
    pub port: u16,
    pub status: String,
    /// Process memory, formatted as `"<n> MB"`.
    pub memory: String,
    pub processors: usize,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn version_uses_camel_case_keys() {
        let v = VersionResponse {
            application: "app".into(),
            version: "1.0.0".into(),
            build_time: "unknown".into(),
            runtime_version: "rust".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["application", "buildTime", "javaVersion", "version"]);
    }

    #[test]
    fn status_numbers_stay_numeric() {
        let s = StatusResponse {
            server: "axum".into(),
            port: 8080,
            status: "running".into(),
            memory: "12 MB".into(),
            processors: 4,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["port"], 8080);
        assert_eq!(json["processors"], 4);
        assert_eq!(json["memory"], "12 MB");
    }
}
