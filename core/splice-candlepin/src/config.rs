//! Connection settings for a Candlepin server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Candlepin connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlepinConfig {
    /// Base URL; request paths are appended to it (e.g. `https://cp.example.com:8443/candlepin`).
    pub base_url: String,
    /// OAuth consumer key shared with the server.
    pub consumer_key: String,
    /// OAuth consumer secret shared with the server.
    pub consumer_secret: String,
    /// Admin user sent in the `cp-user` header.
    pub admin_user: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// PEM CA certificate trusted in addition to the system roots.
    pub ca_cert: Option<PathBuf>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
}

impl Default for CandlepinConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:8443/candlepin".to_string(),
            consumer_key: "sst".to_string(),
            consumer_secret: "sstsstsst".to_string(),
            admin_user: "admin".to_string(),
            timeout_secs: 30,
            ca_cert: None,
            accept_invalid_certs: false,
        }
    }
}
