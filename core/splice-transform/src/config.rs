//! Startup settings for the schema translator.

use serde::{Deserialize, Serialize};

/// Settings the translator needs, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Hostname of the Spacewalk server systems are exported from.
    pub spacewalk_host: String,
    /// Identity of this splice server, stamped on every usage record.
    pub splice_server_uuid: String,
}

impl TransformConfig {
    pub fn new(spacewalk_host: impl Into<String>, splice_server_uuid: impl Into<String>) -> Self {
        Self {
            spacewalk_host: spacewalk_host.into(),
            splice_server_uuid: splice_server_uuid.into(),
        }
    }
}
