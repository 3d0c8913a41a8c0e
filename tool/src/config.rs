//! Startup configuration.
//!
//! ```toml
//! [spacewalk]
//! host = "spacewalk.example.com"
//!
//! [splice]
//! server_uuid = "splice-server-1"
//!
//! [candlepin]
//! base_url = "https://katello.example.com:8443/candlepin"
//! admin_user = "admin"
//!
//! [mapping]
//! facts = "/etc/splice/spacewalk-fact-mapping.txt"
//! ```

use serde::Deserialize;
use splice_candlepin::CandlepinConfig;
use splice_transform::{MappedFactTranslator, TransformConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize)]
pub struct SpacewalkSection {
    /// Hostname stamped on every exported consumer.
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpliceSection {
    /// Identity of this splice server.
    pub server_uuid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingSection {
    /// `detail: fact` mapping file used to build consumer facts.
    #[serde(default)]
    pub facts: Option<PathBuf>,
}

/// Everything the tool reads from its configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    pub spacewalk: SpacewalkSection,
    pub splice: SpliceSection,
    #[serde(default)]
    pub candlepin: CandlepinConfig,
    #[serde(default)]
    pub mapping: MappingSection,
    /// Built from `mapping.facts` when the configuration is parsed.
    #[serde(skip)]
    facts: MappedFactTranslator,
}

impl ToolConfig {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> ToolResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ToolError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            ToolError::Config(msg) => ToolError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> ToolResult<Self> {
        let mut config: ToolConfig =
            toml::from_str(contents).map_err(|e| ToolError::Config(e.to_string()))?;
        config.validate()?;
        config.facts = load_fact_mapping(&config.mapping)?;
        Ok(config)
    }

    fn validate(&self) -> ToolResult<()> {
        if self.spacewalk.host.trim().is_empty() {
            return Err(ToolError::Config("spacewalk.host is empty".to_string()));
        }
        if self.splice.server_uuid.trim().is_empty() {
            return Err(ToolError::Config("splice.server_uuid is empty".to_string()));
        }
        if self.candlepin.timeout_secs == 0 {
            return Err(ToolError::Config("candlepin.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Settings handed to the schema translator.
    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig::new(&self.spacewalk.host, &self.splice.server_uuid)
    }

    /// Fact translator loaded from `mapping.facts`; empty when unset, so
    /// every detail is dropped.
    pub fn fact_translator(&self) -> &MappedFactTranslator {
        &self.facts
    }
}

fn load_fact_mapping(mapping: &MappingSection) -> ToolResult<MappedFactTranslator> {
    let Some(path) = &mapping.facts else {
        return Ok(MappedFactTranslator::default());
    };
    let translator = MappedFactTranslator::from_file(path)
        .map_err(|e| ToolError::Config(format!("mapping.facts: {e}")))?;
    debug!("Loaded {} fact mappings from {:?}", translator.len(), path);
    Ok(translator)
}
