//! Configuration and command plumbing for the splice sync tool.

mod commands;
mod config;
mod error;

pub use commands::{
    consumers_from_file, entitlements_for_rcs, rcs_usage_from_file, read_records,
    report_rejected, to_pretty_json,
};
pub use config::{MappingSection, SpacewalkSection, SpliceSection, ToolConfig};
pub use error::{ToolError, ToolResult};
