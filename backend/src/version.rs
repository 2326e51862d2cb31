//! Build Information
//!
//! Version metadata reported by `/version`. Optional fields are injected at
//! build time through `BUILD_METADATA`, `GIT_COMMIT`, `GIT_TREE_STATE` and
//! `RUSTC_VERSION`.

use serde::Serialize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub git_commit: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub git_tree_state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rustc_version: String,
}

fn format_version(metadata: Option<&str>) -> String {
    match metadata {
        Some(meta) if !meta.is_empty() => format!("v{}+{}", VERSION, meta),
        _ => format!("v{}", VERSION),
    }
}

/// Semantic version, with build metadata appended when present
pub fn get_version() -> String {
    format_version(option_env!("BUILD_METADATA"))
}

/// User agent presented by this service
pub fn user_agent() -> String {
    format!("experience-api/{}", get_version().trim_start_matches('v'))
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: get_version(),
        git_commit: option_env!("GIT_COMMIT").unwrap_or_default().to_string(),
        git_tree_state: option_env!("GIT_TREE_STATE").unwrap_or_default().to_string(),
        rustc_version: option_env!("RUSTC_VERSION").unwrap_or_default().to_string(),
    }
}
