use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `commitguard.toml` v1. Every field is optional; unset values come from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "commitguard.config.v1")]
pub struct CommitguardConfigV1 {
    /// Optional schema string for tooling (`commitguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default), `lenient` or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Event window. Both ends are RFC 3339 instants with an explicit offset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_commits: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_message_length: Option<u32>,

    /// Whole-message tokens, matched case-insensitively. Replaces the profile list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned_message_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allowed_empty_quarters: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_file: Option<String>,

    /// Glob patterns for top-level source files (`*.rs`, `*.py`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_globs: Option<Vec<String>>,

    /// Conventional top-level source directory names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dirs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_tokens: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_description_bytes: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Message of the setup commit that is excluded from every check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinel_message: Option<String>,

    /// Operation-log keywords that suggest rewritten history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_keywords: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Set to `false` to leave the check out of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
