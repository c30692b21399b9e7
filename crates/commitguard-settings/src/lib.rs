//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    CheckConfig, CommitguardConfigV1, HistoryConfig, PolicyConfig, ProjectConfig, WindowConfig,
};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Default config file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "commitguard.toml";

/// Parse `commitguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CommitguardConfigV1> {
    let cfg: CommitguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + per-section config + overrides).
pub fn resolve_config(
    cfg: CommitguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
