use crate::{model::CommitguardConfigV1, presets};
use anyhow::Context;
use commitguard_domain::policy::{EffectiveConfig, TimeWindow};
use commitguard_types::ids;
use globset::Glob;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Command-line values that win over `commitguard.toml`.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub window_start: Option<String>,
    pub window_end: Option<String>,
    pub minimum_commits: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: CommitguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let presets::Preset {
        profile,
        mut policy,
        mut project,
        mut history,
    } = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    let window = resolve_window(
        overrides.window_start.as_deref().or(cfg.window.start.as_deref()),
        overrides.window_end.as_deref().or(cfg.window.end.as_deref()),
    )?;

    // policy
    if let Some(n) = overrides.minimum_commits.or(cfg.policy.minimum_commits) {
        policy.minimum_commits = n;
    }
    if let Some(n) = cfg.policy.minimum_message_length {
        policy.minimum_message_length = n;
    }
    if let Some(patterns) = cfg.policy.banned_message_patterns {
        policy.banned_message_patterns = patterns
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
    }
    if let Some(n) = cfg.policy.max_allowed_empty_quarters {
        policy.max_allowed_empty_quarters = n;
    }

    // project
    if let Some(v) = cfg.project.marker_file {
        project.marker_file = non_empty("project.marker_file", v)?;
    }
    if let Some(v) = cfg.project.description_file {
        project.description_file = non_empty("project.description_file", v)?;
    }
    if let Some(globs) = cfg.project.source_globs {
        validate_globs(&globs)?;
        project.source_globs = globs;
    }
    if let Some(dirs) = cfg.project.source_dirs {
        project.source_dirs = dirs;
    }
    if let Some(tokens) = cfg.project.placeholder_tokens {
        project.placeholder_tokens = tokens;
    }
    if let Some(n) = cfg.project.min_description_bytes {
        project.min_description_bytes = n;
    }

    // history
    if let Some(v) = cfg.history.sentinel_message {
        history.sentinel_message = v.trim().to_string();
    }
    if let Some(keywords) = cfg.history.rewrite_keywords {
        history.rewrite_keywords = keywords
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .collect();
    }

    // per-check toggles
    let mut checks = BTreeMap::new();
    for (check_id, cc) in cfg.checks {
        if !ids::CHECK_ORDER.contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (expected one of {})",
                ids::CHECK_ORDER.join(", ")
            );
        }
        checks.insert(check_id, cc.enabled.unwrap_or(true));
    }

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            profile,
            window,
            policy,
            project,
            history,
            checks,
        },
    })
}

fn resolve_window(start: Option<&str>, end: Option<&str>) -> anyhow::Result<TimeWindow> {
    let (Some(start), Some(end)) = (start, end) else {
        anyhow::bail!(
            "no event window configured: set [window] start and end in commitguard.toml \
             or pass --window-start and --window-end"
        );
    };
    let start = parse_instant(start).context("invalid window start")?;
    let end = parse_instant(end).context("invalid window end")?;
    Ok(TimeWindow::new(start, end)?)
}

fn parse_instant(v: &str) -> anyhow::Result<OffsetDateTime> {
    OffsetDateTime::parse(v.trim(), &Rfc3339)
        .with_context(|| format!("expected an RFC 3339 timestamp with offset, got {v:?}"))
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid source glob: {pattern}"))?;
    }
    Ok(())
}

fn non_empty(key: &str, v: String) -> anyhow::Result<String> {
    let trimmed = v.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(trimmed.to_string())
}
