use crate::checks::utils::{truncate_chars, valid_set};
use crate::model::{CommitRecord, RepoModel};
use crate::policy::{EffectiveConfig, Policy};
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

const MAX_EXAMPLES: usize = 5;

/// Too short after trimming, or equal to a banned token.
pub fn is_poor(message: &str, policy: &Policy) -> bool {
    let trimmed = message.trim();
    trimmed.chars().count() < policy.minimum_message_length as usize || policy.is_banned(trimmed)
}

/// Advisory only: always passes.
pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let valid = valid_set(&model.commits, &cfg.window);

    if valid.is_empty() {
        return CheckResult::new(
            ids::CHECK_COMMITS_MESSAGE_QUALITY,
            true,
            vec![Diagnostic::info(
                ids::CODE_MESSAGE_SUMMARY,
                "no commits inside the window to assess",
            )],
        );
    }

    let poor: Vec<&CommitRecord> = valid
        .iter()
        .copied()
        .filter(|c| is_poor(&c.message, &cfg.policy))
        .collect();

    let mut diagnostics = vec![Diagnostic::info(
        ids::CODE_MESSAGE_SUMMARY,
        format!(
            "{} of {} commit messages look low-information",
            poor.len(),
            valid.len()
        ),
    )];

    if poor.len() * 2 > valid.len() {
        let examples: Vec<String> = poor
            .iter()
            .take(MAX_EXAMPLES)
            .map(|c| format!("{} \"{}\"", c.short_id(), truncate_chars(c.message.trim(), 60)))
            .collect();
        diagnostics.push(
            Diagnostic::warning(
                ids::CODE_LOW_INFORMATION_MESSAGES,
                format!(
                    "more than half of the commit messages are low-information: {}",
                    examples.join(", ")
                ),
            )
            .with_help(format!(
                "Describe what changed in at least {} characters; avoid messages like `fix` or `wip`.",
                cfg.policy.minimum_message_length
            ))
            .with_data(json!({
                "poor": poor.len(),
                "total": valid.len(),
            })),
        );
    }

    CheckResult::new(ids::CHECK_COMMITS_MESSAGE_QUALITY, true, diagnostics)
}
