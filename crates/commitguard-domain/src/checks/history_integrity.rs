use crate::checks::utils::{plural_irregular, truncate_chars};
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

/// Passes iff the operation log is readable. Rewrite keywords only warn.
///
/// Keywords are matched against the action of each entry (`reset`, `rebase (pick)`,
/// `commit (amend)`), never against the commit subject that follows it.
pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let Some(log) = model.operation_log.as_deref() else {
        return CheckResult::new(
            ids::CHECK_HISTORY_INTEGRITY,
            false,
            vec![
                Diagnostic::error(
                    ids::CODE_OPERATION_LOG_UNREADABLE,
                    "operation log (git reflog) could not be read",
                )
                .with_help("Run commitguard inside the original working copy of the repository."),
            ],
        );
    };

    let lines: Vec<&str> = log.lines().filter(|l| !l.trim().is_empty()).collect();
    let actions: Vec<String> = lines.iter().map(|l| entry_action(l).to_lowercase()).collect();

    let mut diagnostics = vec![Diagnostic::info(
        ids::CODE_OPERATION_LOG_READ,
        format!("operation log read: {}", plural_irregular(lines.len(), "entry", "entries")),
    )];

    for keyword in &cfg.history.rewrite_keywords {
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let matching: Vec<&str> = lines
            .iter()
            .zip(&actions)
            .filter(|(_, action)| action.contains(&needle))
            .map(|(line, _)| *line)
            .collect();
        let Some(sample) = matching.first() else {
            continue;
        };
        diagnostics.push(
            Diagnostic::warning(
                ids::CODE_REWRITE_DETECTED,
                format!(
                    "operation log records `{keyword}` in {}; review whether history was rewritten",
                    plural_irregular(matching.len(), "entry", "entries")
                ),
            )
            .with_data(json!({
                "keyword": keyword,
                "entries": matching.len(),
                "sample": truncate_chars(sample.trim(), 120),
            })),
        );
    }

    CheckResult::new(ids::CHECK_HISTORY_INTEGRITY, true, diagnostics)
}

/// The action part of a reflog entry.
///
/// `abc1234 HEAD@{2}: commit (amend): Add login form` yields `commit (amend)`.
/// Lines without a `selector: ` prefix (`%gs` output) are split the same way.
pub fn entry_action(line: &str) -> &str {
    let line = line.trim();
    let rest = match line.find("}: ") {
        Some(i) => &line[i + 3..],
        None => line,
    };
    rest.split_once(": ").map_or(rest, |(action, _)| action).trim()
}
