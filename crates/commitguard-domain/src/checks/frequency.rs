use crate::checks::utils::{plural, quarter_counts, valid_set};
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let valid = valid_set(&model.commits, &cfg.window);
    let minimum = cfg.policy.minimum_commits as usize;
    let quarters = quarter_counts(&valid, &cfg.window);

    let mut passed = true;
    let mut diagnostics = Vec::new();

    if valid.len() < minimum {
        passed = false;
        let missing = minimum - valid.len();
        diagnostics.push(
            Diagnostic::error(
                ids::CODE_INSUFFICIENT_COMMITS,
                format!(
                    "{} inside the window, minimum is {minimum}: need {missing} more",
                    plural(valid.len(), "commit")
                ),
            )
            .with_data(json!({
                "found": valid.len(),
                "minimum": minimum,
                "missing": missing,
            })),
        );
    } else {
        diagnostics.push(
            Diagnostic::info(
                ids::CODE_COMMIT_COUNT,
                format!(
                    "{} inside the window (minimum {minimum})",
                    plural(valid.len(), "commit")
                ),
            )
            .with_data(json!({ "found": valid.len(), "minimum": minimum })),
        );
    }

    // Fatal regardless of policy: one commit cannot show incremental work.
    if valid.len() == 1 {
        passed = false;
        diagnostics.push(
            Diagnostic::error(
                ids::CODE_SINGLE_COMMIT,
                "only one commit falls inside the window; a single commit cannot demonstrate incremental work",
            )
            .with_help("Commit small steps as you go instead of uploading everything at once."),
        );
    }

    let empty = quarters.iter().filter(|&&n| n == 0).count();
    let allowed = cfg.policy.max_allowed_empty_quarters as usize;
    if empty > allowed {
        diagnostics.push(
            Diagnostic::warning(
                ids::CODE_CLUSTERED_COMMITS,
                format!(
                    "{empty} of 4 window quarters have no commits (allowed: {allowed}); commits per quarter: {quarters:?}"
                ),
            )
            .with_data(json!({
                "quarters": quarters,
                "empty": empty,
                "allowed": allowed,
            })),
        );
    }

    CheckResult::new(ids::CHECK_COMMITS_FREQUENCY, passed, diagnostics)
}
