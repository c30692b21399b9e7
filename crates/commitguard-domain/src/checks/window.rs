use crate::checks::utils::{format_instant, offset_minutes, plural};
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let window = &cfg.window;

    let (Some(first), Some(last)) = (model.commits.first(), model.commits.last()) else {
        return CheckResult::new(
            ids::CHECK_WINDOW_BOUNDS,
            false,
            vec![
                Diagnostic::error(ids::CODE_NO_COMMITS, "no commits found")
                    .with_help("Run commitguard inside the project repository and commit your work."),
            ],
        );
    };

    let mut diagnostics = Vec::new();

    if first.timestamp < window.start() {
        let offset = offset_minutes(first.timestamp - window.start());
        diagnostics.push(
            Diagnostic::error(
                ids::CODE_STARTS_BEFORE_WINDOW,
                format!(
                    "first commit {} ({}) is {} before the window start {} (offset {offset:+} min)",
                    first.short_id(),
                    format_instant(first.timestamp),
                    plural(offset.unsigned_abs() as usize, "minute"),
                    format_instant(window.start()),
                ),
            )
            .with_help("Work must start inside the window; history created earlier cannot be submitted.")
            .with_data(json!({
                "commit": first.id,
                "offset_minutes": offset,
            })),
        );
    }

    if last.timestamp > window.end() {
        let offset = offset_minutes(last.timestamp - window.end());
        diagnostics.push(
            Diagnostic::error(
                ids::CODE_ENDS_AFTER_WINDOW,
                format!(
                    "last commit {} ({}) is {} after the window end {} (offset {offset:+} min)",
                    last.short_id(),
                    format_instant(last.timestamp),
                    plural(offset.unsigned_abs() as usize, "minute"),
                    format_instant(window.end()),
                ),
            )
            .with_help("Submit the last commit made before the deadline.")
            .with_data(json!({
                "commit": last.id,
                "offset_minutes": offset,
            })),
        );
    }

    let passed = diagnostics.is_empty();
    if passed {
        diagnostics.push(Diagnostic::info(
            ids::CODE_WITHIN_WINDOW,
            format!(
                "{} between {} and {}",
                plural(model.commits.len(), "commit"),
                format_instant(first.timestamp),
                format_instant(last.timestamp),
            ),
        ));
    }

    CheckResult::new(ids::CHECK_WINDOW_BOUNDS, passed, diagnostics)
}
