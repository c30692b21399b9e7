use crate::checks::utils::truncate_chars;
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let marker = cfg.project.marker_file.as_str();

    let probe = &model.workspace.marker;
    if !probe.exists() {
        let help = format!(
            "Create the marker at the start of the event, then commit it:\n  \
             date -u +%Y-%m-%dT%H:%M:%SZ > {marker}\n  \
             git add {marker}\n  \
             git commit -m \"{}\"",
            cfg.history.sentinel_message
        );
        return CheckResult::new(
            ids::CHECK_MARKER_PRESENT,
            false,
            vec![
                Diagnostic::error(
                    ids::CODE_MARKER_MISSING,
                    format!("marker file `{marker}` not found in the working tree"),
                )
                .with_help(help)
                .with_data(json!({ "marker": marker })),
            ],
        );
    }

    // Display only; the content is never validated.
    let message = match probe.content() {
        None => format!("marker `{marker}` found (content unreadable)"),
        Some(content) => match content.lines().map(str::trim).find(|l| !l.is_empty()) {
            Some(line) => format!("marker `{marker}` found: {}", truncate_chars(line, 120)),
            None => format!("marker `{marker}` found (empty)"),
        },
    };

    CheckResult::new(
        ids::CHECK_MARKER_PRESENT,
        true,
        vec![Diagnostic::info(ids::CODE_MARKER_CONTENT, message)],
    )
}
