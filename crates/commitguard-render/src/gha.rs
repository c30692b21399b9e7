use crate::{RenderableReport, RenderableSeverity};

/// Render warnings and errors as GitHub Actions workflow commands.
///
/// Format: `::{level} title={check_id}::{message}`. Info diagnostics are skipped.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for check in &report.checks {
        for diag in &check.diagnostics {
            let level = match diag.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
                RenderableSeverity::Info => continue,
            };

            let message = escape_data(&format!("[{}] {}", diag.code, diag.message));
            out.push(format!(
                "::{} title={}::{}",
                level,
                escape_property(&check.name),
                message
            ));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableCheck, RenderableData, RenderableDiagnostic, RenderableVerdictStatus,
    };

    fn report(diagnostics: Vec<RenderableDiagnostic>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            checks: vec![RenderableCheck {
                name: "commits.frequency".to_string(),
                passed: false,
                diagnostics,
            }],
            data: RenderableData {
                profile: "standard".to_string(),
                window_start: String::new(),
                window_end: String::new(),
                commits_total: 1,
                commits_in_window: 1,
                checks_run: 1,
                checks_failed: 1,
            },
        }
    }

    fn diag(severity: RenderableSeverity, message: &str) -> RenderableDiagnostic {
        RenderableDiagnostic {
            severity,
            code: "single_commit".to_string(),
            message: message.to_string(),
            help: None,
        }
    }

    #[test]
    fn renders_errors_and_warnings_only() {
        let lines = render_github_annotations(&report(vec![
            diag(RenderableSeverity::Error, "only one commit"),
            diag(RenderableSeverity::Warning, "clustered"),
            diag(RenderableSeverity::Info, "1 commit"),
        ]));
        assert_eq!(
            lines,
            vec![
                "::error title=commits.frequency::[single_commit] only one commit".to_string(),
                "::warning title=commits.frequency::[single_commit] clustered".to_string(),
            ]
        );
    }

    #[test]
    fn escapes_workflow_command_characters() {
        let lines = render_github_annotations(&report(vec![diag(
            RenderableSeverity::Error,
            "100% done\nnot really",
        )]));
        assert!(lines[0].ends_with("100%25 done%0Anot really"));
    }
}
