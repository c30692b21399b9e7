use crate::checks::{self, Check};
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use commitguard_types::{CheckResult, CommitguardData, Diagnostic, Report, WindowData, ids};
use std::panic::{self, AssertUnwindSafe};

/// Run every enabled check in catalog order and aggregate the results.
pub fn evaluate(model: &RepoModel, cfg: &EffectiveConfig) -> DomainReport {
    let results: Vec<CheckResult> = checks::CATALOG
        .iter()
        .filter(|check| cfg.is_enabled(check.id))
        .map(|check| run_isolated(check, model, cfg))
        .collect();

    let report = Report::from_results(results);

    let commits_in_window = checks::utils::valid_set(&model.commits, &cfg.window).len();
    let data = CommitguardData {
        profile: cfg.profile.clone(),
        window: WindowData {
            start: cfg.window.start(),
            end: cfg.window.end(),
        },
        commits_total: model.commits.len() as u32,
        commits_in_window: commits_in_window as u32,
        checks_run: report.results.len() as u32,
        checks_failed: report.results.iter().filter(|r| !r.passed).count() as u32,
    };

    DomainReport { report, data }
}

// A panicking check becomes a failed result; the remaining checks still run.
fn run_isolated(check: &Check, model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    match panic::catch_unwind(AssertUnwindSafe(|| (check.run)(model, cfg))) {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            CheckResult::new(
                check.id,
                false,
                vec![Diagnostic::error(
                    ids::CODE_INTERNAL_ERROR,
                    format!("check aborted unexpectedly: {detail}"),
                )],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit, config, full_model};

    #[test]
    fn runs_checks_in_fixed_order() {
        let report = evaluate(&full_model(), &config()).report;
        let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ids::CHECK_ORDER.to_vec());
    }

    #[test]
    fn disabled_checks_are_omitted() {
        let mut cfg = config();
        cfg.checks
            .insert(ids::CHECK_PROJECT_ARTIFACTS.to_string(), false);
        let report = evaluate(&full_model(), &cfg).report;
        assert!(report.result(ids::CHECK_PROJECT_ARTIFACTS).is_none());
        assert_eq!(report.results.len(), 5);
    }

    #[test]
    fn summary_counts_commits_inside_window() {
        let mut model = full_model();
        model
            .commits
            .insert(0, commit("early00", "2025-02-28T12:00:00Z", "Sketch idea on paper"));
        let out = evaluate(&model, &config());
        assert_eq!(out.data.commits_total, 7);
        assert_eq!(out.data.commits_in_window, 6);
        assert_eq!(out.data.checks_failed, 1);
        assert!(!out.report.overall_passed);
    }

    #[test]
    fn panicking_check_is_isolated() {
        let boom = Check {
            id: "test.boom",
            run: |_, _| panic!("boom"),
        };
        let result = run_isolated(&boom, &full_model(), &config());
        assert!(!result.passed);
        assert!(result.has_code(ids::CODE_INTERNAL_ERROR));
        assert!(result.diagnostics[0].message.contains("boom"));
    }
}
