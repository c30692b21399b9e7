//! The `check` use case: verify the tool, resolve config, read the repository, evaluate.

use anyhow::Context;
use camino::Utf8Path;
use commitguard_domain::report::DomainReport;
use commitguard_repo::VersionControl;
use commitguard_settings::{CONFIG_FILE_NAME, Overrides, ResolvedConfig};
use commitguard_types::{CommitguardReportV1, Report, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;
use tracing::info;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Version-control adapter (`GitCli` in production).
    pub vcs: &'a dyn VersionControl,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CommitguardReportV1,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case.
///
/// The tool-availability precondition runs before anything else; config errors come next.
/// Everything after that is reported through check results, never as an error.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    input
        .vcs
        .ensure_available()
        .context("version control tool unavailable")?;

    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        commitguard_settings::CommitguardConfigV1::default()
    } else {
        commitguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = commitguard_settings::resolve_config(cfg, input.overrides)
        .context("resolve config")?;
    let effective = &resolved.effective;
    info!(
        profile = %effective.profile,
        window_start = %effective.window.start(),
        window_end = %effective.window.end(),
        "config resolved"
    );

    let model = commitguard_repo::build_repo_model(input.repo_root, input.vcs, effective);

    let DomainReport { report, data } = commitguard_domain::evaluate(&model, effective);
    info!(
        overall_passed = report.overall_passed,
        checks_run = data.checks_run,
        checks_failed = data.checks_failed,
        "evaluation finished"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "commitguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: report.verdict(),
        report,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map the aggregated outcome to a process exit code: 0 = passed, 1 = failed.
pub fn report_exit_code(report: &Report) -> i32 {
    if report.overall_passed { 0 } else { 1 }
}

/// Read the config file: an explicit path must exist; the default
/// `commitguard.toml` in the repository root is optional.
pub fn load_config_text(repo_root: &Utf8Path, explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                repo_root.join(path)
            };
            std::fs::read_to_string(&path).with_context(|| format!("read config {path}"))
        }
        None => {
            let path = repo_root.join(CONFIG_FILE_NAME);
            if path.exists() {
                std::fs::read_to_string(&path).with_context(|| format!("read config {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitguard_repo::FixtureHistory;
    use commitguard_types::CheckResult;

    const WINDOW: &str = "[window]\nstart = \"2025-03-01T09:00:00Z\"\nend = \"2025-03-02T09:00:00Z\"\n";

    #[test]
    fn missing_tool_fails_before_config_is_read() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let vcs = FixtureHistory::default();

        let err = run_check(CheckInput {
            repo_root: root,
            config_text: "not = [valid toml",
            overrides: Overrides::default(),
            vcs: &vcs,
        })
        .expect_err("tool missing");

        assert!(format!("{err:#}").contains("not available"));
    }

    #[test]
    fn empty_config_without_window_is_an_error() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let vcs = FixtureHistory::with_commit_log("");

        let err = run_check(CheckInput {
            repo_root: root,
            config_text: "",
            overrides: Overrides::default(),
            vcs: &vcs,
        })
        .expect_err("window required");

        assert!(format!("{err:#}").contains("no event window configured"));
    }

    #[test]
    fn empty_repository_fails_with_default_profile() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let vcs = FixtureHistory::with_commit_log("");

        let out = run_check(CheckInput {
            repo_root: root,
            config_text: WINDOW,
            overrides: Overrides::default(),
            vcs: &vcs,
        })
        .expect("run_check");

        assert_eq!(out.resolved_config.effective.profile, "standard");
        assert_eq!(out.report.schema, SCHEMA_REPORT_V1);
        assert!(!out.report.report.overall_passed);
        assert_eq!(report_exit_code(&out.report.report), 1);
    }

    #[test]
    fn exit_codes_follow_overall_passed() {
        let passed = Report::from_results(vec![CheckResult::new("a", true, Vec::new())]);
        let failed = Report::from_results(vec![
            CheckResult::new("a", true, Vec::new()),
            CheckResult::new("b", false, Vec::new()),
        ]);
        assert_eq!(report_exit_code(&passed), 0);
        assert_eq!(report_exit_code(&failed), 1);
    }

    #[test]
    fn default_config_file_is_optional_but_explicit_one_is_not() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");

        assert_eq!(load_config_text(root, None).expect("optional"), "");
        assert!(load_config_text(root, Some(Utf8Path::new("custom.toml"))).is_err());

        std::fs::write(root.join(CONFIG_FILE_NAME), WINDOW).expect("write config");
        assert_eq!(load_config_text(root, None).expect("default"), WINDOW);
    }
}
