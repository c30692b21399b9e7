use anyhow::Context;
use camino::Utf8Path;
use commitguard_render::{
    RenderableCheck, RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use commitguard_types::{CommitguardReportV1, SCHEMA_REPORT_V1, Severity, Verdict};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub fn parse_report_json(text: &str) -> anyhow::Result<CommitguardReportV1> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse commitguard report")
}

pub fn serialize_report(report: &CommitguardReportV1) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write an output artifact, creating parent directories as needed.
pub fn write_artifact(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}

pub fn to_renderable(report: &CommitguardReportV1) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        checks: report
            .report
            .results
            .iter()
            .map(|r| RenderableCheck {
                name: r.name.clone(),
                passed: r.passed,
                diagnostics: r
                    .diagnostics
                    .iter()
                    .map(|d| RenderableDiagnostic {
                        severity: match d.severity {
                            Severity::Info => RenderableSeverity::Info,
                            Severity::Warning => RenderableSeverity::Warning,
                            Severity::Error => RenderableSeverity::Error,
                        },
                        code: d.code.clone(),
                        message: d.message.clone(),
                        help: d.help.clone(),
                    })
                    .collect(),
            })
            .collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            window_start: rfc3339(report.data.window.start),
            window_end: rfc3339(report.data.window.end),
            commits_total: report.data.commits_total,
            commits_in_window: report.data.commits_in_window,
            checks_run: report.data.checks_run,
            checks_failed: report.data.checks_failed,
        },
    }
}

fn rfc3339(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}
