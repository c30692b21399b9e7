//! End-to-end scenarios for the check use case over an in-memory history and a
//! temporary working tree.

use camino::{Utf8Path, Utf8PathBuf};
use commitguard_app::{
    CheckInput, CheckOutput, TextOptions, render_markdown, render_text, report_exit_code,
    run_check, serialize_report,
};
use commitguard_repo::FixtureHistory;
use commitguard_settings::Overrides;
use commitguard_test_util::normalize_nondeterministic;
use commitguard_types::{Severity, Verdict, ids};
use tempfile::TempDir;

const CONFIG: &str = r#"
profile = "standard"

[window]
start = "2025-03-01T09:00:00Z"
end = "2025-03-02T09:00:00Z"
"#;

const README: &str = "# Memory Keeper\n\n\
Memory Keeper walks grandparents through a short list of questions, stores their \
answers, and turns them into a blog post the family can keep.\n";

const SENTINEL: &str = "Initialize commitguard timeline marker";

/// Newest first, as `git log` prints it.
fn log(commits: &[(&str, &str, &str)]) -> String {
    commits
        .iter()
        .rev()
        .map(|(id, ts, msg)| format!("{id}\u{1f}{ts}\u{1f}{msg}\n"))
        .collect()
}

struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

fn workspace(files: &[(&str, &str)]) -> Workspace {
    let tmp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
    for (name, content) in files {
        std::fs::write(root.join(name), content).expect("write file");
    }
    Workspace { _tmp: tmp, root }
}

fn check(root: &Utf8Path, config: &str, vcs: &FixtureHistory) -> CheckOutput {
    run_check(CheckInput {
        repo_root: root,
        config_text: config,
        overrides: Overrides::default(),
        vcs,
    })
    .expect("run_check")
}

fn compliant_history() -> FixtureHistory {
    FixtureHistory {
        available: true,
        commit_log: Some(log(&[
            ("0000001aaaaaaa", "2025-03-01T09:05:00+00:00", SENTINEL),
            ("1a2b3c4d5e6f70", "2025-03-01T09:30:00+00:00", "Scaffold Streamlit app with question list"),
            ("2b3c4d5e6f7081", "2025-03-01T13:00:00+00:00", "Store answers in a JSON data file"),
            ("3c4d5e6f708192", "2025-03-01T16:00:00+00:00", "Add text-to-speech playback for questions"),
            ("4d5e6f708192a3", "2025-03-01T22:30:00+00:00", "Generate blog post from collected answers"),
            ("5e6f708192a3b4", "2025-03-02T04:00:00+01:00", "Export generated blog as PDF"),
            ("6f708192a3b4c5", "2025-03-02T08:45:00+00:00", "Describe setup steps in README"),
        ])),
        operation_log: Some(
            "6f70819 HEAD@{0}: commit: Describe setup steps in README\n\
             0000001 HEAD@{6}: commit (initial): Initialize commitguard timeline marker\n"
                .to_string(),
        ),
    }
}

#[test]
fn compliant_repository_passes_every_check() {
    let ws = workspace(&[
        (".commitguard-start", "2025-03-01T09:05:00Z\n"),
        ("README.md", README),
        ("app.py", "import streamlit as st\n"),
    ]);

    let out = check(&ws.root, CONFIG, &compliant_history());
    let report = &out.report.report;

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ids::CHECK_ORDER.to_vec());
    assert!(report.results.iter().all(|r| r.passed), "{report:#?}");
    assert!(report.overall_passed);
    assert_eq!(out.report.verdict, Verdict::Pass);
    assert_eq!(report_exit_code(report), 0);

    assert_eq!(out.report.data.commits_total, 6);
    assert_eq!(out.report.data.commits_in_window, 6);
    assert_eq!(out.report.data.checks_failed, 0);
}

#[test]
fn clustered_history_without_marker_fails() {
    let ws = workspace(&[("README.md", README), ("app.py", "")]);
    let vcs = FixtureHistory::with_commit_log(log(&[
        ("aaaaaaa1", "2025-03-01T09:30:00Z", "Set up project skeleton"),
        ("bbbbbbb2", "2025-03-01T10:00:00Z", "Add question prompts"),
        ("ccccccc3", "2025-03-01T10:30:00Z", "Save answers to disk"),
    ]));

    let out = check(&ws.root, CONFIG, &vcs);
    let report = &out.report.report;

    let marker = report.result(ids::CHECK_MARKER_PRESENT).expect("marker ran");
    assert!(!marker.passed);
    assert!(marker.has_code(ids::CODE_MARKER_MISSING));

    let window = report.result(ids::CHECK_WINDOW_BOUNDS).expect("window ran");
    assert!(window.passed);

    let frequency = report.result(ids::CHECK_COMMITS_FREQUENCY).expect("frequency ran");
    assert!(!frequency.passed);
    let insufficient = frequency
        .diagnostic(ids::CODE_INSUFFICIENT_COMMITS)
        .expect("count diagnostic");
    assert!(insufficient.message.contains("need 2 more"));
    let clustered = frequency
        .diagnostic(ids::CODE_CLUSTERED_COMMITS)
        .expect("distribution warning");
    assert_eq!(clustered.severity, Severity::Warning);
    assert!(clustered.message.contains("[3, 0, 0, 0]"));

    assert!(!report.overall_passed);
    assert_eq!(out.report.verdict, Verdict::Fail);
    assert_eq!(report_exit_code(report), 1);
    assert_eq!(out.report.data.checks_failed, 2);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let ws = workspace(&[
        (".commitguard-start", "start\n"),
        ("README.md", README),
        ("app.py", ""),
    ]);
    let vcs = compliant_history();

    let render = |out: &CheckOutput| {
        let bytes = serialize_report(&out.report).expect("serialize");
        normalize_nondeterministic(serde_json::from_slice(&bytes).expect("json"))
    };

    let first = check(&ws.root, CONFIG, &vcs);
    let second = check(&ws.root, CONFIG, &vcs);

    assert_eq!(render(&first), render(&second));
    assert_eq!(
        render_text(&first.report, TextOptions::default()),
        render_text(&second.report, TextOptions::default())
    );
}

#[test]
fn disabled_checks_are_left_out() {
    let ws = workspace(&[(".commitguard-start", "start\n")]);
    let config = format!("{CONFIG}\n[checks.\"project.artifacts\"]\nenabled = false\n");

    let out = check(&ws.root, &config, &compliant_history());
    let report = &out.report.report;

    assert!(report.result(ids::CHECK_PROJECT_ARTIFACTS).is_none());
    assert_eq!(report.results.len(), ids::CHECK_ORDER.len() - 1);
    assert!(report.overall_passed);
}

#[test]
fn overrides_replace_window_and_minimum() {
    let ws = workspace(&[
        (".commitguard-start", "start\n"),
        ("README.md", README),
        ("app.py", ""),
    ]);

    let out = run_check(CheckInput {
        repo_root: &ws.root,
        config_text: "",
        overrides: Overrides {
            profile: Some("strict".to_string()),
            window_start: Some("2025-03-01T09:00:00Z".to_string()),
            window_end: Some("2025-03-02T09:00:00Z".to_string()),
            minimum_commits: Some(6),
        },
        vcs: &compliant_history(),
    })
    .expect("run_check");

    assert_eq!(out.report.data.profile, "strict");
    let frequency = out
        .report
        .report
        .result(ids::CHECK_COMMITS_FREQUENCY)
        .expect("frequency ran");
    assert!(frequency.passed);
}

#[test]
fn unreadable_operation_log_fails_history_integrity() {
    let ws = workspace(&[
        (".commitguard-start", "start\n"),
        ("README.md", README),
        ("app.py", ""),
    ]);
    let mut vcs = compliant_history();
    vcs.operation_log = None;

    let out = check(&ws.root, CONFIG, &vcs);
    let history = out
        .report
        .report
        .result(ids::CHECK_HISTORY_INTEGRITY)
        .expect("history ran");
    assert!(!history.passed);
    assert!(history.has_code(ids::CODE_OPERATION_LOG_UNREADABLE));
}

#[test]
fn markdown_summarizes_failures() {
    let ws = workspace(&[]);
    let vcs = FixtureHistory::with_commit_log("");

    let out = check(&ws.root, CONFIG, &vcs);
    let md = render_markdown(&out.report);

    assert!(md.contains("Verdict: **FAIL**"));
    assert!(md.contains("`no_commits`: no commits found"));
}
