use crate::model::{CommitRecord, FileState, RepoModel, TopLevelEntry, WorkspaceSnapshot};
use crate::policy::{EffectiveConfig, HistoryPolicy, Policy, ProjectPolicy, TimeWindow};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const README: &str = "# Memory Keeper\n\n\
Memory Keeper walks grandparents through a short list of questions, stores their \
answers, and turns them into a blog post the family can keep.\n";

pub fn ts(s: &str) -> OffsetDateTime {
    OffsetDateTime::parse(s, &Rfc3339).expect("valid RFC 3339 timestamp")
}

pub fn commit(id: &str, timestamp: &str, message: &str) -> CommitRecord {
    CommitRecord {
        id: id.to_string(),
        timestamp: ts(timestamp),
        message: message.to_string(),
    }
}

/// 24 hours; quarters start at 09:00, 15:00, 21:00 and 03:00 UTC.
pub fn window() -> TimeWindow {
    TimeWindow::new(ts("2025-03-01T09:00:00Z"), ts("2025-03-02T09:00:00Z")).expect("valid window")
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        window: window(),
        policy: Policy {
            minimum_commits: 5,
            minimum_message_length: 5,
            banned_message_patterns: ["fix", "wip", "update", "test", "commit"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_allowed_empty_quarters: 1,
        },
        project: ProjectPolicy {
            marker_file: ".commitguard-start".to_string(),
            description_file: "README.md".to_string(),
            source_globs: vec!["*.py".to_string(), "*.rs".to_string(), "*.js".to_string()],
            source_dirs: vec!["src".to_string(), "app".to_string()],
            placeholder_tokens: vec!["[project name]".to_string(), "{{".to_string()],
            min_description_bytes: 120,
        },
        history: HistoryPolicy {
            sentinel_message: "Initialize commitguard timeline marker".to_string(),
            rewrite_keywords: vec!["rebase".to_string(), "reset".to_string(), "amend".to_string()],
        },
        checks: BTreeMap::new(),
    }
}

/// Six commits, at least one in every quarter.
pub fn spread_commits() -> Vec<CommitRecord> {
    vec![
        commit("a1b2c3d4e5", "2025-03-01T09:30:00Z", "Scaffold Streamlit app with question list"),
        commit("b2c3d4e5f6", "2025-03-01T13:00:00Z", "Store answers in a JSON data file"),
        commit("c3d4e5f6a7", "2025-03-01T16:00:00Z", "Add text-to-speech playback for questions"),
        commit("d4e5f6a7b8", "2025-03-01T22:30:00Z", "Generate blog post from collected answers"),
        commit("e5f6a7b8c9", "2025-03-02T04:00:00+01:00", "Export generated blog as PDF"),
        commit("f6a7b8c9d0", "2025-03-02T08:45:00Z", "Describe setup steps in README"),
    ]
}

pub fn entry(name: &str, is_dir: bool) -> TopLevelEntry {
    TopLevelEntry {
        name: name.to_string(),
        is_dir,
    }
}

/// A repository that passes every check.
pub fn full_model() -> RepoModel {
    RepoModel {
        commits: spread_commits(),
        operation_log: Some(
            "f6a7b8c HEAD@{0}: commit: Describe setup steps in README\n\
             a1b2c3d HEAD@{5}: commit (initial): Initialize commitguard timeline marker\n"
                .to_string(),
        ),
        workspace: WorkspaceSnapshot {
            marker: FileState::Read("2025-03-01T09:05:00Z\n".to_string()),
            description: FileState::Read(README.to_string()),
            entries: vec![
                entry(".commitguard-start", false),
                entry("README.md", false),
                entry("app.py", false),
            ],
        },
    }
}

pub fn model_with_commits(commits: Vec<CommitRecord>) -> RepoModel {
    RepoModel {
        commits,
        ..full_model()
    }
}
