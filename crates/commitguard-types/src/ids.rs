//! Stable identifiers for checks and diagnostic codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_MARKER_PRESENT: &str = "marker.present";
pub const CHECK_WINDOW_BOUNDS: &str = "window.bounds";
pub const CHECK_COMMITS_FREQUENCY: &str = "commits.frequency";
pub const CHECK_COMMITS_MESSAGE_QUALITY: &str = "commits.message_quality";
pub const CHECK_HISTORY_INTEGRITY: &str = "history.integrity";
pub const CHECK_PROJECT_ARTIFACTS: &str = "project.artifacts";

/// Order in which the aggregator runs checks.
pub const CHECK_ORDER: [&str; 6] = [
    CHECK_MARKER_PRESENT,
    CHECK_WINDOW_BOUNDS,
    CHECK_COMMITS_FREQUENCY,
    CHECK_COMMITS_MESSAGE_QUALITY,
    CHECK_HISTORY_INTEGRITY,
    CHECK_PROJECT_ARTIFACTS,
];

// Codes: marker.present
pub const CODE_MARKER_MISSING: &str = "marker_missing";
pub const CODE_MARKER_CONTENT: &str = "marker_content";

// Codes: window.bounds
pub const CODE_NO_COMMITS: &str = "no_commits";
pub const CODE_STARTS_BEFORE_WINDOW: &str = "starts_before_window";
pub const CODE_ENDS_AFTER_WINDOW: &str = "ends_after_window";
pub const CODE_WITHIN_WINDOW: &str = "within_window";

// Codes: commits.frequency
pub const CODE_COMMIT_COUNT: &str = "commit_count";
pub const CODE_INSUFFICIENT_COMMITS: &str = "insufficient_commits";
pub const CODE_SINGLE_COMMIT: &str = "single_commit";
pub const CODE_CLUSTERED_COMMITS: &str = "clustered_commits";

// Codes: commits.message_quality
pub const CODE_MESSAGE_SUMMARY: &str = "message_summary";
pub const CODE_LOW_INFORMATION_MESSAGES: &str = "low_information_messages";

// Codes: history.integrity
pub const CODE_OPERATION_LOG_READ: &str = "operation_log_read";
pub const CODE_OPERATION_LOG_UNREADABLE: &str = "operation_log_unreadable";
pub const CODE_REWRITE_DETECTED: &str = "rewrite_detected";

// Codes: project.artifacts
pub const CODE_DESCRIPTION_MISSING: &str = "description_missing";
pub const CODE_SOURCE_MISSING: &str = "source_missing";
pub const CODE_DESCRIPTION_BOILERPLATE: &str = "description_boilerplate";
pub const CODE_ARTIFACTS_FOUND: &str = "artifacts_found";

// Tool-level
pub const CODE_INTERNAL_ERROR: &str = "internal_error";
