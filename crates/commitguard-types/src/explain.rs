//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after illustration.
    pub examples: ExamplePair,
}

/// Before and after illustration (shell session or log excerpt).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// State that triggers the diagnostic.
    pub before: &'static str,
    /// State that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_MARKER_PRESENT => Some(explain_marker_present()),
        ids::CHECK_WINDOW_BOUNDS => Some(explain_window_bounds()),
        ids::CHECK_COMMITS_FREQUENCY => Some(explain_commits_frequency()),
        ids::CHECK_COMMITS_MESSAGE_QUALITY => Some(explain_message_quality()),
        ids::CHECK_HISTORY_INTEGRITY => Some(explain_history_integrity()),
        ids::CHECK_PROJECT_ARTIFACTS => Some(explain_project_artifacts()),

        // Codes
        ids::CODE_MARKER_MISSING => Some(explain_marker_missing()),
        ids::CODE_NO_COMMITS => Some(explain_no_commits()),
        ids::CODE_STARTS_BEFORE_WINDOW => Some(explain_starts_before_window()),
        ids::CODE_ENDS_AFTER_WINDOW => Some(explain_ends_after_window()),
        ids::CODE_INSUFFICIENT_COMMITS => Some(explain_insufficient_commits()),
        ids::CODE_SINGLE_COMMIT => Some(explain_single_commit()),
        ids::CODE_CLUSTERED_COMMITS => Some(explain_clustered_commits()),
        ids::CODE_LOW_INFORMATION_MESSAGES => Some(explain_low_information_messages()),
        ids::CODE_OPERATION_LOG_UNREADABLE => Some(explain_operation_log_unreadable()),
        ids::CODE_REWRITE_DETECTED => Some(explain_rewrite_detected()),
        ids::CODE_DESCRIPTION_MISSING => Some(explain_description_missing()),
        ids::CODE_SOURCE_MISSING => Some(explain_source_missing()),
        ids::CODE_DESCRIPTION_BOILERPLATE => Some(explain_description_boilerplate()),

        _ => None,
    }
}

/// List all known check IDs, in aggregator order.
pub fn all_check_ids() -> &'static [&'static str] {
    &ids::CHECK_ORDER
}

/// List all codes that have an explanation (failures and warnings).
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MARKER_MISSING,
        ids::CODE_NO_COMMITS,
        ids::CODE_STARTS_BEFORE_WINDOW,
        ids::CODE_ENDS_AFTER_WINDOW,
        ids::CODE_INSUFFICIENT_COMMITS,
        ids::CODE_SINGLE_COMMIT,
        ids::CODE_CLUSTERED_COMMITS,
        ids::CODE_LOW_INFORMATION_MESSAGES,
        ids::CODE_OPERATION_LOG_UNREADABLE,
        ids::CODE_REWRITE_DETECTED,
        ids::CODE_DESCRIPTION_MISSING,
        ids::CODE_SOURCE_MISSING,
        ids::CODE_DESCRIPTION_BOILERPLATE,
    ]
}

// --- Check-level explanations ---

fn explain_marker_present() -> Explanation {
    Explanation {
        title: "Start Marker Present",
        description: "\
Verifies that the start marker file exists in the working tree.

The marker is committed at the very beginning of the event. Its presence (and the
commit that introduced it) attests that work started inside the window. Its content
is displayed for reference but not validated.",
        remediation: explain_marker_missing().remediation,
        examples: explain_marker_missing().examples,
    }
}

fn explain_window_bounds() -> Explanation {
    Explanation {
        title: "Commits Inside Time Window",
        description: "\
Verifies that the first commit is not earlier than the window start and the last
commit is not later than the window end. Both boundaries are inclusive and compared
as instants, so commits made in any time zone are handled correctly.

The initial setup commit that adds the start marker is excluded from the history
before this check runs.",
        remediation: "\
Work that predates the window cannot be submitted. Start a fresh repository inside
the window. Commits after the window end are not considered; stop pushing once the
window closes.",
        examples: ExamplePair {
            before: "\
2025-03-01T08:10:00+00:00  Add initial scaffolding   (window opens 09:00)",
            after: "\
2025-03-01T09:20:00+00:00  Add initial scaffolding",
        },
    }
}

fn explain_commits_frequency() -> Explanation {
    Explanation {
        title: "Commit Frequency and Distribution",
        description: "\
Counts the commits inside the window and compares them to the configured minimum.
A history consisting of a single commit always fails: one commit cannot show
incremental work.

The window is also split into four equal quarters. When more quarters than allowed
contain no commits, a warning is emitted. Distribution never fails the check.",
        remediation: "\
Commit small, self-contained steps as you go instead of one large upload at the end.",
        examples: explain_insufficient_commits().examples,
    }
}

fn explain_message_quality() -> Explanation {
    Explanation {
        title: "Commit Message Quality",
        description: "\
Flags commit messages that are too short or match a banned low-information token
(`fix`, `wip`, `update`, ...). When more than half of the messages inside the window
are flagged, a warning is emitted. This check is advisory and always passes.",
        remediation: explain_low_information_messages().remediation,
        examples: explain_low_information_messages().examples,
    }
}

fn explain_history_integrity() -> Explanation {
    Explanation {
        title: "History Integrity",
        description: "\
Reads the git reflog (the local record of ref movements). The check passes when the
reflog can be read. Entries mentioning rebases, resets, amends or forced updates
produce warnings for human review; legitimate recovery work can create them too.",
        remediation: explain_rewrite_detected().remediation,
        examples: explain_rewrite_detected().examples,
    }
}

fn explain_project_artifacts() -> Explanation {
    Explanation {
        title: "Project Artifacts",
        description: "\
Verifies that a description document exists and that at least one source file or a
conventional source directory is present at the top level of the repository. A
description that is very short or still contains template placeholders produces a
warning.",
        remediation: "\
Describe the project in the description document and commit your source code.",
        examples: explain_description_missing().examples,
    }
}

// --- Code-level explanations ---

fn explain_marker_missing() -> Explanation {
    Explanation {
        title: "Start Marker Missing",
        description: "\
The configured start marker file does not exist in the working tree.",
        remediation: "\
Create the marker with the current UTC time, then add and commit it:

    date -u +%Y-%m-%dT%H:%M:%SZ > .commitguard-start
    git add .commitguard-start
    git commit -m \"Initialize commitguard timeline marker\"",
        examples: ExamplePair {
            before: "$ ls -a\n.  ..  .git  README.md  src",
            after: "$ ls -a\n.  ..  .commitguard-start  .git  README.md  src",
        },
    }
}

fn explain_no_commits() -> Explanation {
    Explanation {
        title: "No Commits Found",
        description: "\
The commit log is empty, could not be read, or only contains the setup commit.",
        remediation: "\
Run commitguard from inside the project repository and make sure your work is committed.",
        examples: ExamplePair {
            before: "$ git log --oneline\nfatal: your current branch 'main' does not have any commits yet",
            after: "$ git log --oneline\n3f2a1c9 Add chat interface with guiding questions",
        },
    }
}

fn explain_starts_before_window() -> Explanation {
    Explanation {
        title: "History Starts Before Window",
        description: "\
The oldest commit predates the window start. The diagnostic reports how many minutes
early it was (a negative offset).",
        remediation: explain_window_bounds().remediation,
        examples: explain_window_bounds().examples,
    }
}

fn explain_ends_after_window() -> Explanation {
    Explanation {
        title: "History Ends After Window",
        description: "\
The newest commit is later than the window end. The diagnostic reports how many
minutes late it was (a positive offset).",
        remediation: "\
Reset the submission branch to the last commit made before the deadline, or ask the
organizers how late commits are handled.",
        examples: ExamplePair {
            before: "\
2025-03-02T09:45:00+00:00  Polish README   (window closes 09:00)",
            after: "\
2025-03-02T08:55:00+00:00  Polish README",
        },
    }
}

fn explain_insufficient_commits() -> Explanation {
    Explanation {
        title: "Not Enough Commits",
        description: "\
Fewer commits than the configured minimum fall inside the window.",
        remediation: "\
Keep committing as you work. The diagnostic states how many more commits are needed.",
        examples: ExamplePair {
            before: "$ git log --oneline\na1b2c3d Build everything",
            after: "\
$ git log --oneline
e5f6a7b Add export to PDF
c3d4e5f Store answers in JSON
b2c3d4e Add question flow
a1b2c3d Scaffold web app
9f8e7d6 Describe project in README",
        },
    }
}

fn explain_single_commit() -> Explanation {
    Explanation {
        title: "Single Commit History",
        description: "\
Exactly one commit falls inside the window. This fails regardless of the configured
minimum, because a single commit cannot demonstrate incremental work.",
        remediation: explain_insufficient_commits().remediation,
        examples: explain_insufficient_commits().examples,
    }
}

fn explain_clustered_commits() -> Explanation {
    Explanation {
        title: "Clustered Commits",
        description: "\
More quarters of the window than allowed contain no commits. This is a warning only:
it often indicates work that was done elsewhere and uploaded in bursts.",
        remediation: "\
Commit throughout the event rather than in one sitting.",
        examples: ExamplePair {
            before: "commits per quarter: [3, 0, 0, 2]",
            after: "commits per quarter: [2, 1, 1, 2]",
        },
    }
}

fn explain_low_information_messages() -> Explanation {
    Explanation {
        title: "Low-Information Commit Messages",
        description: "\
More than half of the commit messages inside the window are shorter than the
configured minimum or equal to a banned token such as `fix`, `wip` or `update`.",
        remediation: "\
Write messages that say what changed, in the imperative mood.",
        examples: ExamplePair {
            before: "fix\nwip\nx",
            after: "Add chat interface with guiding questions\nStore answers in JSON",
        },
    }
}

fn explain_operation_log_unreadable() -> Explanation {
    Explanation {
        title: "Operation Log Unreadable",
        description: "\
`git reflog` could not be read, so the history cannot be reviewed for rewrites.",
        remediation: "\
Run commitguard inside the original working copy rather than a fresh export.",
        examples: ExamplePair {
            before: "$ git reflog\nfatal: not a git repository",
            after: "$ git reflog\n3f2a1c9 HEAD@{0}: commit: Add chat interface",
        },
    }
}

fn explain_rewrite_detected() -> Explanation {
    Explanation {
        title: "History Rewrite Detected",
        description: "\
The reflog mentions operations that rewrite history (rebase, reset, amend, forced
updates). This is a warning for human review, not a failure.",
        remediation: "\
No action is required if the rewrite was a legitimate recovery. Avoid rewriting
history to change commit timestamps.",
        examples: ExamplePair {
            before: "a1b2c3d HEAD@{1}: rebase (start): checkout HEAD~3",
            after: "a1b2c3d HEAD@{1}: commit: Add question flow",
        },
    }
}

fn explain_description_missing() -> Explanation {
    Explanation {
        title: "Description Document Missing",
        description: "\
The configured description document (README.md by default) does not exist.",
        remediation: "\
Add a description document explaining what the project does and how to run it.",
        examples: ExamplePair {
            before: "$ ls\nsrc",
            after: "$ ls\nREADME.md  src",
        },
    }
}

fn explain_source_missing() -> Explanation {
    Explanation {
        title: "Source Files Missing",
        description: "\
No top-level file matches a recognized source extension and no conventional source
directory (`src`, `app`, ...) exists.",
        remediation: "\
Commit your source code, either at the top level or in a conventional source directory.",
        examples: ExamplePair {
            before: "$ ls\nREADME.md",
            after: "$ ls\nREADME.md  app.py",
        },
    }
}

fn explain_description_boilerplate() -> Explanation {
    Explanation {
        title: "Description Looks Like Boilerplate",
        description: "\
The description document exists but is unexpectedly short or still contains a
template placeholder.",
        remediation: "\
Replace template placeholders with a real description of the project.",
        examples: ExamplePair {
            before: "# [Project Name]\n\nTODO: describe your project",
            after: "# Memory Keeper\n\nGuides grandparents through questions and turns answers into a blog.",
        },
    }
}
