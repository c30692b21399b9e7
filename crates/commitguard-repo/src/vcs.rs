use camino::Utf8Path;
use std::io;
use std::process::Command;
use tracing::debug;

use crate::log::LOG_FORMAT;

#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("`{program}` is not available: {reason}")]
    ToolUnavailable { program: String, reason: String },

    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// The version-control seam. Implementations only read.
pub trait VersionControl {
    /// Fails with [`VcsError::ToolUnavailable`] when the tool cannot be run at all.
    fn ensure_available(&self) -> Result<(), VcsError>;

    /// Raw commit log in [`LOG_FORMAT`], newest first.
    fn commit_log(&self, repo_root: &Utf8Path) -> Result<String, VcsError>;

    /// Raw reference-movement log (`git reflog`).
    fn operation_log(&self, repo_root: &Utf8Path) -> Result<String, VcsError>;
}

/// Production implementation: shells out to the `git` executable.
#[derive(Clone, Debug)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::with_program("git")
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, repo_root: Option<&Utf8Path>, args: &[&str]) -> Result<String, VcsError> {
        let command = format!("{} {}", self.program, args.join(" "));
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(root) = repo_root {
            cmd.current_dir(root);
        }

        debug!(%command, "running");
        let output = cmd.output().map_err(|source| VcsError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn ensure_available(&self) -> Result<(), VcsError> {
        match self.run(None, &["--version"]) {
            Ok(version) => {
                debug!(version = version.trim(), "git available");
                Ok(())
            }
            Err(VcsError::Spawn { source, .. }) => Err(VcsError::ToolUnavailable {
                program: self.program.clone(),
                reason: source.to_string(),
            }),
            Err(other) => Err(VcsError::ToolUnavailable {
                program: self.program.clone(),
                reason: other.to_string(),
            }),
        }
    }

    fn commit_log(&self, repo_root: &Utf8Path) -> Result<String, VcsError> {
        self.run(
            Some(repo_root),
            &["-c", "log.showSignature=false", "log", LOG_FORMAT],
        )
    }

    fn operation_log(&self, repo_root: &Utf8Path) -> Result<String, VcsError> {
        self.run(Some(repo_root), &["reflog"])
    }
}

/// In-memory history for tests and dry runs.
///
/// `None` for a log makes the corresponding call fail the way a missing repository would.
#[derive(Clone, Debug, Default)]
pub struct FixtureHistory {
    pub available: bool,
    pub commit_log: Option<String>,
    pub operation_log: Option<String>,
}

impl FixtureHistory {
    /// Available tool, given commit log, empty operation log.
    pub fn with_commit_log(raw: impl Into<String>) -> Self {
        Self {
            available: true,
            commit_log: Some(raw.into()),
            operation_log: Some(String::new()),
        }
    }

    fn missing(what: &str) -> VcsError {
        VcsError::CommandFailed {
            command: format!("fixture {what}"),
            status: "exit status: 128".to_string(),
            stderr: "fatal: not a git repository".to_string(),
        }
    }
}

impl VersionControl for FixtureHistory {
    fn ensure_available(&self) -> Result<(), VcsError> {
        if self.available {
            Ok(())
        } else {
            Err(VcsError::ToolUnavailable {
                program: "git".to_string(),
                reason: "not installed".to_string(),
            })
        }
    }

    fn commit_log(&self, _repo_root: &Utf8Path) -> Result<String, VcsError> {
        self.commit_log.clone().ok_or_else(|| Self::missing("log"))
    }

    fn operation_log(&self, _repo_root: &Utf8Path) -> Result<String, VcsError> {
        self.operation_log
            .clone()
            .ok_or_else(|| Self::missing("reflog"))
    }
}
