//! Repository adapters: run git, extract commit records, snapshot the working tree.
//!
//! This crate is allowed to do IO and to spawn `git`. It never writes to the
//! repository. Everything it reads is folded into a [`RepoModel`] for the engine.

#![forbid(unsafe_code)]

mod log;
mod vcs;
mod workspace;

use camino::Utf8Path;
use commitguard_domain::model::RepoModel;
use commitguard_domain::policy::EffectiveConfig;
use tracing::{debug, info};

pub use log::{LOG_FORMAT, parse_commit_log};
pub use vcs::{FixtureHistory, GitCli, VcsError, VersionControl};
pub use workspace::probe_workspace;

/// Build the in-memory repository model used by the policy engine.
///
/// An unreadable commit log yields an empty history and an unreadable
/// operation log yields `None`; both become check failures, not errors.
/// Tool availability is the caller's precondition (see [`VersionControl::ensure_available`]).
pub fn build_repo_model(
    repo_root: &Utf8Path,
    vcs: &dyn VersionControl,
    cfg: &EffectiveConfig,
) -> RepoModel {
    let commits = match vcs.commit_log(repo_root) {
        Ok(raw) => parse_commit_log(&raw, &cfg.history.sentinel_message),
        Err(err) => {
            debug!(error = %err, "commit log unavailable; treating history as empty");
            Vec::new()
        }
    };

    let operation_log = match vcs.operation_log(repo_root) {
        Ok(raw) => Some(raw),
        Err(err) => {
            debug!(error = %err, "operation log unavailable");
            None
        }
    };

    let workspace = probe_workspace(repo_root, &cfg.project);

    info!(
        commits = commits.len(),
        operation_log = operation_log.is_some(),
        entries = workspace.entries.len(),
        "repository model built"
    );

    RepoModel {
        commits,
        operation_log,
        workspace,
    }
}
