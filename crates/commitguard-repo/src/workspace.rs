use camino::Utf8Path;
use commitguard_domain::model::{FileState, TopLevelEntry, WorkspaceSnapshot};
use commitguard_domain::policy::ProjectPolicy;
use tracing::{debug, warn};

/// Snapshot the facts the artifact and marker checks need: marker content,
/// description content, and the top-level listing (sorted, `.git` excluded).
///
/// Existence and content are probed separately: a file that exists but cannot be
/// read is `FileState::Unreadable`, not missing.
pub fn probe_workspace(repo_root: &Utf8Path, project: &ProjectPolicy) -> WorkspaceSnapshot {
    WorkspaceSnapshot {
        marker: inspect_file(repo_root, &project.marker_file),
        description: inspect_file(repo_root, &project.description_file),
        entries: list_top_level(repo_root),
    }
}

fn inspect_file(repo_root: &Utf8Path, rel: &str) -> FileState {
    let path = repo_root.join(rel);
    if !path.exists() {
        return FileState::Missing;
    }
    match std::fs::read(&path) {
        Ok(bytes) => FileState::Read(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            debug!(%path, error = %err, "exists but not readable");
            FileState::Unreadable
        }
    }
}

fn list_top_level(repo_root: &Utf8Path) -> Vec<TopLevelEntry> {
    let read_dir = match std::fs::read_dir(repo_root) {
        Ok(rd) => rd,
        Err(err) => {
            warn!(root = %repo_root, error = %err, "cannot list working tree");
            return Vec::new();
        }
    };

    let mut entries: Vec<TopLevelEntry> = read_dir
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == ".git" {
                return None;
            }
            Some(TopLevelEntry {
                is_dir: entry.path().is_dir(),
                name,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
