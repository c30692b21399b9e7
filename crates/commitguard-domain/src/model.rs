use time::OffsetDateTime;

/// One commit extracted from the version-control log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRecord {
    /// Opaque hash string, unique within a sequence.
    pub id: String,
    pub timestamp: OffsetDateTime,
    pub message: String,
}

impl CommitRecord {
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopLevelEntry {
    pub name: String,
    pub is_dir: bool,
}

/// What was found at a configured path in the working tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileState {
    #[default]
    Missing,
    /// Exists, but the content could not be read.
    Unreadable,
    /// Content decoded lossily, possibly empty.
    Read(String),
}

impl FileState {
    pub fn exists(&self) -> bool {
        !matches!(self, FileState::Missing)
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            FileState::Read(text) => Some(text),
            FileState::Missing | FileState::Unreadable => None,
        }
    }
}

/// Filesystem facts about the working tree, captured once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub marker: FileState,

    pub description: FileState,

    /// Top-level working-tree listing, sorted by name, `.git` excluded.
    pub entries: Vec<TopLevelEntry>,
}

/// Everything the checks look at. Shared read-only by every check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoModel {
    /// Chronological, oldest first, sentinel commit removed.
    pub commits: Vec<CommitRecord>,

    /// Raw operation log text; `None` when it could not be read.
    pub operation_log: Option<String>,

    pub workspace: WorkspaceSnapshot,
}
