use commitguard_domain::policy::{HistoryPolicy, Policy, ProjectPolicy};

/// Profile names accepted by `profile = "..."` and `--profile`.
pub const PROFILES: [&str; 3] = ["standard", "lenient", "strict"];

pub const DEFAULT_PROFILE: &str = "standard";

/// Everything a profile decides. The window always comes from config.
#[derive(Clone, Debug)]
pub struct Preset {
    pub profile: String,
    pub policy: Policy,
    pub project: ProjectPolicy,
    pub history: HistoryPolicy,
}

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything event-specific belongs in repo config.
pub fn preset(profile: &str) -> Option<Preset> {
    let (minimum_commits, minimum_message_length, max_allowed_empty_quarters) = match profile {
        "standard" => (5, 5, 1),
        "lenient" => (3, 3, 2),
        "strict" => (10, 10, 0),
        _ => return None,
    };

    Some(Preset {
        profile: profile.to_string(),
        policy: Policy {
            minimum_commits,
            minimum_message_length,
            banned_message_patterns: strings(BANNED_MESSAGES).into_iter().collect(),
            max_allowed_empty_quarters,
        },
        project: default_project(),
        history: default_history(),
    })
}

const BANNED_MESSAGES: &[&str] = &[
    "fix", "fixes", "fixed", "wip", "update", "updates", "updated", "changes", "commit", "test",
    "stuff", "misc", "temp", "asdf", "done", ".", "-",
];

const SOURCE_GLOBS: &[&str] = &[
    "*.rs", "*.py", "*.ipynb", "*.js", "*.jsx", "*.ts", "*.tsx", "*.java", "*.kt", "*.go", "*.c",
    "*.h", "*.cpp", "*.hpp", "*.cs", "*.rb", "*.php", "*.swift", "*.dart", "*.html", "*.css",
    "*.vue", "*.svelte", "*.sh", "*.sql", "*.lua", "*.scala", "*.ex", "*.hs", "*.zig",
];

const SOURCE_DIRS: &[&str] = &[
    "src", "app", "lib", "backend", "frontend", "server", "client", "api", "web", "pkg", "cmd",
    "scripts", "notebooks",
];

const PLACEHOLDER_TOKENS: &[&str] = &["[project name]", "{{", "lorem ipsum", "todo: describe"];

const REWRITE_KEYWORDS: &[&str] = &["rebase", "reset", "amend", "filter-branch", "force"];

fn default_project() -> ProjectPolicy {
    ProjectPolicy {
        marker_file: ".commitguard-start".to_string(),
        description_file: "README.md".to_string(),
        source_globs: strings(SOURCE_GLOBS),
        source_dirs: strings(SOURCE_DIRS),
        placeholder_tokens: strings(PLACEHOLDER_TOKENS),
        min_description_bytes: 120,
    }
}

fn default_history() -> HistoryPolicy {
    HistoryPolicy {
        sentinel_message: "Initialize commitguard timeline marker".to_string(),
        rewrite_keywords: strings(REWRITE_KEYWORDS),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
