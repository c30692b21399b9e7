use crate::checks::utils::build_globset;
use crate::model::{FileState, RepoModel};
use crate::policy::{EffectiveConfig, ProjectPolicy};
use commitguard_types::{CheckResult, Diagnostic, ids};
use serde_json::json;

const MAX_LISTED: usize = 5;

pub fn run(model: &RepoModel, cfg: &EffectiveConfig) -> CheckResult {
    let project = &cfg.project;
    let description_file = project.description_file.as_str();

    let mut passed = true;
    let mut diagnostics = Vec::new();

    match &model.workspace.description {
        FileState::Missing => {
            passed = false;
            diagnostics.push(
                Diagnostic::error(
                    ids::CODE_DESCRIPTION_MISSING,
                    format!("description document `{description_file}` not found"),
                )
                .with_help("Add a description document explaining what the project does."),
            );
        }
        FileState::Unreadable => diagnostics.push(Diagnostic::warning(
            ids::CODE_DESCRIPTION_BOILERPLATE,
            format!("description `{description_file}` exists but could not be read; its content was not checked"),
        )),
        FileState::Read(text) => diagnostics.extend(boilerplate_warnings(text, project)),
    }

    let sources = source_entries(model, project);
    if sources.is_empty() {
        passed = false;
        diagnostics.push(
            Diagnostic::error(
                ids::CODE_SOURCE_MISSING,
                "no source files or source directories found at the top level",
            )
            .with_help(format!(
                "Commit source code at the top level or in one of: {}",
                project.source_dirs.join(", ")
            )),
        );
    } else {
        let listed: Vec<&str> = sources.iter().take(MAX_LISTED).copied().collect();
        let suffix = if sources.len() > MAX_LISTED { ", …" } else { "" };
        diagnostics.push(
            Diagnostic::info(
                ids::CODE_ARTIFACTS_FOUND,
                format!("source found: {}{suffix}", listed.join(", ")),
            )
            .with_data(json!({ "sources": sources })),
        );
    }

    CheckResult::new(ids::CHECK_PROJECT_ARTIFACTS, passed, diagnostics)
}

/// Top-level names that count as source: files matching a source glob, or
/// directories with a conventional source name.
pub fn source_entries<'a>(model: &'a RepoModel, project: &ProjectPolicy) -> Vec<&'a str> {
    let globs = build_globset(&project.source_globs);

    model
        .workspace
        .entries
        .iter()
        .filter(|entry| {
            if entry.is_dir {
                project
                    .source_dirs
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(&entry.name))
            } else {
                globs.as_ref().is_some_and(|set| set.is_match(&entry.name))
            }
        })
        .map(|entry| entry.name.as_str())
        .collect()
}

fn boilerplate_warnings(text: &str, project: &ProjectPolicy) -> Vec<Diagnostic> {
    let description_file = project.description_file.as_str();
    let mut out = Vec::new();

    let bytes = text.trim().len() as u64;
    if bytes < project.min_description_bytes {
        out.push(
            Diagnostic::warning(
                ids::CODE_DESCRIPTION_BOILERPLATE,
                format!(
                    "description `{description_file}` is only {bytes} bytes (expected at least {}); it may still be unedited boilerplate",
                    project.min_description_bytes
                ),
            )
            .with_data(json!({ "bytes": bytes })),
        );
    }

    let lower = text.to_lowercase();
    for token in &project.placeholder_tokens {
        if token.is_empty() || !lower.contains(&token.to_lowercase()) {
            continue;
        }
        out.push(
            Diagnostic::warning(
                ids::CODE_DESCRIPTION_BOILERPLATE,
                format!("description `{description_file}` still contains the placeholder `{token}`"),
            )
            .with_data(json!({ "placeholder": token })),
        );
    }

    out
}
