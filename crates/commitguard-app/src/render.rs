//! Render use cases: terminal text, Markdown, and GitHub annotations from a report.

use crate::report::to_renderable;
use commitguard_render::TextOptions;
use commitguard_types::CommitguardReportV1;

pub fn render_text(report: &CommitguardReportV1, opts: TextOptions) -> String {
    commitguard_render::render_text(&to_renderable(report), opts)
}

pub fn render_markdown(report: &CommitguardReportV1) -> String {
    commitguard_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &CommitguardReportV1, max: usize) -> Vec<String> {
    commitguard_render::render_github_annotations(&to_renderable(report))
        .into_iter()
        .take(max)
        .collect()
}
