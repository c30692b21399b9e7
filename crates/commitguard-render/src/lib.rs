//! Rendering for human and CI surfaces (terminal text, Markdown, GitHub annotations).
//!
//! Renderers are pure: they take a [`RenderableReport`] and return strings.
//! Terminal styling lives here and nowhere else.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableCheck, RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use text::{SUBMISSION_REMINDERS, TextOptions, render_text};
