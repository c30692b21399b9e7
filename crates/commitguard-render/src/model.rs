#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

impl RenderableSeverity {
    pub fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "info",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDiagnostic {
    pub severity: RenderableSeverity,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCheck {
    pub name: String,
    pub passed: bool,
    pub diagnostics: Vec<RenderableDiagnostic>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    /// Already formatted (RFC 3339).
    pub window_start: String,
    pub window_end: String,
    pub commits_total: u32,
    pub commits_in_window: u32,
    pub checks_run: u32,
    pub checks_failed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub checks: Vec<RenderableCheck>,
    pub data: RenderableData,
}
