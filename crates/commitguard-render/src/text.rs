use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};
use colored::{ColoredString, Colorize};

/// Fixed closing block printed after every terminal report.
pub const SUBMISSION_REMINDERS: [&str; 4] = [
    "Push every commit to the repository you will submit.",
    "Make sure the repository is publicly visible.",
    "Do not rewrite history after the event ends.",
    "Explain what you built and how to run it in the README.",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    /// Style output with `colored`. The global `colored::control` override still applies.
    pub color: bool,
}

const INDENT: &str = "      ";
const TAG_WIDTH: usize = 8;

pub fn render_text(report: &RenderableReport, opts: TextOptions) -> String {
    let paint = Palette { enabled: opts.color };
    let d = &report.data;
    let mut out = String::new();

    out.push_str(&paint.banner("commitguard: commit history check"));
    out.push('\n');
    out.push_str(&format!("  profile  {}\n", d.profile));
    out.push_str(&format!("  window   {} .. {}\n", d.window_start, d.window_end));
    out.push_str(&format!(
        "  commits  {} total, {} inside the window\n\n",
        d.commits_total, d.commits_in_window
    ));

    for check in &report.checks {
        let status = if check.passed {
            paint.pass("PASS")
        } else {
            paint.fail("FAIL")
        };
        out.push_str(&format!("{status}  {}\n", check.name));

        for diag in &check.diagnostics {
            let tag = format!("{:<TAG_WIDTH$}", diag.severity.label());
            out.push_str(&format!(
                "{INDENT}{} {}\n",
                paint.severity(diag.severity, &tag),
                diag.message
            ));
            if let Some(help) = &diag.help {
                let pad = " ".repeat(INDENT.len() + TAG_WIDTH + 1);
                for (i, line) in help.lines().enumerate() {
                    let line = if i == 0 {
                        format!("help: {line}")
                    } else {
                        line.to_string()
                    };
                    out.push_str(&format!("{pad}{}\n", paint.dim(&line)));
                }
            }
        }
    }

    let result = match report.verdict {
        RenderableVerdictStatus::Pass => paint.pass(&format!("PASS ({})", checks(d.checks_run))),
        RenderableVerdictStatus::Warn => paint.warn(&format!(
            "PASS with warnings ({})",
            checks(d.checks_run)
        )),
        RenderableVerdictStatus::Fail => paint.fail(&format!(
            "FAIL ({} of {} failed)",
            d.checks_failed,
            checks(d.checks_run)
        )),
    };
    out.push_str(&format!("\nResult: {result}\n\n"));

    out.push_str(&paint.bold("Before you submit:"));
    out.push('\n');
    for reminder in SUBMISSION_REMINDERS {
        out.push_str(&format!("  - {reminder}\n"));
    }

    out
}

fn checks(n: u32) -> String {
    if n == 1 {
        "1 check".to_string()
    } else {
        format!("{n} checks")
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, s: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(s).to_string()
        } else {
            s.to_string()
        }
    }

    fn banner(&self, s: &str) -> String {
        self.paint(s, |s| s.cyan().bold())
    }

    fn bold(&self, s: &str) -> String {
        self.paint(s, |s| s.bold())
    }

    fn dim(&self, s: &str) -> String {
        self.paint(s, |s| s.dimmed())
    }

    fn pass(&self, s: &str) -> String {
        self.paint(s, |s| s.green().bold())
    }

    fn warn(&self, s: &str) -> String {
        self.paint(s, |s| s.yellow().bold())
    }

    fn fail(&self, s: &str) -> String {
        self.paint(s, |s| s.red().bold())
    }

    fn severity(&self, severity: RenderableSeverity, s: &str) -> String {
        match severity {
            RenderableSeverity::Info => self.dim(s),
            RenderableSeverity::Warning => self.paint(s, |s| s.yellow()),
            RenderableSeverity::Error => self.paint(s, |s| s.red()),
        }
    }
}
