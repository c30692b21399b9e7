//! CLI entry point for commitguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `commitguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use commitguard_app::{
    CheckInput, ExplainOutput, TextOptions, load_config_text, parse_report_json,
    render_annotations, render_markdown, render_text, report_exit_code, run_check, run_explain,
    serialize_report, write_artifact,
};
use commitguard_repo::{GitCli, VersionControl};
use commitguard_settings::Overrides;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "commitguard",
    version,
    about = "Commit-history compliance checks for time-boxed events"
)]
struct Cli {
    /// Repository root (the working tree to inspect).
    #[arg(long, default_value = ".", global = true)]
    repo_root: Utf8PathBuf,

    /// Path to the config TOML (default: commitguard.toml in the repository root, optional).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|lenient|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the window start (RFC 3339, e.g. 2025-03-01T09:00:00Z).
    #[arg(long, global = true)]
    window_start: Option<String>,

    /// Override the window end (RFC 3339).
    #[arg(long, global = true)]
    window_end: Option<String>,

    /// Override the minimum number of commits inside the window.
    #[arg(long, global = true)]
    min_commits: Option<u32>,

    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    debug: bool,

    /// When to color terminal output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the commit history (default when no subcommand is given).
    Check(CheckArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/commitguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/commitguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "commits.frequency") or code (e.g., "single_commit") to explain.
        identifier: String,
    },
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Output format for stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Also write a Markdown report to this path.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.cmd {
        None => cmd_check(&cli, &CheckArgs::default()),
        Some(Commands::Check(ref args)) => cmd_check(&cli, args),
        Some(Commands::Md {
            ref report,
            ref output,
        }) => cmd_md(report, output.as_deref()),
        Some(Commands::Annotations { ref report, max }) => cmd_annotations(report, max),
        Some(Commands::Explain { ref identifier }) => cmd_explain(identifier),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}

fn cmd_check(cli: &Cli, args: &CheckArgs) -> anyhow::Result<()> {
    let vcs = GitCli::new();

    let result = (|| -> anyhow::Result<i32> {
        // Nothing else is worth doing without git.
        vcs.ensure_available().context("git is required")?;

        let repo_root = cli
            .repo_root
            .canonicalize_utf8()
            .with_context(|| format!("repo root does not exist: {}", cli.repo_root))?;
        let cfg_text = load_config_text(&repo_root, cli.config.as_deref())?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            window_start: cli.window_start.clone(),
            window_end: cli.window_end.clone(),
            minimum_commits: cli.min_commits,
        };

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
            vcs: &vcs,
        })?;
        let report = &output.report;

        if let Some(path) = &args.report_out {
            write_artifact(path, &serialize_report(report)?).context("write report json")?;
        }
        if let Some(path) = &args.markdown_out {
            write_artifact(path, render_markdown(report).as_bytes()).context("write markdown")?;
        }

        match args.format {
            OutputFormat::Text => {
                let opts = text_options(cli.color);
                print!("{}", render_text(report, opts));
            }
            OutputFormat::Json => {
                let bytes = serialize_report(report)?;
                print!("{}", String::from_utf8_lossy(&bytes));
            }
            OutputFormat::Markdown => print!("{}", render_markdown(report)),
        }

        Ok(report_exit_code(&report.report))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("commitguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// `always`/`never` pin the `colored` override; `auto` leaves the decision to
/// `colored` (terminal on stdout, `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`).
fn text_options(choice: ColorChoice) -> TextOptions {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
    TextOptions {
        color: colored::control::SHOULD_COLORIZE.should_colorize(),
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_artifact(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&report, max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", commitguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                commitguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
