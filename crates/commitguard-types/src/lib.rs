//! Stable DTOs and IDs used across the commitguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for check results and the emitted report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use receipt::{
    CheckResult, CommitguardData, CommitguardReportV1, Diagnostic, Report, ReportEnvelope,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, WindowData,
};
