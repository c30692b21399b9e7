use crate::model::CommitRecord;
use crate::policy::TimeWindow;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

const NANOS_PER_MINUTE: i128 = 60_000_000_000;

/// Commits whose timestamp lies inside the window (boundaries inclusive).
pub fn valid_set<'a>(commits: &'a [CommitRecord], window: &TimeWindow) -> Vec<&'a CommitRecord> {
    commits
        .iter()
        .filter(|c| window.contains(c.timestamp))
        .collect()
}

pub fn quarter_counts(commits: &[&CommitRecord], window: &TimeWindow) -> [u32; 4] {
    let mut counts = [0u32; 4];
    for c in commits {
        if let Some(q) = window.quarter_of(c.timestamp) {
            counts[q] += 1;
        }
    }
    counts
}

/// Signed offset in whole minutes, rounded away from zero so that any miss is at
/// least one minute.
pub fn offset_minutes(delta: Duration) -> i64 {
    let nanos = delta.whole_nanoseconds();
    let magnitude = (nanos.abs() + NANOS_PER_MINUTE - 1) / NANOS_PER_MINUTE;
    (nanos.signum() * magnitude) as i64
}

pub fn format_instant(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}

pub fn plural(n: usize, singular: &str) -> String {
    plural_irregular(n, singular, &format!("{singular}s"))
}

/// `plural` for nouns that do not just take an `s` ("entry" / "entries").
pub fn plural_irregular(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Compile case-insensitive globs. Patterns are validated by commitguard-settings;
/// anything that still fails to compile is skipped.
pub fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = GlobBuilder::new(pattern).case_insensitive(true).build() {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push('…');
    out
}
