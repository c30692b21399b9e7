use std::collections::{BTreeMap, BTreeSet};
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window start {start} must be earlier than window end {end}")]
    NotIncreasing {
        start: OffsetDateTime,
        end: OffsetDateTime,
    },
}

/// Closed interval `[start, end]` of instants. Offsets are preserved for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl TimeWindow {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::NotIncreasing { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> OffsetDateTime {
        self.start
    }

    pub fn end(&self) -> OffsetDateTime {
        self.end
    }

    pub fn contains(&self, t: OffsetDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Quarter (0..=3) that `t` falls in, or `None` outside the window.
    ///
    /// Quarters are half-open `[q_start, q_end)`; the last one also includes `end`.
    /// An instant on an inner boundary belongs to the later quarter only.
    pub fn quarter_of(&self, t: OffsetDateTime) -> Option<usize> {
        if !self.contains(t) {
            return None;
        }
        let total = (self.end - self.start).whole_nanoseconds();
        let offset = (t - self.start).whole_nanoseconds();
        let idx = (offset * 4) / total;
        Some(idx.clamp(0, 3) as usize)
    }
}

/// Commit-history thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub minimum_commits: u32,
    pub minimum_message_length: u32,
    /// Lowercase whole-message tokens.
    pub banned_message_patterns: BTreeSet<String>,
    pub max_allowed_empty_quarters: u32,
}

impl Policy {
    pub fn is_banned(&self, message: &str) -> bool {
        let lower = message.trim().to_lowercase();
        self.banned_message_patterns.contains(&lower)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPolicy {
    pub marker_file: String,
    pub description_file: String,
    pub source_globs: Vec<String>,
    pub source_dirs: Vec<String>,
    pub placeholder_tokens: Vec<String>,
    pub min_description_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// Setup commit message dropped by the extractor (exact match after trimming).
    pub sentinel_message: String,
    pub rewrite_keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub window: TimeWindow,
    pub policy: Policy,
    pub project: ProjectPolicy,
    pub history: HistoryPolicy,
    /// check_id -> enabled. Checks missing from the map are enabled.
    pub checks: BTreeMap<String, bool>,
}

impl EffectiveConfig {
    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.checks.get(check_id).copied().unwrap_or(true)
    }
}
