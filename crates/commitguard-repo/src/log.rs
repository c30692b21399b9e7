use commitguard_domain::model::CommitRecord;
use std::collections::BTreeSet;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// `git log` format: full hash, strict ISO 8601 author date, subject; unit-separated.
pub const LOG_FORMAT: &str = "--format=%H%x1f%aI%x1f%s";

const FIELD_SEP: char = '\u{1f}';

/// Turn raw log output (newest first) into chronological commit records.
///
/// Malformed lines are skipped. The setup commit whose trimmed subject equals
/// `sentinel` is removed. Duplicate ids keep their oldest occurrence. Equal
/// timestamps keep oldest-first log order.
pub fn parse_commit_log(raw: &str, sentinel: &str) -> Vec<CommitRecord> {
    let sentinel = sentinel.trim();

    let mut records: Vec<CommitRecord> = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some(record) = parse_line(line) else {
            debug!(line = idx + 1, "skipping malformed log line");
            continue;
        };
        if !sentinel.is_empty() && record.message.trim() == sentinel {
            debug!(id = record.short_id(), "skipping setup commit");
            continue;
        }
        records.push(record);
    }

    records.reverse();

    let mut seen = BTreeSet::new();
    records.retain(|r| seen.insert(r.id.clone()));

    records.sort_by_key(|r| r.timestamp);
    records
}

fn parse_line(line: &str) -> Option<CommitRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEP).collect();
    let [id, timestamp, message] = fields.as_slice() else {
        return None;
    };

    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    let timestamp = OffsetDateTime::parse(timestamp.trim(), &Rfc3339).ok()?;

    Some(CommitRecord {
        id: id.to_string(),
        timestamp,
        message: message.to_string(),
    })
}
