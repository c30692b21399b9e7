//! Fuzz target for commit log extraction.
//!
//! Goal: parsing raw `git log` output should **never panic**, and the
//! result must stay chronologically sorted with unique ids.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_commit_log
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct LogInput {
    raw: String,
    sentinel: String,
}

fuzz_target!(|input: LogInput| {
    if input.raw.len() > 64 * 1024 || input.sentinel.len() > 256 {
        return;
    }

    let commits = commitguard_repo::parse_commit_log(&input.raw, &input.sentinel);

    for pair in commits.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
    let mut ids: Vec<&str> = commits.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), commits.len());
});
