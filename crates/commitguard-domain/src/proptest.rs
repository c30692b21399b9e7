//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - aggregation (overall verdict is the AND of every result)
//! - determinism of evaluation
//! - quarter partitioning of the valid set
//! - advisory checks never failing

use crate::checks::utils::{quarter_counts, valid_set};
use crate::engine::evaluate;
use crate::model::CommitRecord;
use crate::test_support::{config, model_with_commits, window};
use commitguard_types::ids;
use proptest::prelude::*;
use time::Duration;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("fix".to_string()),
        Just("wip".to_string()),
        Just("x".to_string()),
        Just("Add chat interface with guiding questions".to_string()),
        prop::string::string_regex("[A-Za-z ]{0,40}").unwrap(),
    ]
}

/// Minutes relative to the window start; the window is 1440 minutes long.
fn arb_offset() -> impl Strategy<Value = i64> {
    -600i64..2040
}

/// Chronologically sorted commits with unique ids, as the extractor produces them.
fn arb_commits() -> impl Strategy<Value = Vec<CommitRecord>> {
    prop::collection::vec((arb_offset(), arb_message()), 0..24).prop_map(|mut raw| {
        raw.sort_by_key(|(offset, _)| *offset);
        let start = window().start();
        raw.into_iter()
            .enumerate()
            .map(|(i, (offset, message))| CommitRecord {
                id: format!("{i:040x}"),
                timestamp: start + Duration::minutes(offset),
                message,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn overall_passed_is_and_of_results(commits in arb_commits()) {
        let report = evaluate(&model_with_commits(commits), &config()).report;
        prop_assert_eq!(report.overall_passed, report.results.iter().all(|r| r.passed));
    }

    #[test]
    fn evaluation_is_deterministic(commits in arb_commits()) {
        let model = model_with_commits(commits);
        let a = evaluate(&model, &config());
        let b = evaluate(&model, &config());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn quarters_partition_the_valid_set(commits in arb_commits()) {
        let w = window();
        let valid = valid_set(&commits, &w);
        let counts = quarter_counts(&valid, &w);
        prop_assert_eq!(counts.iter().sum::<u32>() as usize, valid.len());
    }

    #[test]
    fn message_quality_never_fails(commits in arb_commits()) {
        let report = evaluate(&model_with_commits(commits), &config()).report;
        let result = report.result(ids::CHECK_COMMITS_MESSAGE_QUALITY).expect("message quality ran");
        prop_assert!(result.passed);
    }

    #[test]
    fn frequency_fails_below_minimum_or_on_singleton(commits in arb_commits(), minimum in 0u32..8) {
        let mut cfg = config();
        cfg.policy.minimum_commits = minimum;
        let valid = valid_set(&commits, &cfg.window).len();

        let report = evaluate(&model_with_commits(commits), &cfg).report;
        let result = report.result(ids::CHECK_COMMITS_FREQUENCY).expect("frequency ran");
        let expected = valid >= minimum as usize && valid != 1;
        prop_assert_eq!(result.passed, expected);
    }
}
