use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use commitguard_types::{CheckResult, ids};

pub mod artifacts;
pub mod frequency;
pub mod history_integrity;
pub mod marker;
pub mod message_quality;
pub mod utils;
pub mod window;


/// A named check. Every check is a pure function of the shared inputs.
pub struct Check {
    pub id: &'static str,
    pub run: fn(&RepoModel, &EffectiveConfig) -> CheckResult,
}

/// All checks, in the order the aggregator runs them.
pub const CATALOG: [Check; 6] = [
    Check {
        id: ids::CHECK_MARKER_PRESENT,
        run: marker::run,
    },
    Check {
        id: ids::CHECK_WINDOW_BOUNDS,
        run: window::run,
    },
    Check {
        id: ids::CHECK_COMMITS_FREQUENCY,
        run: frequency::run,
    },
    Check {
        id: ids::CHECK_COMMITS_MESSAGE_QUALITY,
        run: message_quality::run,
    },
    Check {
        id: ids::CHECK_HISTORY_INTEGRITY,
        run: history_integrity::run,
    },
    Check {
        id: ids::CHECK_PROJECT_ARTIFACTS,
        run: artifacts::run,
    },
];
