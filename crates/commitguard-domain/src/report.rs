use commitguard_types::{CommitguardData, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct DomainReport {
    pub report: Report,
    pub data: CommitguardData,
}
