//! Pure policy evaluation (no IO).
//!
//! Input: a repository model (commit records, operation log, top-level snapshot)
//! constructed elsewhere.
//! Output: one check result per enabled check + overall verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
pub mod checks;

pub use engine::evaluate;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
