//! The `explain` use case: look up check/code documentation.

use commitguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    push_block(&mut out, exp.examples.before);
    out.push('\n');
    out.push_str("After:\n");
    push_block(&mut out, exp.examples.after);

    out
}

fn push_block(out: &mut String, body: &str) {
    out.push_str("```text\n");
    out.push_str(body.trim_end());
    out.push_str("\n```\n");
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&str], codes: &[&str]) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\n");
    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitguard_types::ids;

    #[test]
    fn explains_checks_and_codes() {
        for id in [ids::CHECK_COMMITS_FREQUENCY, ids::CODE_SINGLE_COMMIT] {
            match run_explain(id) {
                ExplainOutput::Found(exp) => {
                    let text = format_explanation(&exp);
                    assert!(text.starts_with(exp.title));
                    assert!(text.contains("Remediation"));
                    assert!(text.contains("```text"));
                }
                ExplainOutput::NotFound { .. } => panic!("{id} should be documented"),
            }
        }
    }

    #[test]
    fn unknown_identifier_lists_alternatives() {
        let ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } = run_explain("deps.no_wildcards")
        else {
            panic!("unknown identifier must not resolve");
        };

        let text = format_not_found(&identifier, available_check_ids, available_codes);
        assert!(text.contains("Unknown check_id or code: deps.no_wildcards"));
        assert!(text.contains("  - marker.present\n"));
        assert!(text.contains("  - no_commits\n"));
    }
}
