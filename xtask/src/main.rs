//! Developer tasks (schema generation and contract checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use commitguard_types::{SCHEMA_REPORT_V1, explain, ids};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

/// `schemas/` in the project root, unless `COMMITGUARD_SCHEMAS_DIR` points elsewhere.
fn schemas_dir() -> PathBuf {
    std::env::var_os("COMMITGUARD_SCHEMAS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| project_root().join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(commitguard_types::CommitguardReportV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(commitguard_settings::CommitguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "commitguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "commitguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Key order and whitespace are irrelevant to JSON; `required` lists are sets.
fn canonical(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("required", Value::Array(mut names)) => {
                            names.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
                            Value::Array(names)
                        }
                        (_, other) => canonical(other),
                    };
                    (key, value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(canonical).collect()),
        other => other,
    }
}

/// Validate that schemas on disk match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serde_json::to_value((spec.generate)()).context("schema to JSON")?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let same = serde_json::from_str::<serde_json::Value>(&actual)
            .is_ok_and(|actual| canonical(actual) == canonical(expected));
        if !same {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for name in &missing {
        eprintln!("Missing schema: {name}");
    }
    for name in &mismatched {
        eprintln!("Schema out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate a JSON report file against the generated report schema.
fn validate_report(path: &Path) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let report: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("{} is not JSON", path.display()))?;

    let schema = serde_json::to_value(generate_report_schema()).context("schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))?;

    let errors: Vec<String> = validator.iter_errors(&report).map(|e| e.to_string()).collect();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  - {e}");
        }
        bail!("{} violates {}", path.display(), SCHEMA_REPORT_V1);
    }

    println!("✓ {} conforms to {}", path.display(), SCHEMA_REPORT_V1);
    Ok(())
}

/// Every check id and every code must resolve in the explain registry.
fn explain_coverage() -> anyhow::Result<()> {
    let mut missing = Vec::new();

    for id in ids::CHECK_ORDER {
        if explain::lookup_explanation(id).is_none() {
            missing.push(id);
        }
    }
    for &code in explain::all_codes() {
        if explain::lookup_explanation(code).is_none() {
            missing.push(code);
        }
    }

    if !missing.is_empty() {
        for id in &missing {
            eprintln!("No explanation for: {id}");
        }
        bail!("Explanation coverage incomplete");
    }

    println!(
        "✓ {} checks and {} codes explained",
        ids::CHECK_ORDER.len(),
        explain::all_codes().len()
    );
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                    Show this message");
    eprintln!("  emit-schemas            Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas        Check if schemas/ matches generated output (for CI)");
    eprintln!("  validate-report <path>  Validate a JSON report against the report schema");
    eprintln!("  print-schema-ids        Print known schema IDs");
    eprintln!("  explain-coverage        Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-report" => match args.get(2) {
            Some(path) => validate_report(Path::new(path)),
            None => bail!("validate-report needs a path to a JSON report"),
        },
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
