//! Integration tests for CLI behavior
//!
//! These tests drive the `twig` binary the way a user would and check what
//! it prints and writes.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Helper to create a command for the twig CLI
fn twig_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_twig"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn kinds(json: &serde_json::Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_kinds(json, &mut out);
    out
}

fn collect_kinds(json: &serde_json::Value, out: &mut Vec<String>) {
    match json {
        serde_json::Value::Array(items) => items.iter().for_each(|item| collect_kinds(item, out)),
        serde_json::Value::Object(map) => {
            if let Some(kind) = map.get("kind").and_then(|k| k.as_str()) {
                out.push(kind.to_string());
            }
            if let Some(fields) = map.get("fields").and_then(|f| f.as_array()) {
                for field in fields {
                    if let Some(value) = field.get("value") {
                        collect_kinds(value, out);
                    }
                }
            }
        }
        _ => {}
    }
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        twig_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        twig_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        twig_cmd().assert().failure();
    }
}

mod run_command {
    use super::*;

    #[test]
    fn without_passes_echoes_the_forest() {
        let output = twig_cmd()
            .arg("run")
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let original: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(fixture("forest.json")).unwrap())
                .unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn keeps_large_integer_literals_intact() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("literals.json");
        input
            .write_str(
                r#"[{ "kind": "Lit", "fields": [{ "name": "value", "value": 18446744073709551615 }] }]"#,
            )
            .unwrap();

        twig_cmd()
            .arg("run")
            .arg(input.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("18446744073709551615"))
            .stdout(predicate::str::contains("e19").not());
    }

    #[test]
    fn removes_nodes_by_kind() {
        let output = twig_cmd()
            .args(["run", "--pass", "remove:Nop"])
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(kinds(&result), vec!["Echo", "String", "Block", "Echo"]);
    }

    #[test]
    fn passes_chain_in_order() {
        let output = twig_cmd()
            .args(["run", "-p", "rename:Echo=Nop", "-p", "remove:Nop"])
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(kinds(&result), vec!["Block"]);
    }

    #[test]
    fn unwraps_nodes_by_kind() {
        let output = twig_cmd()
            .args(["run", "--pass", "unwrap:Block"])
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            kinds(&result),
            vec!["Echo", "String", "Nop", "Nop", "Echo", "Nop"]
        );
    }

    #[test]
    fn count_prints_histogram_to_stderr() {
        twig_cmd()
            .args(["run", "--pass", "count"])
            .arg(fixture("forest.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains("Nop"))
            .stderr(predicate::str::contains("total"));
    }

    #[test]
    fn trace_logs_enter_and_leave_events() {
        twig_cmd()
            .args(["run", "--trace"])
            .arg(fixture("forest.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains("enter_node Block"))
            .stderr(predicate::str::contains("leave_node String"));
    }

    #[test]
    fn writes_output_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.child("out.json");

        twig_cmd()
            .args(["run", "--pass", "remove:Nop", "--output"])
            .arg(out.path())
            .arg(fixture("forest.json"))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        out.assert(predicate::str::contains("\"Block\""));
        out.assert(predicate::str::contains("\"Nop\"").not());
    }

    #[test]
    fn rejects_unknown_pass() {
        twig_cmd()
            .args(["run", "--pass", "explode"])
            .arg(fixture("forest.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("explode"));
    }

    #[test]
    fn fails_when_depth_limit_is_exceeded() {
        twig_cmd()
            .args(["run", "--max-depth", "1"])
            .arg(fixture("forest.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Traversal"));
    }

    #[test]
    fn rejects_zero_max_depth() {
        twig_cmd()
            .args(["run", "--max-depth", "0"])
            .arg(fixture("forest.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("least"));
    }

    #[test]
    fn fails_on_remove_outside_a_list() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("single.json");
        input
            .write_str(
                r#"[{ "kind": "Print", "fields": [{ "name": "expr", "value": { "kind": "Nop" } }] }]"#,
            )
            .unwrap();

        twig_cmd()
            .args(["run", "--pass", "remove:Nop"])
            .arg(input.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("remove"));
    }

    #[test]
    fn fails_on_invalid_forest() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("broken.json");
        input.write_str(r#"[{ "kind": "Echo", "children": [] }]"#).unwrap();

        twig_cmd()
            .arg("run")
            .arg(input.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid forest"));
    }

    #[test]
    fn fails_on_missing_input() {
        twig_cmd()
            .args(["run", "does-not-exist.json"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read"));
    }
}

mod config_file {
    use super::*;

    #[test]
    fn discovers_passes_from_working_directory() {
        let temp = TempDir::new().unwrap();
        temp.child(".twig.json")
            .write_str(r#"{ "passes": ["remove:Nop"] }"#)
            .unwrap();

        let output = twig_cmd()
            .current_dir(temp.path())
            .arg("run")
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(!kinds(&result).contains(&"Nop".to_string()));
    }

    #[test]
    fn command_line_passes_replace_config_passes() {
        let temp = TempDir::new().unwrap();
        let config = temp.child("pipeline.json");
        config.write_str(r#"{ "passes": ["remove:Nop"] }"#).unwrap();

        let output = twig_cmd()
            .arg("--config")
            .arg(config.path())
            .args(["run", "--pass", "rename:Block=Group"])
            .arg(fixture("forest.json"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let kinds = kinds(&result);
        assert!(kinds.contains(&"Nop".to_string()));
        assert!(kinds.contains(&"Group".to_string()));
    }

    #[test]
    fn config_depth_limit_applies() {
        let temp = TempDir::new().unwrap();
        let config = temp.child("pipeline.json");
        config
            .write_str(r#"{ "traverser": { "maxDepth": 1 } }"#)
            .unwrap();

        twig_cmd()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .arg(fixture("forest.json"))
            .assert()
            .code(2);
    }

    #[test]
    fn rejects_unknown_config_fields() {
        let temp = TempDir::new().unwrap();
        let config = temp.child("pipeline.json");
        config.write_str(r#"{ "pass": [] }"#).unwrap();

        twig_cmd()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .arg(fixture("forest.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn reports_node_counts() {
        twig_cmd()
            .arg("check")
            .arg(fixture("forest.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("7 node(s)"))
            .stdout(predicate::str::contains("Nop"));
    }

    #[test]
    fn fails_on_invalid_json() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("broken.json");
        input.write_str("{ not json").unwrap();

        twig_cmd()
            .arg("check")
            .arg(input.path())
            .assert()
            .code(2);
    }
}
