//! Integration tests for the propdoc binary.
//!
//! These tests exercise the full CLI against catalogs written to a temp dir.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const CATALOG: &str = r#"
[[groups]]
name = "Legend"

[[groups.props]]
name = "width"
description = "The width of legend."
table = { type = { summary = "Number" }, category = "General" }

[[groups.props]]
name = "height"
description = "The height of legend."
table = { type = { summary = "Number" }, category = "General" }

[[groups.props]]
name = "layout"
description = "The layout of legend items."
defaultValue = "horizontal"
table = { type = { summary = "horizontal | vertical" }, category = "General" }

[[pages]]
name = "Legend"
imports = [{ group = "Legend", all = true }]

[[pages]]
name = "Placement"
imports = [{ group = "Legend", only = ["layout", "width"] }]
"#;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A temp dir holding a catalog and an empty global config.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(catalog: &str) -> Self {
        let dir = TempDir::new().unwrap();
        dir.child("global.toml").write_str("").unwrap();
        dir.child("props.toml").write_str(catalog).unwrap();
        Self { dir }
    }

    /// A command that ignores the user's own config files.
    fn propdoc(&self) -> Command {
        let mut cmd = Command::cargo_bin("propdoc").unwrap();
        cmd.current_dir(self.dir.path())
            .env("PROPDOC_CONFIG", self.dir.child("global.toml").path())
            .env_remove("RUST_LOG");
        cmd
    }

    fn catalog(&self) -> std::path::PathBuf {
        self.dir.child("props.toml").path().to_path_buf()
    }
}

fn names(stdout: &[u8]) -> Vec<String> {
    let records: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// check
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn passes_with_import_all_warning() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .arg("check")
            .arg(fx.catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Checked 1 group and 2 pages (1 warning)",
            ))
            .stderr(predicate::str::contains(
                "page 'Legend' imports all of group 'Legend'",
            ));
    }

    #[test]
    fn strict_turns_warnings_into_errors() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["check", "--strict"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains("list the properties it uses"));
    }

    #[test]
    fn project_config_sets_levels() {
        let fx = Fixture::new(CATALOG);
        fx.dir
            .child("propdoc.toml")
            .write_str("[compose]\nimport_all = \"ignore\"\n")
            .unwrap();
        fx.propdoc()
            .arg("check")
            .arg(fx.catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 1 group and 2 pages\n"))
            .stderr(predicate::str::contains("warning").not());
    }

    #[test]
    fn quiet_suppresses_summary() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["check", "-q"])
            .arg(fx.catalog())
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn duplicate_property_fails() {
        let fx = Fixture::new(&format!(
            "{CATALOG}\n{}",
            r#"
[[groups]]
name = "Axis"

[[groups.props]]
name = "width"
description = "The width of axis."
table = { type = { summary = "Number" }, category = "General" }

[[groups.props]]
name = "width"
description = "The width of axis, again."
table = { type = { summary = "Number" }, category = "General" }
"#
        ));
        fx.propdoc()
            .arg("check")
            .arg(fx.catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate property 'width'"));
    }

    #[test]
    fn unknown_property_fails() {
        let fx = Fixture::new(&CATALOG.replace(r#"only = ["layout", "width"]"#, r#"only = ["depth"]"#));
        fx.propdoc()
            .arg("check")
            .arg(fx.catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "unknown property 'depth' in group 'Legend'",
            ));
    }

    #[test]
    fn unsupported_extension_fails() {
        let fx = Fixture::new(CATALOG);
        fx.dir.child("props.yaml").write_str(CATALOG).unwrap();
        fx.propdoc()
            .args(["check", "props.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot tell the format"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["check", "--config", "nope.toml"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn demo_catalog_is_clean() {
        let demo = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/legend.toml");
        let fx = Fixture::new("");
        fx.propdoc()
            .arg("check")
            .arg(demo)
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 1 group and 2 pages"));
    }
}

// =============================================================================
// compose
// =============================================================================

mod compose {
    use super::*;

    #[test]
    fn subset_in_request_order() {
        let fx = Fixture::new(CATALOG);
        let out = fx
            .propdoc()
            .args(["compose", "--page", "Placement"])
            .arg(fx.catalog())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(names(&out), ["layout", "width"]);
    }

    #[test]
    fn records_carry_descriptor_fields() {
        let fx = Fixture::new(CATALOG);
        let out = fx
            .propdoc()
            .args(["compose", "--page", "Placement", "--compact"])
            .arg(fx.catalog())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let records: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            records[0],
            serde_json::json!({
                "name": "layout",
                "description": "The layout of legend items.",
                "typeSummary": "horizontal | vertical",
                "defaultValue": "horizontal",
                "category": "General"
            })
        );
    }

    #[test]
    fn import_all_keeps_group_order() {
        let fx = Fixture::new(CATALOG);
        let out = fx
            .propdoc()
            .args(["compose", "--page", "Legend"])
            .arg(fx.catalog())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(names(&out), ["width", "height", "layout"]);
    }

    #[test]
    fn unknown_page_fails() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["compose", "--page", "Tooltip"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown page 'Tooltip'"));
    }

    #[test]
    fn import_all_denied_by_project_config() {
        let fx = Fixture::new(CATALOG);
        fx.dir
            .child("propdoc.toml")
            .write_str("[compose]\nimport_all = \"error\"\n")
            .unwrap();
        fx.propdoc()
            .args(["compose", "--page", "Legend"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "page 'Legend' imports all of group 'Legend'",
            ));
    }

    #[test]
    fn import_all_warns_by_default() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["compose", "--page", "Legend", "--compact"])
            .arg(fx.catalog())
            .assert()
            .success()
            .stderr(predicate::str::contains("warning: page 'Legend' imports all"));
    }

    #[test]
    fn strict_denies_import_all() {
        let fx = Fixture::new(CATALOG);
        fx.propdoc()
            .args(["compose", "--strict", "--page", "Legend"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn default_mismatch_error_blocks_output() {
        let fx = Fixture::new(&CATALOG.replace(
            r#"defaultValue = "horizontal""#,
            "defaultValue = 14",
        ));
        fx.dir
            .child("propdoc.toml")
            .write_str("[validation]\ndefault_mismatch = \"error\"\n")
            .unwrap();
        fx.propdoc()
            .args(["compose", "--page", "Placement"])
            .arg(fx.catalog())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("property 'layout' in group 'Legend'"))
            .stderr(predicate::str::contains("does not match declared type"));
    }

    #[test]
    fn demo_keeps_multiline_detail() {
        let demo = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/legend.toml");
        let fx = Fixture::new("");
        let out = fx
            .propdoc()
            .args(["compose", "--page", "Legend"])
            .arg(demo)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = records.as_array().unwrap();
        let content = records.iter().find(|r| r["name"] == "content").unwrap();
        assert_eq!(content["typeSummary"], "ReactElement | Function");

        let detail = content["typeDetail"].as_str().unwrap();
        assert!(detail.starts_with("<Legend content={<CustomizedLegend"));
        assert!(detail.contains("const renderLegend = (props) => {\n"));
        assert!(detail.ends_with("<Legend content={renderLegend} />"));

        let handlers: Vec<_> = records
            .iter()
            .filter_map(|r| r["name"].as_str())
            .filter(|n| n.starts_with("onMouse"))
            .collect();
        assert_eq!(
            handlers,
            [
                "onMouseEnter",
                "onMouseLeave",
                "onMouseDown",
                "onMouseUp",
                "onMouseMove",
                "onMouseOver",
                "onMouseOut"
            ]
        );
    }
}

// =============================================================================
// list / keys / completion
// =============================================================================

#[test]
fn list_shows_groups_and_pages() {
    let fx = Fixture::new(CATALOG);
    fx.propdoc()
        .arg("list")
        .arg(fx.catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("  Legend (3)"))
        .stdout(predicate::str::contains("  Legend <- Legend (all)"))
        .stdout(predicate::str::contains("  Placement <- Legend (2)"));
}

#[test]
fn keys_in_group_order() {
    let fx = Fixture::new(CATALOG);
    fx.propdoc()
        .args(["keys", "--group", "Legend"])
        .arg(fx.catalog())
        .assert()
        .success()
        .stdout("width\nheight\nlayout\n");
}

#[test]
fn keys_unknown_group_lists_known() {
    let fx = Fixture::new(CATALOG);
    fx.propdoc()
        .args(["keys", "--group", "Axis"])
        .arg(fx.catalog())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Known groups: Legend"));
}

#[test]
fn completion_bash() {
    let fx = Fixture::new(CATALOG);
    fx.propdoc()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("propdoc"));
}

#[test]
fn help_describes_tool() {
    let fx = Fixture::new(CATALOG);
    fx.propdoc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("property metadata"));
}
