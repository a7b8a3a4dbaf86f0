//! End-to-end tests through the propdoc binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn propdoc() -> Command {
    Command::cargo_bin("propdoc").unwrap()
}

#[test]
fn init_writes_default_config_once() {
    let dir = TempDir::new().unwrap();

    propdoc().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".propdoc.toml").exists());

    propdoc().current_dir(dir.path()).arg("init").assert().failure();
    propdoc()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn generate_writes_report() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/components/Badge")).unwrap();
    fs::write(
        dir.path().join("src/components/Badge/Badge.tsx"),
        "export const Badge = () => null;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("docs.json"),
        r#"[{
            "displayName": "Badge",
            "filePath": "src/components/Badge/Badge.tsx",
            "props": [
                { "name": "color", "required": true, "type": { "name": "string" } },
                { "name": "size", "type": { "name": "'small' | 'medium'" } }
            ]
        }]"#,
    )
    .unwrap();

    propdoc()
        .current_dir(dir.path())
        .args([
            "generate",
            "--root",
            ".",
            "--raw-docs",
            "docs.json",
            "--output",
            "report.json",
        ])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    let docs = report["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["displayName"], "Badge");
    let props = docs[0]["props"].as_array().unwrap();
    assert_eq!(props[0]["name"], "color");
    assert_eq!(props[1]["name"], "size");
}

#[test]
fn generate_fails_on_missing_raw_docs() {
    let dir = TempDir::new().unwrap();
    propdoc()
        .current_dir(dir.path())
        .args(["generate", "--root", ".", "--raw-docs", "missing.json"])
        .assert()
        .failure();
}
