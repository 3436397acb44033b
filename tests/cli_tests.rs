use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn draftscope() -> Command {
    Command::cargo_bin("draftscope").unwrap()
}

#[test]
fn test_detect_prints_json_report() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"nuxt": "3", "vue": "3"}}"#,
    )
    .unwrap();

    let output = draftscope()
        .args(["detect", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["framework"], "nuxt");
    assert_eq!(json["package_manager"], "npm");
}

#[test]
fn test_detect_override_flag() {
    let dir = TempDir::new().unwrap();

    draftscope()
        .args(["detect", "--framework", "react", "--style", "scss", "--project-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"override: framework=react\""))
        .stdout(predicate::str::contains("\"overrides\""));
}

#[test]
fn test_missing_project_root_exits_with_2() {
    let dir = TempDir::new().unwrap();

    draftscope()
        .args(["detect", "--project-root"])
        .arg(dir.path().join("missing"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"error\": \"project root not found"));
}

#[test]
fn test_inspect_rejects_non_html() {
    let dir = TempDir::new().unwrap();
    let draft = dir.path().join("draft.txt");
    fs::write(&draft, "<p>hi</p>").unwrap();

    draftscope()
        .args(["inspect", "--html"])
        .arg(&draft)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("input must be a .html file"));
}

#[test]
fn test_inspect_html_draft() {
    let dir = TempDir::new().unwrap();
    let draft = dir.path().join("draft.html");
    fs::write(&draft, r#"<body><button class="btn">Go</button><p style="font-size: 14px;"></p></body>"#).unwrap();

    let output = draftscope().args(["inspect", "--html"]).arg(&draft).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["interactive_elements"], 1);
    assert_eq!(json["tokens"]["font_sizes"][0], "14px");
}

#[test]
fn test_suggest_path_uses_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/routes")).unwrap();
    let settings = dir.path().join("draftscope.toml");
    fs::write(
        &settings,
        "[detect]\nframework = \"svelte\"\n\n[target]\nscope = \"page\"\nname = \"About Us\"\n",
    )
    .unwrap();

    let output = draftscope()
        .arg("--config")
        .arg(&settings)
        .args(["suggest-path", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommended_path"], "src/routes/about-us/+page.svelte");
    assert_eq!(json["needs_confirmation"], false);
}

#[test]
fn test_invalid_settings_file_exits_with_2() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("bad.toml");
    fs::write(&settings, "[detect]\nunknown = 1\n").unwrap();

    draftscope()
        .arg("-c")
        .arg(&settings)
        .args(["detect", "--project-root"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("invalid config"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();

    let output = draftscope()
        .args(["-v", "detect", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap();
}

#[test]
fn test_empty_target_in_settings_falls_back_to_table() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("draftscope.toml");
    fs::write(&settings, "[target]\npath = \"\"\n").unwrap();

    let output = draftscope()
        .arg("--config")
        .arg(&settings)
        .args(["suggest-path", "--framework", "vue", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommended_path"], "src/components/RestoredDesign.vue");
    assert_eq!(json["path_exists"], false);
}
