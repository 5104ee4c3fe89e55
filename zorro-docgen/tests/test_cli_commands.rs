mod common;

use common::DocGenProcess;

// ============================================================================
// list command
// ============================================================================

#[test]
fn list_human() {
    let output = DocGenProcess::spawn_command(&["list"]);
    assert!(output.status.success());

    let stdout = DocGenProcess::stdout(&output);
    assert!(stdout.contains("ng-zorro-antd components (72 listed)"), "{stdout}");
    assert!(stdout.contains("反饋類組件 (Feedback)"));
    assert!(stdout.contains("特色組件 (Special)"));
    assert!(stdout.contains("[schematics: form]"));
}

#[test]
fn list_json_filtered() {
    let output =
        DocGenProcess::spawn_command(&["list", "--category", "feedback", "--format", "json"]);
    assert!(output.status.success());

    let stdout = DocGenProcess::stdout(&output);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let entries = parsed.as_array().expect("JSON list output should be an array");
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["name"], "Alert");
    assert_eq!(entries[9]["import"], "service");
}

// ============================================================================
// show command
// ============================================================================

#[test]
fn show_known_component() {
    let output = DocGenProcess::spawn_command(&["show", "tree"]);
    assert!(output.status.success());

    let stdout = DocGenProcess::stdout(&output);
    assert!(stdout.starts_with("# Tree - Tree"));
    assert_eq!(stdout.matches("ng g ng-zorro-antd:tree-").count(), 10);
    assert!(!stdout.contains("form-normal-login"));
}

#[test]
fn show_unknown_component() {
    let output = DocGenProcess::spawn_command(&["show", "Buton"]);
    assert_eq!(output.status.code(), Some(64));

    let stderr = DocGenProcess::stderr(&output);
    assert!(stderr.contains("Unknown component 'Buton'"), "{stderr}");
    assert!(stderr.contains("Did you mean 'Button'?"), "{stderr}");
}

// ============================================================================
// validate command
// ============================================================================

#[test]
fn validate_builtin_catalog() {
    let output = DocGenProcess::spawn_command(&["validate"]);
    assert!(
        output.status.success(),
        "{}",
        DocGenProcess::stderr(&output)
    );
    assert!(DocGenProcess::stdout(&output).contains("Catalog OK: 72 components"));
}

#[test]
fn validate_json() {
    let output = DocGenProcess::spawn_command(&["validate", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&DocGenProcess::stdout(&output)).expect("valid JSON");
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["components"], 72);
    assert!(parsed["issues"].as_array().unwrap().is_empty());
}

// ============================================================================
// version / completions
// ============================================================================

#[test]
fn version_human() {
    let output = DocGenProcess::spawn_command(&["version"]);
    assert!(output.status.success());
    let stdout = DocGenProcess::stdout(&output);
    assert!(stdout.starts_with("zorro-docgen "), "{stdout}");
    assert!(stdout.contains('.'));
}

#[test]
fn version_json() {
    let output = DocGenProcess::spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&DocGenProcess::stdout(&output)).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "zorro-docgen");
    assert!(parsed.get("version").is_some());
}

#[test]
fn completions_bash() {
    let output = DocGenProcess::spawn_command(&["completions", "bash"]);
    assert!(output.status.success());
    let stdout = DocGenProcess::stdout(&output);
    assert!(stdout.contains("zorro-docgen"), "{stdout}");
}

#[test]
fn missing_subcommand_is_usage_error() {
    let output = DocGenProcess::spawn_command(&[]);
    assert!(!output.status.success());
}

#[test]
fn list_survives_closed_stdout() {
    let output = DocGenProcess::spawn_with_closed_stdout(&["list"]);
    let stderr = DocGenProcess::stderr(&output);
    assert_eq!(output.status.code(), Some(0), "{stderr}");
    assert!(stderr.is_empty(), "{stderr}");
}
