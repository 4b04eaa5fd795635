//! Integration tests for the turncheck CLI.
//!
//! Each test runs the built binary inside a fresh temporary working directory
//! so the default `conversation.json` / `context_vectors.json` lookup and
//! `./turncheck.toml` discovery are isolated.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONVERSATION: &str = r#"{
    "messages": [
        {"role": "user", "content": "What is the capital of France"},
        {"role": "assistant", "content": "The capital of France is Paris"}
    ]
}"#;

const CONTEXTS: &str = r#"{
    "contexts": [
        {"text": "Paris is the capital and largest city of France."}
    ]
}"#;

/// Helper to run the CLI binary in `dir` with arguments.
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    run_cli_with_log_filter(dir, args, None)
}

/// Helper to run the CLI binary with an optional `RUST_LOG` value.
fn run_cli_with_log_filter(dir: &Path, args: &[&str], rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_turncheck"));
    cmd.args(args)
        .current_dir(dir)
        // Keep the user's global config out of the run
        .env("HOME", dir);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().expect("Failed to execute turncheck CLI")
}

/// Assert stdout is exactly: blank line, header, JSON object, footer, blank line.
fn assert_report_only(stdout: &str) {
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() >= 6, "stdout too short: {stdout:?}");

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "===== LLM EVALUATION REPORT =====");
    assert_eq!(lines[2], "{");
    assert_eq!(lines[lines.len() - 3], "}");
    assert_eq!(lines[lines.len() - 2], "=================================");
    assert_eq!(lines[lines.len() - 1], "");
    assert!(stdout.ends_with("=================================\n\n"));

    let json = lines[2..lines.len() - 2].join("\n");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 7);
}

fn workspace_with_inputs(conversation: &str, contexts: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("conversation.json"), conversation).unwrap();
    std::fs::write(dir.path().join("context_vectors.json"), contexts).unwrap();
    dir
}

/// Extract the JSON between the report banners.
fn report_json(stdout: &str) -> serde_json::Value {
    let start = stdout.find('{').expect("report JSON start");
    let end = stdout.rfind('}').expect("report JSON end");
    serde_json::from_str(&stdout[start..=end]).unwrap()
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("turncheck"));
    assert!(stdout.contains("--conversation"));
    assert!(stdout.contains("--contexts"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_default_files() {
    let dir = workspace_with_inputs(CONVERSATION, CONTEXTS);
    let output = run_cli(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines.contains(&"===== LLM EVALUATION REPORT ====="));
    assert!(lines.contains(&"================================="));
    assert!(lines.contains(&"    \"relevance_score\": 0.5,"));

    let report = report_json(&stdout);
    assert_eq!(report["user_question"], "What is the capital of France");
    assert_eq!(report["llm_response"], "The capital of France is Paris");
    assert_eq!(report["hallucination_detected"], false);
    assert_eq!(report["cost_estimate_usd"], 0.00006);
    assert!(report["latency_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_cli_field_order() {
    let dir = workspace_with_inputs(CONVERSATION, CONTEXTS);
    let output = run_cli(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let keys = [
        "user_question",
        "llm_response",
        "relevance_score",
        "completeness_score",
        "hallucination_detected",
        "latency_ms",
        "cost_estimate_usd",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| stdout.find(&format!("\"{k}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_cli_bare_context_array() {
    let dir = workspace_with_inputs(
        CONVERSATION,
        r#"[{"text": "Bananas are yellow fruits"}]"#,
    );
    let output = run_cli(dir.path(), &[]);

    assert!(output.status.success());
    let report = report_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report["hallucination_detected"], true);
}

#[test]
fn test_cli_explicit_paths_and_output_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chat.json"), CONVERSATION).unwrap();
    std::fs::write(dir.path().join("passages.json"), CONTEXTS).unwrap();

    let output = run_cli(
        dir.path(),
        &[
            "--conversation",
            "chat.json",
            "--contexts",
            "passages.json",
            "--output-file",
            "report.json",
        ],
    );

    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(report["relevance_score"], 0.5);
}

#[test]
fn test_cli_local_config_threshold() {
    let dir = workspace_with_inputs(CONVERSATION, CONTEXTS);
    std::fs::write(
        dir.path().join("turncheck.toml"),
        "[evaluation]\nhallucination_threshold = 0.6\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &[]);

    assert!(output.status.success());
    let report = report_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report["hallucination_detected"], true);
}

#[test]
fn test_cli_invalid_config_value() {
    let dir = workspace_with_inputs(CONVERSATION, CONTEXTS);
    std::fs::write(
        dir.path().join("bad.toml"),
        "[evaluation]\nhallucination_threshold = 2.0\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &["--config", "bad.toml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hallucination_threshold"));
}

#[test]
fn test_cli_missing_input_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("context_vectors.json"), CONTEXTS).unwrap();

    let output = run_cli(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("conversation.json"));
}

#[test]
fn test_cli_malformed_json() {
    let dir = workspace_with_inputs(CONVERSATION, "{ not json");
    let output = run_cli(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("context_vectors.json"));
}

#[test]
fn test_cli_single_message_conversation() {
    let dir = workspace_with_inputs(
        r#"{"messages": [{"role": "user", "content": "hello"}]}"#,
        CONTEXTS,
    );
    let output = run_cli(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 2"));
}

#[test]
fn test_cli_verbose_logs_go_to_stderr() {
    let dir = workspace_with_inputs(CONVERSATION, r#"{"contexts": []}"#);
    let output = run_cli(dir.path(), &["-v"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_report_only(&stdout);
    assert!(!stdout.contains("WARN"));
    assert!(!stdout.contains("DEBUG"));

    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("No context passages supplied"));
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("relevance="));
}

#[test]
fn test_cli_default_filter_shows_warnings_only() {
    let dir = workspace_with_inputs(CONVERSATION, r#"{"contexts": []}"#);
    let output = run_cli(dir.path(), &[]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No context passages supplied"));
    assert!(!stderr.contains("DEBUG"));
    assert_report_only(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_cli_rust_log_overrides_default_filter() {
    let dir = workspace_with_inputs(CONVERSATION, CONTEXTS);
    let output = run_cli_with_log_filter(dir.path(), &[], Some("debug"));

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("relevance="));
    assert_report_only(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_cli_rust_log_can_silence_warnings() {
    let dir = workspace_with_inputs(CONVERSATION, r#"{"contexts": []}"#);
    let output = run_cli_with_log_filter(dir.path(), &[], Some("off"));

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_report_only(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_cli_runs_on_demo_directory() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos");
    // Home points elsewhere so only demos/turncheck.toml is discovered
    let home = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_turncheck"))
        .args(["-v"])
        .current_dir(&demos)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute turncheck CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_report_only(&stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("turncheck.toml"));

    let report = report_json(&stdout);
    assert_eq!(report["relevance_score"], 0.5);
    assert_eq!(report["hallucination_detected"], false);
}
