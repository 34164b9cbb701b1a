use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "ucshop-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_ucshop-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("storage-faults"));
}

#[test]
fn cli_runs_all_logic_scenarios_as_json() {
    let exe = env!("CARGO_BIN_EXE_ucshop-tester");
    let output_path = temp_path("logic");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "all",
            "--seeds",
            "1,0x2a",
            "--iterations",
            "2",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = report.as_array().expect("array");
    assert_eq!(runs.len(), 7 * 2);
    assert!(runs.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_ucshop-tester");
    let output = Command::new(exe)
        .args(["--seeds", "not-a-seed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid seed"));
}

#[test]
fn cli_runs_with_unknown_browser_and_markdown_report() {
    let exe = env!("CARGO_BIN_EXE_ucshop-tester");
    let output_path = temp_path("browser");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--report",
            "markdown",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("No scenarios executed"));
}
