use std::fs;
use std::process::Command;

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_calcforge").to_string()
}

#[test]
fn cli_simplifies_known_example() {
    let output = Command::new(bin())
        .args(["radical", "simplify", "72"])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("6√2"), "missing quick answer in:\n{stdout}");
    assert!(stdout.contains("2 × 2 × 2 × 3 × 3"), "missing factorization in:\n{stdout}");
}

#[test]
fn cli_even_root_of_negative_is_inline_not_fatal() {
    let output = Command::new(bin())
        .args(["radical", "evaluate", "-16"])
        .output()
        .expect("run");

    // Inline messaging: the command itself succeeds.
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("cannot take an even root of a negative number"),
        "got:\n{stdout}"
    );
}

#[test]
fn cli_odd_root_of_negative_evaluates() {
    let output = Command::new(bin())
        .args(["radical", "evaluate", "-8", "--index", "3"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-2"), "got:\n{stdout}");
    assert!(stdout.contains("perfect root"), "got:\n{stdout}");
}

#[test]
fn cli_quorum_validation_blocks() {
    let output = Command::new(bin())
        .args(["quorum", "10", "150"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "out-of-range percentage must fail the command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at most 100"), "got:\n{stderr}");
}

#[test]
fn cli_quorum_reports_attendance() {
    let output = Command::new(bin())
        .args(["quorum", "120", "50", "--attending", "61"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("60"), "got:\n{stdout}");
    assert!(stdout.contains("quorum met"), "got:\n{stdout}");
}

#[test]
fn cli_json_output_is_parseable() {
    let output = Command::new(bin())
        .args(["mortgage", "300000", "6", "30", "--json"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    let payment = value["monthly_payment"].as_f64().unwrap();
    assert!((payment - 1798.65).abs() < 0.01, "got {payment}");
}

#[test]
fn cli_honors_config_precision() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "precision = 2\n").unwrap();

    let output = Command::new(bin())
        .args(["--config", config.to_str().unwrap(), "radical", "evaluate", "72"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("8.49"), "expected two decimal places in:\n{stdout}");
    assert!(!stdout.contains("8.4853"), "precision 2 must round:\n{stdout}");
}

#[test]
fn cli_malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "precision = \"lots\"\n").unwrap();

    let output = Command::new(bin())
        .args(["--config", config.to_str().unwrap(), "tools"])
        .output()
        .expect("run");

    assert!(!output.status.success());
}

#[test]
fn cli_related_is_deterministic() {
    let run = || {
        let output = Command::new(bin())
            .args(["related", "mortgage-calculator"])
            .output()
            .expect("run");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    let first = run();
    assert!(first.contains("savings-calculator"), "got:\n{first}");
    assert_eq!(first, run());
}

#[test]
fn cli_lists_tools_and_faq() {
    let output = Command::new(bin()).args(["tools"]).output().expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("radical-simplifier"));
    assert!(stdout.contains("quorum-calculator"));

    let output = Command::new(bin())
        .args(["faq", "radical-simplifier"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("simplify a radical"), "got:\n{stdout}");
}
