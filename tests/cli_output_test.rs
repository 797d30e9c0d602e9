#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::TempDir;

/// stdout 只包含輸出內容與快照，狀態訊息走日誌 (stderr)
#[test]
fn test_json_and_csv_keep_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("roster.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_uni-registry"))
        .args(["--format", "json", "--export-csv"])
        .arg(&csv_path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!stdout.contains("Roster saved"));
    assert!(stderr.contains("Roster saved"));
    assert!(csv_path.exists());

    let (transcript, snapshot) = stdout.split_once("\n\n{").unwrap();
    assert!(transcript.ends_with(" - Computer Science"));
    let json: serde_json::Value = serde_json::from_str(&format!("{{{}", snapshot)).unwrap();
    assert_eq!(json["name"], "TUM");
}
