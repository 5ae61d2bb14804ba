//! CLI integration tests
//!
//! Each test drives the sharecred binary with piped stdin, the way the
//! operator's shell would, and inspects the files it leaves behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper function to get the sharecred binary path
fn sharecred_bin() -> PathBuf {
    // Use CARGO_BIN_EXE_sharecred if available (set by cargo test)
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_sharecred") {
        return PathBuf::from(path);
    }
    // Fallback to the built binary in target/debug
    PathBuf::from("./target/debug/sharecred")
}

struct TestResult {
    stdout: String,
    stderr: String,
    success: bool,
}

/// Run the binary with the given arguments, feeding `stdin_input` to it.
fn run_sharecred(args: &[&str], stdin_input: &str) -> TestResult {
    let mut child = Command::new(sharecred_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sharecred");

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(stdin_input.as_bytes());
        let _ = stdin.flush();
    }

    let output = child.wait_with_output().expect("Failed to read output");

    TestResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    }
}

fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Pull the reported plaintext password out of the success report.
fn reported_password(stdout: &str) -> String {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("The password is:"))
        .expect("no password line in report");
    let start = line.find('\'').unwrap() + 1;
    let end = line.rfind('\'').unwrap();
    line[start..end].to_string()
}

fn read_hash(root: &Path, username: &str) -> String {
    std::fs::read_to_string(root.join(username).join("hash.txt")).expect("hash.txt missing")
}

#[test]
fn test_accept_suggestion_end_to_end() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    // Username, then an empty line to accept the suggested password.
    let result = run_sharecred(&["--root", root.to_str().unwrap()], "neo\n\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(root.join("neo").is_dir());

    let hash = read_hash(&root, "neo");
    assert!(!hash.is_empty());
    assert!(hash.starts_with("$2b$"));

    assert!(result
        .stdout
        .contains("https://share.juandid.com/login.php?username=neo"));

    // The reported password is the suggestion the tool generated.
    let password = reported_password(&result.stdout);
    assert_eq!(password.chars().count(), 10);
    assert!(bcrypt::verify(&password, &hash).unwrap());
}

#[test]
fn test_explicit_password() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    let result = run_sharecred(&["--root", root.to_str().unwrap()], "trinity\nAbcdef1!\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(bcrypt::verify("Abcdef1!", &read_hash(&root, "trinity")).unwrap());
    assert_eq!(reported_password(&result.stdout), "Abcdef1!");
}

#[test]
fn test_invalid_username_reprompts() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    // First username has a disallowed character; the tool must re-prompt
    // and only the second, valid one gets a directory.
    let result = run_sharecred(
        &["--root", root.to_str().unwrap()],
        "a#b\nneo\nAbcdef1!\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Invalid username"));
    assert!(!root.join("a#b").exists());
    assert!(bcrypt::verify("Abcdef1!", &read_hash(&root, "neo")).unwrap());
}

#[test]
fn test_invalid_password_reprompts_with_reason() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    // Missing uppercase, then missing special, then valid.
    let result = run_sharecred(
        &["--root", root.to_str().unwrap()],
        "neo\nabcdef1!\nAbcdef12\nAbcdef1!\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("uppercase"));
    assert!(result.stderr.contains("special"));
    assert!(bcrypt::verify("Abcdef1!", &read_hash(&root, "neo")).unwrap());
}

#[test]
fn test_no_suggestion_flag() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    // Without a suggestion an empty password line is just too short;
    // the tool re-prompts until a real password arrives.
    let result = run_sharecred(
        &["--root", root.to_str().unwrap(), "--no-suggestion"],
        "neo\n\nAbcdef1!\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("press Enter to accept"));
    assert!(result.stderr.contains("too short"));
    assert!(bcrypt::verify("Abcdef1!", &read_hash(&root, "neo")).unwrap());
}

#[test]
fn test_custom_host_in_link() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    let result = run_sharecred(
        &["--root", root.to_str().unwrap(), "--host", "files.example.org"],
        "neo\nAbcdef1!\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains("https://files.example.org/login.php?username=neo"));
}

#[test]
fn test_closed_stdin_exits_nonzero() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    // Stream ends before a password is supplied.
    let result = run_sharecred(&["--root", root.to_str().unwrap()], "neo\n");

    assert!(!result.success);
    assert!(result.stderr.contains("Input stream closed"));
    // Nothing was provisioned.
    assert!(!root.exists());
}

#[test]
fn test_rerun_overwrites_hash() {
    let dir = create_test_dir();
    let root = dir.path().join("download");

    let first = run_sharecred(&["--root", root.to_str().unwrap()], "neo\nAbcdef1!\n");
    assert!(first.success, "stderr: {}", first.stderr);
    let second = run_sharecred(&["--root", root.to_str().unwrap()], "neo\nGhijkl2-\n");
    assert!(second.success, "stderr: {}", second.stderr);

    let hash = read_hash(&root, "neo");
    assert!(!bcrypt::verify("Abcdef1!", &hash).unwrap());
    assert!(bcrypt::verify("Ghijkl2-", &hash).unwrap());
}
