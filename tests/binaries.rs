//! Exit codes and console output of the built binaries.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use rps_commit::cli::{SEPARATOR_HINT, USAGE_HINT};
use rps_commit::game::session::EXIT_MESSAGE;
use rps_commit::Commitment;

const GAME: &str = env!("CARGO_BIN_EXE_rps-commit");
const VERIFY: &str = env!("CARGO_BIN_EXE_rps-verify");

fn game(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(GAME)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn verify(key: &str, committed_move: &str, hmac: &str) -> Output {
    Command::new(VERIFY)
        .args(["--key", key, "--move", committed_move, "--hmac", hmac])
        .output()
        .unwrap()
}

#[test]
fn test_even_move_count_exits_2_with_diagnostic() {
    let out = game(&["rock", "paper"], "");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(out.status.code(), Some(2));
    assert!(stdout.contains("odd number of moves"));
    assert!(stdout.contains(USAGE_HINT));
    assert!(stdout.contains(SEPARATOR_HINT));
    assert!(!stdout.contains("HMAC: "));
}

#[test]
fn test_duplicate_moves_exit_2() {
    let out = game(&["a", "a", "b"], "");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(out.status.code(), Some(2));
    assert!(stdout.contains("duplicate move 'a'"));
    assert!(stdout.contains(USAGE_HINT));
}

#[test]
fn test_game_plays_and_exits_cleanly() {
    let out = game(&["--", "-v", "a", "b"], "?\n2\n0\n");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout.contains("1 - -v"));
    assert!(stdout.contains("Key: "));
    assert!(stdout.lines().any(|l| l == EXIT_MESSAGE));
}

#[test]
fn test_printed_round_verifies_with_verify_tool() {
    let out = game(&["rock", "paper", "scissors"], "1\n0\n");
    let stdout = String::from_utf8(out.stdout).unwrap();

    let pick = |prefix: &str| -> String {
        stdout
            .lines()
            .find_map(|l| l.strip_prefix(prefix))
            .unwrap()
            .to_string()
    };
    let hmac = pick("HMAC: ");
    let key = pick("Key: ");
    let computer = pick("Computer move: ");

    let ok = verify(&key, &computer, &hmac);
    assert_eq!(ok.status.code(), Some(0));
    assert!(String::from_utf8(ok.stdout).unwrap().contains("OK: commitment verified"));
}

#[test]
fn test_verify_tool_reports_mismatch() {
    let commitment = Commitment::with_key([3; 32], "rock");
    let hmac = commitment.digest().to_string();
    let key = commitment.reveal().key_base64();

    let ok = verify(&key, "rock", &hmac);
    assert_eq!(ok.status.code(), Some(0));

    let bad = verify(&key, "paper", &hmac);
    let stdout = String::from_utf8(bad.stdout).unwrap();
    assert_eq!(bad.status.code(), Some(1));
    assert!(stdout.starts_with("FAILED: "));
    assert!(stdout.contains("'paper'"));
}

#[test]
fn test_verify_tool_rejects_malformed_key() {
    let out = verify("not-base64", "rock", &"0".repeat(64));
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("could not decode key"));
}
