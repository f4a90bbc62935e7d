// Runs the built binary with piped stdin to cover the real terminal console.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_student-manager"))
        .args(["--students", "1", "--courses", "1", "--no-color"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for binary")
}

#[test]
fn invalid_utf8_menu_line_is_an_invalid_choice() {
    let output = run_binary(b"\xff\xfe\n\n1\n\n0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: Invalid choice. Please enter a number from 0 to 12."));
    assert!(stdout.contains("INSTRUCTIONS"));
    assert!(stdout.contains("Thank you for using the Student Management System."));
}

#[test]
fn invalid_utf8_name_is_reprompted() {
    let output = run_binary(b"2\n1001\nJos\xe9\nJose\n90\n\n0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid name."));
    assert!(stdout.contains("SUCCESS: 1 student records have been saved."));
    assert!(stdout.contains("Thank you for using the Student Management System."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = run_binary(b"1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("INSTRUCTIONS"));
}
