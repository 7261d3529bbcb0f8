use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_role-hash-reporter");

fn run() -> Output {
    Command::new(BIN)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary")
}

#[test]
fn prints_three_verifiable_lines() {
    let output = run();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    let expected = [
        ("teacher", "Teacher123!"),
        ("student", "Student123!"),
        ("parent", "Parent123!"),
    ];
    for (line, (role, plaintext)) in lines.iter().zip(expected) {
        let hash = line
            .strip_prefix(&format!("{role} hash: "))
            .unwrap_or_else(|| panic!("unexpected line: {line}"));
        assert!(hash.starts_with("$2b$10$"));
        assert!(bcrypt::verify(plaintext, hash).unwrap());
    }
}

#[test]
fn successful_run_keeps_stderr_quiet() {
    let output = run();

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn ignores_command_line_arguments() {
    let output = Command::new(BIN)
        .arg("--unused")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
}
