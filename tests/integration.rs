//! Integration test: drive the built binary against a scratch script directory
//!
//! A small shell script stands in for the interpreter and appends each
//! argument it receives to a log file, one per line.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_lisplike-tester");

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(scripts: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let scripts_dir = dir.path().join("scripts");
        std::fs::create_dir(&scripts_dir).unwrap();
        for name in scripts {
            std::fs::write(scripts_dir.join(name), "(print 1)\n").unwrap();
        }

        let fake = dir.path().join("fake-interpreter");
        let log = dir.path().join("calls.log");
        std::fs::write(
            &fake,
            format!("#!/bin/sh\nprintf '%s\\n' \"$1\" >> '{}'\n", log.display()),
        )
        .unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir }
    }

    fn scripts(&self) -> PathBuf {
        self.dir.path().join("scripts")
    }

    fn interpreter(&self) -> PathBuf {
        self.dir.path().join("fake-interpreter")
    }

    fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Names in the order the runner printed them
    fn listed(stdout: &str) -> Vec<String> {
        stdout.lines()
            .filter_map(|l| l.strip_prefix("- "))
            .map(String::from)
            .collect()
    }

    fn run(&self, exe: &Path, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(BIN)
            .arg("--exe").arg(exe)
            .arg("--scripts").arg(self.scripts())
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
        child.wait_with_output().unwrap()
    }
}

#[test]
fn approves_every_script() {
    let fx = Fixture::new(&["t1.txt", "t2.txt"]);
    let output = fx.run(&fx.interpreter(), &[], "y\ny\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("Found 2 test scripts:\n"));
    assert!(stdout.contains("Beginning execution...\n"));
    assert!(stdout.ends_with("All scripts have been ran\n"));

    let listed = Fixture::listed(&stdout);
    assert_eq!(listed.len(), 2);
    assert_eq!(fx.calls(), listed);
}

#[test]
fn declining_stops_the_run() {
    let fx = Fixture::new(&["t1.txt", "t2.txt", "t3.txt"]);
    let output = fx.run(&fx.interpreter(), &[], "y\nn\ny\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Process terminated by the user."));
    assert!(!stdout.contains("All scripts have been ran"));

    let listed = Fixture::listed(&stdout);
    assert_eq!(fx.calls(), listed[..1].to_vec());
}

#[test]
fn missing_directory_fails() {
    let fx = Fixture::new(&[]);
    std::fs::remove_dir(fx.scripts()).unwrap();
    let output = fx.run(&fx.interpreter(), &[], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot list script directory"));
}

#[test]
fn missing_interpreter_does_not_stop_run() {
    let fx = Fixture::new(&["t1.txt", "t2.txt"]);
    let missing = fx.dir.path().join("no-such-interpreter");
    let output = fx.run(&missing, &[], "\n\n");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("All scripts have been ran\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to execute program"));
}

#[test]
fn yes_flag_skips_input() {
    let fx = Fixture::new(&["a.txt", "b.txt"]);
    let output = fx.run(&fx.interpreter(), &["--yes"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(fx.calls(), Fixture::listed(&stdout));
}

#[test]
fn count_only_lists() {
    let fx = Fixture::new(&["a.txt", "b.txt", "c.md"]);
    let output = fx.run(&fx.interpreter(), &["--count", "--ext", ".txt"], "");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Found 2 test scripts\n");
    assert!(fx.calls().is_empty());
}

#[test]
fn shell_metacharacters_reach_interpreter_verbatim() {
    let fx = Fixture::new(&["odd name; echo pwned.txt"]);
    let output = fx.run(&fx.interpreter(), &[], "y\n");

    assert!(output.status.success());
    assert_eq!(fx.calls(), vec!["odd name; echo pwned.txt"]);
}
