//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;

/// Usage block printed on every invalid invocation
pub const USAGE: &str =
    "Simple CLI sample\n\nUsage:\n  greet --name <NAME>\n  add --a <INT> --b <INT>\n";

/// Build a command for the binary with a clean diagnostic environment
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("cli-sample").unwrap();
    cmd.env_remove("CLI_SAMPLE_VERBOSITY");
    cmd
}

/// Run the binary and return (exit code, stdout, stderr)
pub fn run(args: &[&str]) -> (i32, String, String) {
    let output = cli().args(args).output().unwrap();
    (
        output.status.code().unwrap(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}
