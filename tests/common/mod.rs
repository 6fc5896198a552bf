#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

pub fn run_namer(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_namer"));
    command.env_remove("NAMER_LOG");
    command.args(args);
    command.output().expect("failed to run namer binary")
}

pub fn run_namer_with_stdin(args: &[&str], input: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_namer"));
    command.env_remove("NAMER_LOG");
    command.args(args);
    command.stdin(Stdio::piped());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command.spawn().expect("failed to spawn namer binary");
    let stdin = child.stdin.as_mut().expect("stdin should be available");
    stdin
        .write_all(input.as_bytes())
        .expect("stdin write should succeed");
    child
        .wait_with_output()
        .expect("failed to read process output")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be utf-8")
        .trim_end_matches('\n')
        .to_string()
}

pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
