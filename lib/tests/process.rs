//! # yspata Process Runner Integration Tests
//!
//! File: lib/tests/process.rs
//!
//! ## Overview
//!
//! Runs real programs (`echo`, `false`, `sh`, `cat`, `seq`) through
//! `ProcessRunner` and checks captured output, exit statuses, error variants
//! and hook behaviour. POSIX-only.
//!
#![cfg(unix)]

mod common;
use common::*;

use std::io::{Read, Write};
use std::sync::{Arc, Mutex};

/// # Test Echo (`test_echo_hello`)
///
/// `echo hello` succeeds with exactly `hello\n` on stdout and nothing on stderr.
#[test]
fn test_echo_hello() {
    let (runner, log) = buffered_runner();
    let result = runner.run(&CommandSpec::new("echo", ["hello"]), Hooks::new());

    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
    assert_eq!(result.status, 0);
    assert_eq!(result.stdout, "hello\n");
    assert_eq!(result.stderr, "");
    assert_eq!(result.command, "echo");
    assert_eq!(result.args, vec!["hello"]);
    // The command line is echoed at Info level before the run.
    assert_eq!(log.contents(), "# echo hello\n");
}

/// # Test Byte-Exact Capture (`test_stdout_capture_is_byte_exact`)
#[test]
fn test_stdout_capture_is_byte_exact() {
    let result = run_sh(r"printf 'a  b\tc\n\nünï\r\nend'");
    assert!(result.success());
    assert_eq!(result.stdout, "a  b\tc\n\nünï\r\nend");
}

/// # Test Separate Streams (`test_stdout_and_stderr_captured_separately`)
#[test]
fn test_stdout_and_stderr_captured_separately() {
    let result = run_sh("printf out; printf err >&2; printf more");
    assert!(result.success());
    assert_eq!(result.stdout, "outmore");
    assert_eq!(result.stderr, "err");
}

/// # Test `false` (`test_false_exits_one`)
#[test]
fn test_false_exits_one() {
    let (runner, _) = buffered_runner();
    let result = runner.run(&CommandSpec::new("false", Vec::<String>::new()), Hooks::new());
    assert_eq!(result.status, 1);
    assert!(matches!(
        result.error,
        Some(YspataError::NonZeroExit { status: 1, .. })
    ));
    assert_eq!(result.exit_code(), Some(1));
    assert!(!result.failed_to_start());
}

/// # Test Non-Zero Exit Keeps Output (`test_non_zero_exit_keeps_output`)
///
/// A failing program is a structured result, not a launch error: its output is still captured.
#[test]
fn test_non_zero_exit_keeps_output() {
    let result = run_sh("echo partial; echo oops >&2; exit 7");
    assert_eq!(result.status, 7);
    assert!(matches!(
        result.error,
        Some(YspataError::NonZeroExit { status: 7, .. })
    ));
    assert_eq!(result.stdout, "partial\n");
    assert_eq!(result.stderr, "oops\n");
}

/// # Test Killed By Signal (`test_killed_by_signal`)
#[test]
fn test_killed_by_signal() {
    let result = run_sh("kill -9 $$");
    assert_eq!(result.status, -1);
    assert!(matches!(
        result.error,
        Some(YspataError::NonZeroExit { status: -1, .. })
    ));
}

/// # Test Missing Binary (`test_nonexistent_program_is_launch_error`)
///
/// A program that cannot be started yields `Launch` and leaves status at 0.
#[test]
fn test_nonexistent_program_is_launch_error() {
    let (runner, _) = buffered_runner();
    let result = runner.run(
        &CommandSpec::new("/nonexistent/binary", Vec::<String>::new()),
        Hooks::new(),
    );
    assert_eq!(result.status, 0);
    assert!(matches!(result.error, Some(YspataError::Launch { .. })));
    assert!(result.failed_to_start());
    assert_eq!(result.exit_code(), None);
    assert_eq!(result.stdout, "");
}

/// # Test Input Hook (`test_input_hook_feeds_stdin`)
///
/// Bytes written by the input hook are exactly what `cat` reads and echoes back.
#[test]
fn test_input_hook_feeds_stdin() {
    let input = "first line\nsecond ünïcode line\nno trailing newline";
    let (runner, _) = buffered_runner();
    let hooks = Hooks::new().on_stdin(|stdin: &mut dyn Write| {
        stdin.write_all(input.as_bytes()).unwrap();
    });
    let result = runner.run(&CommandSpec::new("cat", Vec::<String>::new()), hooks);
    assert!(result.success());
    assert_eq!(result.stdout, input);
}

/// # Test No Input Hook (`test_no_input_hook_gives_empty_stdin`)
///
/// Without an input hook `cat` sees end-of-input at once instead of hanging.
#[test]
fn test_no_input_hook_gives_empty_stdin() {
    let (runner, _) = buffered_runner();
    let result = runner.run(&CommandSpec::new("cat", Vec::<String>::new()), Hooks::new());
    assert!(result.success());
    assert_eq!(result.stdout, "");
}

/// # Test Input Hook That Writes Nothing (`test_input_hook_writing_nothing`)
#[test]
fn test_input_hook_writing_nothing() {
    let (runner, _) = buffered_runner();
    let hooks = Hooks::new().on_stdin(|_stdin: &mut dyn Write| {});
    let result = runner.run(&CommandSpec::new("wc", ["-c"]), hooks);
    assert!(result.success());
    assert_eq!(result.stdout.trim(), "0");
}

/// # Test Stdout Hook Duplication (`test_stdout_hook_sees_captured_bytes`)
///
/// The stdout hook observes the same bytes that end up in `result.stdout`.
#[test]
fn test_stdout_hook_sees_captured_bytes() {
    let mut seen = String::new();
    let (runner, _) = buffered_runner();
    let hooks = Hooks::new().on_stdout(|stdout: &mut dyn Read| {
        stdout.read_to_string(&mut seen).unwrap();
    });
    let result = runner.run(&CommandSpec::new("seq", ["1", "500"]), hooks);
    assert!(result.success());
    assert!(!seen.is_empty());
    assert_eq!(seen, result.stdout);
    assert!(result.stdout.ends_with("499\n500\n"));
}

/// # Test Both Hooks (`test_stdout_and_stderr_hooks_complete_before_return`)
///
/// Both hooks have finished, and both captures are complete, once `run` returns.
#[test]
fn test_stdout_and_stderr_hooks_complete_before_return() {
    let out_seen = Arc::new(Mutex::new(Vec::new()));
    let err_seen = Arc::new(Mutex::new(Vec::new()));
    let (out_sink, err_sink) = (Arc::clone(&out_seen), Arc::clone(&err_seen));

    let (runner, _) = buffered_runner();
    let hooks = Hooks::new()
        .on_stdout(move |r: &mut dyn Read| {
            r.read_to_end(&mut out_sink.lock().unwrap()).unwrap();
        })
        .on_stderr(move |r: &mut dyn Read| {
            r.read_to_end(&mut err_sink.lock().unwrap()).unwrap();
        });
    let script = "i=0; while [ $i -lt 300 ]; do echo out$i; echo err$i >&2; i=$((i+1)); done";
    let result = runner.run(&CommandSpec::new("sh", ["-c", script]), hooks);

    assert!(result.success());
    assert_eq!(out_seen.lock().unwrap().as_slice(), result.stdout.as_bytes());
    assert_eq!(err_seen.lock().unwrap().as_slice(), result.stderr.as_bytes());
    assert!(result.stdout.ends_with("out299\n"));
    assert!(result.stderr.ends_with("err299\n"));
}

/// # Test Partial Hook (`test_capture_complete_when_hook_stops_early`)
///
/// A hook that reads only the first line does not truncate the captured text.
#[test]
fn test_capture_complete_when_hook_stops_early() {
    let mut first = [0u8; 2];
    let (runner, _) = buffered_runner();
    let hooks = Hooks::new().on_stdout(|r: &mut dyn Read| {
        r.read_exact(&mut first).unwrap();
    });
    let result = runner.run(&CommandSpec::new("seq", ["1", "1000"]), hooks);
    assert!(result.success());
    assert_eq!(&first, b"1\n");
    assert_eq!(result.stdout.lines().count(), 1000);
}

/// # Test Large Output (`test_large_output_without_hooks`)
///
/// Output well beyond the pipe capacity is drained without a hook and without deadlock.
#[test]
fn test_large_output_without_hooks() {
    let (runner, _) = buffered_runner();
    let result = runner.run(&CommandSpec::new("seq", ["1", "50000"]), Hooks::new());
    assert!(result.success());
    assert!(result.stdout.len() > 64 * 1024);
    assert!(result.stdout.starts_with("1\n2\n"));
    assert!(result.stdout.ends_with("50000\n"));
}

/// # Test Logger As Hook (`test_logger_print_output_as_stdout_hook`)
#[test]
fn test_logger_print_output_as_stdout_hook() {
    let (runner, log) = buffered_runner();
    let logger = runner.logger().clone();
    let hooks = Hooks::new().on_stdout(move |r: &mut dyn Read| logger.print_output(r));
    let result = runner.run(&CommandSpec::new("printf", ["a\\nb\\n"]), hooks);
    assert!(result.success());
    assert_eq!(log.contents(), "# printf a\\nb\\n\na\nb\n");
}

/// # Test Two-Phase API (`test_start_then_wait`)
#[test]
fn test_start_then_wait() {
    let (runner, _) = buffered_runner();
    let spec = CommandSpec::from_line("echo two phases").unwrap();
    let started = runner.start(&spec, Hooks::new());
    assert!(started.result().error.is_none());
    assert_eq!(started.result().stdout, "");
    let result = started.wait();
    assert!(result.success());
    assert_eq!(result.stdout, "two phases\n");
}

/// # Test Independent Runs (`test_concurrent_runs_do_not_interfere`)
#[test]
fn test_concurrent_runs_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let result = run_sh(&format!("echo run{}; exit {}", i, i % 3));
                (i, result)
            })
        })
        .collect();
    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result.stdout, format!("run{}\n", i));
        assert_eq!(result.status, i % 3);
        assert_eq!(result.success(), i % 3 == 0);
    }
}
