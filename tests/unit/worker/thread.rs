use std::time::Duration;

use super::*;
use crate::foundation::core::PathEstimate;

fn two_paths(_: &str) -> PathcostResult<Vec<PathEstimate>> {
    Ok(vec![
        PathEstimate::from_command_count(0, 1),
        PathEstimate::from_command_count(1, 2),
    ])
}

fn echo_len(markup: &str) -> PathcostResult<Vec<PathEstimate>> {
    Ok(vec![PathEstimate::from_command_count(0, markup.len())])
}

fn fails(_: &str) -> PathcostResult<Vec<PathEstimate>> {
    Err(PathcostError::parse("nope"))
}

fn panics(_: &str) -> PathcostResult<Vec<PathEstimate>> {
    panic!("task blew up")
}

fn sleeps(_: &str) -> PathcostResult<Vec<PathEstimate>> {
    std::thread::sleep(Duration::from_millis(500));
    Ok(Vec::new())
}

#[test]
fn replies_with_task_output() {
    let host = ThreadHost::default();
    assert!(host.is_supported());
    let mut w = host.spawn(two_paths).unwrap();
    w.post("<svg/>".to_string()).unwrap();
    let ev = w.recv(None).unwrap();
    assert_eq!(
        ev,
        WorkerEvent::Message(vec![
            PathEstimate { index: 0, length: 150 },
            PathEstimate { index: 1, length: 200 },
        ])
    );
    w.terminate();
}

#[test]
fn worker_only_sees_posted_markup() {
    let mut w = ThreadHost::new("t-echo", None).spawn(echo_len).unwrap();
    w.post("abcd".to_string()).unwrap();
    assert_eq!(
        w.recv(None),
        Some(WorkerEvent::Message(vec![PathEstimate { index: 0, length: 300 }]))
    );
}

#[test]
fn task_error_becomes_error_event() {
    let mut w = ThreadHost::default().spawn(fails).unwrap();
    w.post(String::new()).unwrap();
    match w.recv(None) {
        Some(WorkerEvent::Error(msg)) => assert!(msg.contains("nope")),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn task_panic_becomes_error_event() {
    let mut w = ThreadHost::default().spawn(panics).unwrap();
    w.post(String::new()).unwrap();
    assert!(matches!(w.recv(None), Some(WorkerEvent::Error(_))));
}

#[test]
fn recv_times_out_on_slow_task() {
    let mut w = ThreadHost::default().spawn(sleeps).unwrap();
    w.post(String::new()).unwrap();
    assert_eq!(w.recv(Some(Duration::from_millis(10))), None);
    w.terminate();
}

#[test]
fn post_after_terminate_fails_and_terminate_is_idempotent() {
    let mut w = ThreadHost::default().spawn(two_paths).unwrap();
    w.terminate();
    w.terminate();
    assert!(w.post(String::new()).is_err());
}

#[test]
fn custom_stack_size_is_honored() {
    let mut w = ThreadHost::new("t-stack", Some(256 * 1024))
        .spawn(two_paths)
        .unwrap();
    w.post(String::new()).unwrap();
    assert!(matches!(w.recv(None), Some(WorkerEvent::Message(_))));
}
