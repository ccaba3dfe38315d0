//! Command Latch Tests
//!
//! Tests for latest-wins latching, fault handling and conditional clearing.

use std::sync::Arc;
use std::thread;

use led_sequencer::mailbox::{CommandLatch, RxFault};
use led_sequencer::types::{Command, NO_COMMAND};

#[test]
fn starts_empty() {
    let latch = CommandLatch::new();
    assert!(latch.is_empty());
    assert_eq!(latch.peek(), NO_COMMAND);
    assert!(latch.command().is_none());
}

#[test]
fn last_write_wins() {
    let latch = CommandLatch::default();
    latch.latch(b'F');
    latch.latch(b'P');
    assert_eq!(latch.peek(), b'P');
    assert_eq!(latch.command(), Some(Command::IntensityUp));
}

#[test]
fn peek_does_not_consume() {
    let latch = CommandLatch::new();
    latch.latch(b'A');
    assert_eq!(latch.peek(), b'A');
    assert_eq!(latch.peek(), b'A');
}

#[test]
fn accept_good_byte() {
    let latch = CommandLatch::new();
    assert_eq!(latch.accept(Ok(b'D')), Ok(()));
    assert_eq!(latch.peek(), b'D');
}

#[test]
fn framing_fault_leaves_latch() {
    let latch = CommandLatch::new();
    latch.latch(b'F');
    assert_eq!(latch.accept(Err(RxFault::Framing)), Err(RxFault::Framing));
    assert_eq!(latch.peek(), b'F');
}

#[test]
fn overrun_fault_leaves_latch() {
    let latch = CommandLatch::new();
    assert_eq!(latch.accept(Err(RxFault::Overrun)), Err(RxFault::Overrun));
    assert!(latch.is_empty());
}

#[test]
fn clear_if_matching() {
    let latch = CommandLatch::new();
    latch.latch(b'Z');
    assert!(latch.clear_if(b'Z'));
    assert!(latch.is_empty());
}

#[test]
fn clear_if_keeps_newer_byte() {
    let latch = CommandLatch::new();
    latch.latch(b'Z');
    let seen = latch.peek();
    // Receiver delivers a real command between the read and the clear
    latch.latch(b'F');
    assert!(!latch.clear_if(seen));
    assert_eq!(latch.peek(), b'F');
}

#[test]
fn clear_unconditional() {
    let latch = CommandLatch::new();
    latch.latch(b'L');
    latch.clear();
    assert!(latch.is_empty());
}

#[test]
fn shared_between_threads() {
    let latch = Arc::new(CommandLatch::new());
    let writer = Arc::clone(&latch);
    let handle = thread::spawn(move || {
        for byte in *b"FADEPL" {
            writer.latch(byte);
        }
    });
    handle.join().unwrap();
    assert_eq!(latch.peek(), b'L');
}
