//! Status Line Protocol Tests
//!
//! Tests for the banner, status texts and the LF CR line framing.

mod mock_hw;

use led_sequencer::protocol::{LineWriter, StatusMessage, BANNER, LINE_END};
use led_sequencer::types::DutyLevel;
use mock_hw::MockSerial;

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn fixed_texts() {
    assert_eq!(StatusMessage::Forward.render().as_str(), "FRENTE");
    assert_eq!(StatusMessage::Backward.render().as_str(), "ATRAS");
    assert_eq!(
        StatusMessage::BlinkLow.render().as_str(),
        "PISCANDO MENOS SIGNIFICATIVO"
    );
    assert_eq!(
        StatusMessage::BlinkHigh.render().as_str(),
        "PISCANDO MAIS SIGNIFICATIVO"
    );
}

#[test]
fn duty_cycle_text() {
    let line = StatusMessage::DutyCycle(DutyLevel::new(6).unwrap()).render();
    assert_eq!(line.as_str(), "Duty Cycle: 60%");
}

#[test]
fn duty_cycle_extremes() {
    assert_eq!(
        StatusMessage::DutyCycle(DutyLevel::MIN).render().as_str(),
        "Duty Cycle: 0%"
    );
    assert_eq!(
        StatusMessage::DutyCycle(DutyLevel::MAX).render().as_str(),
        "Duty Cycle: 100%"
    );
}

#[test]
fn duty_cycle_has_no_fixed_text() {
    assert!(StatusMessage::DutyCycle(DutyLevel::MAX).fixed_text().is_none());
    assert_eq!(StatusMessage::Forward.fixed_text(), Some("FRENTE"));
}

#[test]
fn banner_text() {
    assert_eq!(BANNER, "Pressionar as teclas F, A, D, E, P ou L");
}

#[test]
fn line_end_is_lf_cr() {
    assert_eq!(LINE_END, b"\n\r");
}

// ============================================================================
// Line Writer Tests
// ============================================================================

#[test]
fn banner_is_terminated() {
    let mut writer = LineWriter::new(MockSerial::new());
    writer.banner().unwrap();
    let serial = writer.into_inner();
    assert_eq!(
        serial.bytes,
        b"Pressionar as teclas F, A, D, E, P ou L\n\r".to_vec()
    );
    assert_eq!(serial.flushes, 1);
}

#[test]
fn status_line_is_terminated() {
    let mut writer = LineWriter::new(MockSerial::new());
    writer.status(StatusMessage::Forward).unwrap();
    writer
        .status(StatusMessage::DutyCycle(DutyLevel::new(2).unwrap()))
        .unwrap();
    assert_eq!(
        writer.into_inner().bytes,
        b"FRENTE\n\rDuty Cycle: 20%\n\r".to_vec()
    );
}

#[test]
fn send_and_send_str_are_raw() {
    let mut writer = LineWriter::new(MockSerial::new());
    writer.send(b'>').unwrap();
    writer.send_str("ok").unwrap();
    let serial = writer.into_inner();
    assert_eq!(serial.bytes, b">ok".to_vec());
    assert_eq!(serial.flushes, 0);
}

#[test]
fn transmit_error_propagates() {
    let mut writer = LineWriter::new(MockSerial::failing());
    assert!(writer.banner().is_err());
    assert!(writer.status(StatusMessage::Backward).is_err());
    assert!(writer.into_inner().bytes.is_empty());
}
