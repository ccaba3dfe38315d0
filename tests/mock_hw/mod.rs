//! Mock hardware for host tests.
//!
//! Records every serial byte, pin level and reload so tests can assert on
//! the full history without touching real peripherals.

#![allow(dead_code)]

use core::convert::Infallible;

use embedded_io::{ErrorKind, ErrorType, Write};
use led_sequencer::ports::{OutputBank, ReloadTimer};
use led_sequencer::types::{OutputPattern, TimerReload};

// ── Serial transmitter ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSerialError;

impl embedded_io::Error for MockSerialError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug, Default)]
pub struct MockSerial {
    pub bytes: Vec<u8>,
    pub fail: bool,
    pub flushes: usize,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Lines split on the LF CR terminator
    pub fn lines(&self) -> Vec<String> {
        self.text()
            .split_terminator("\n\r")
            .map(str::to_owned)
            .collect()
    }
}

impl ErrorType for MockSerial {
    type Error = MockSerialError;
}

impl Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail {
            return Err(MockSerialError);
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockSerialError);
        }
        self.flushes += 1;
        Ok(())
    }
}

// ── Output pin ────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

pub fn mock_pins() -> [MockPin; 8] {
    [MockPin::default(); 8]
}

pub fn levels(pins: &[MockPin; 8]) -> u8 {
    pins.iter()
        .enumerate()
        .fold(0u8, |word, (i, pin)| if pin.high { word | (1 << i) } else { word })
}

// ── Output bank without pins ──────────────────────────────────

#[derive(Debug, Default)]
pub struct MockBank {
    pub word: u8,
    pub history: Vec<u8>,
}

impl OutputBank for MockBank {
    fn read(&self) -> OutputPattern {
        OutputPattern::from_bits(self.word)
    }

    fn write(&mut self, pattern: OutputPattern) {
        self.word = pattern.bits();
        self.history.push(pattern.bits());
    }
}

// ── PWM timer ─────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockTimer {
    pub reloads: Vec<TimerReload>,
}

impl MockTimer {
    pub fn last(&self) -> Option<TimerReload> {
        self.reloads.last().copied()
    }
}

impl ReloadTimer for MockTimer {
    fn set_reload(&mut self, reload: TimerReload) {
        self.reloads.push(reload);
    }
}
