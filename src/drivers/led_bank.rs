//! LED Bank Driver
//!
//! Drives eight LEDs from one output word: pin n follows bit n.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::ports::OutputBank;
use crate::types::OutputPattern;

/// Eight output pins treated as one word
pub struct LedBank<P> {
    pins: [P; 8],
    pattern: OutputPattern,
}

impl<P: OutputPin> LedBank<P> {
    /// Create an LED bank, driving every pin low
    pub fn new(pins: [P; 8]) -> Result<Self, P::Error> {
        let mut bank = Self {
            pins,
            pattern: OutputPattern::OFF,
        };
        bank.apply(OutputPattern::OFF)?;
        Ok(bank)
    }

    /// Drive the pins from `pattern`
    pub fn apply(&mut self, pattern: OutputPattern) -> Result<(), P::Error> {
        for (index, pin) in (0u8..).zip(self.pins.iter_mut()) {
            if pattern.is_set(index) {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        self.pattern = pattern;
        Ok(())
    }

    /// Get the last word written
    #[must_use]
    pub const fn pattern(&self) -> OutputPattern {
        self.pattern
    }

    /// Release the pins
    pub fn release(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin<Error = Infallible>> OutputBank for LedBank<P> {
    fn read(&self) -> OutputPattern {
        self.pattern
    }

    fn write(&mut self, pattern: OutputPattern) {
        if let Err(never) = self.apply(pattern) {
            match never {}
        }
    }
}
