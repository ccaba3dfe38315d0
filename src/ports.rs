//! Port traits between the controller and the hardware
//!
//! ```text
//!   hal adapter ──▶ port trait ──▶ ControlLoop
//! ```
//!
//! The serial transmitter uses `embedded_io::Write` directly; the LED bank
//! and the PWM timer have no standard trait and are described here.

use crate::types::{OutputPattern, TimerReload};

/// Eight binary outputs addressable as a word or per bit
pub trait OutputBank {
    /// Current word
    fn read(&self) -> OutputPattern;

    /// Drive all eight outputs from `pattern`
    fn write(&mut self, pattern: OutputPattern);

    /// Invert a single output (0-7); out-of-range indices are ignored
    fn invert(&mut self, index: u8) {
        if index < 8 {
            let bits = self.read().bits() ^ (1 << index);
            self.write(OutputPattern::from_bits(bits));
        }
    }
}

/// Countdown timer whose reload value sets the PWM duty
pub trait ReloadTimer {
    /// Load a new reload value, effective from the next period
    fn set_reload(&mut self, reload: TimerReload);
}

impl<T: OutputBank + ?Sized> OutputBank for &mut T {
    fn read(&self) -> OutputPattern {
        (**self).read()
    }

    fn write(&mut self, pattern: OutputPattern) {
        (**self).write(pattern);
    }
}

impl<T: ReloadTimer + ?Sized> ReloadTimer for &mut T {
    fn set_reload(&mut self, reload: TimerReload) {
        (**self).set_reload(reload);
    }
}
