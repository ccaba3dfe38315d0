//! Command Latch
//!
//! Single-slot, latest-wins cell between the serial receiver and the
//! control loop. The receiver overwrites it whenever a byte arrives; the
//! loop reads it once per iteration without consuming it, and resets it to
//! "no command" when it holds an unrecognized byte.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::types::{Command, NO_COMMAND};

/// Receive-side transport fault
///
/// Both kinds are handled the same way: the receiver is reset and the
/// offending byte is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RxFault {
    /// Stop bit missing (also reported for noise and parity errors)
    Framing,
    /// A byte arrived before the previous one was read
    Overrun,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RxFault {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Framing => defmt::write!(f, "framing"),
            Self::Overrun => defmt::write!(f, "overrun"),
        }
    }
}

/// Latest received command byte
pub struct CommandLatch {
    slot: Mutex<CriticalSectionRawMutex, Cell<u8>>,
}

impl CommandLatch {
    /// Create an empty latch
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(NO_COMMAND)),
        }
    }

    /// Overwrite the latch with a received byte
    pub fn latch(&self, byte: u8) {
        self.slot.lock(|slot| slot.set(byte));
    }

    /// Take the outcome of one receive operation
    ///
    /// A good byte is latched. A fault leaves the latch untouched and is
    /// handed back for logging.
    pub fn accept(&self, received: Result<u8, RxFault>) -> Result<(), RxFault> {
        let byte = received?;
        self.latch(byte);
        Ok(())
    }

    /// Read the latched byte without consuming it
    #[must_use]
    pub fn peek(&self) -> u8 {
        self.slot.lock(Cell::get)
    }

    /// Decode the latched byte
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        Command::from_byte(self.peek())
    }

    /// Check whether nothing is latched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peek() == NO_COMMAND
    }

    /// Reset to "no command", but only if the latch still holds `seen`
    ///
    /// Returns false when a newer byte arrived since `seen` was read; that
    /// byte is kept.
    pub fn clear_if(&self, seen: u8) -> bool {
        self.slot.lock(|slot| {
            if slot.get() == seen {
                slot.set(NO_COMMAND);
                true
            } else {
                false
            }
        })
    }

    /// Reset to "no command" unconditionally
    pub fn clear(&self) {
        self.latch(NO_COMMAND);
    }
}

impl Default for CommandLatch {
    fn default() -> Self {
        Self::new()
    }
}
