//! Control Loop
//!
//! Imperative shell around the controller state machine. Owns the serial
//! transmitter, the LED bank and the PWM timer, and turns each
//! [`Reaction`] into hardware writes and status lines. Waiting (settle time,
//! pauses, loop tick) is left to the caller so the loop runs unchanged on
//! the host.

use embedded_io::Write;

use crate::controller::state::{apply_byte, ControllerState, Reaction};
use crate::mailbox::CommandLatch;
use crate::ports::{OutputBank, ReloadTimer};
use crate::protocol::LineWriter;

/// Command interpreter wired to its collaborators
pub struct ControlLoop<W, B, T> {
    state: ControllerState,
    link: LineWriter<W>,
    outputs: B,
    pwm: T,
}

impl<W, B, T> ControlLoop<W, B, T>
where
    W: Write,
    B: OutputBank,
    T: ReloadTimer,
{
    /// Wire up a control loop starting from `state`
    #[must_use]
    pub const fn new(state: ControllerState, serial: W, outputs: B, pwm: T) -> Self {
        Self {
            state,
            link: LineWriter::new(serial),
            outputs,
            pwm,
        }
    }

    /// Wire up a control loop in the boot state
    #[must_use]
    pub const fn with_boot_state(serial: W, outputs: B, pwm: T) -> Self {
        Self::new(ControllerState::boot(), serial, outputs, pwm)
    }

    /// Announce the firmware and show the initial pattern and intensity
    ///
    /// Call once the serial port has settled. The pattern and reload are
    /// applied even if the banner fails.
    pub fn start(&mut self) -> Result<(), W::Error> {
        let sent = self.link.banner();
        self.outputs.write(self.state.outputs());
        self.pwm.set_reload(self.state.reload());
        sent
    }

    /// Run one iteration against the latched command
    ///
    /// Updates the LED bank and the PWM timer. The status line is left to
    /// [`Self::report`] so a transmit failure cannot cost the caller the
    /// requested pause.
    pub fn step(&mut self, latch: &CommandLatch) -> Reaction {
        let latched = latch.peek();
        let (next, reaction) = apply_byte(self.state, latched);
        self.state = next;

        if reaction.clear_latch {
            latch.clear_if(latched);
        }
        if reaction.outputs_changed {
            self.outputs.write(next.outputs());
        }
        if let Some(reload) = reaction.reload {
            self.pwm.set_reload(reload);
        }

        reaction
    }

    /// Transmit the status line of a reaction, if it has one
    pub fn report(&mut self, reaction: &Reaction) -> Result<(), W::Error> {
        match reaction.status {
            Some(status) => self.link.status(status),
            None => Ok(()),
        }
    }

    /// Get the controller state
    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Get the LED bank
    pub fn outputs(&self) -> &B {
        &self.outputs
    }

    /// Get the PWM timer
    pub fn pwm(&self) -> &T {
        &self.pwm
    }

    /// Get the serial transmitter
    pub fn serial_mut(&mut self) -> &mut W {
        self.link.port_mut()
    }

    /// Release the collaborators
    pub fn release(self) -> (W, B, T) {
        (self.link.into_inner(), self.outputs, self.pwm)
    }
}
