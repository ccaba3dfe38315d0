//! Controller State Machine
//!
//! Holds the LED pattern, intensity and adjust counters, and applies one
//! latched command byte per control loop iteration.
//! Implements immutable state transitions for predictable behavior.

use super::edge::EdgeCounter;
use crate::config::{INITIAL_DUTY, INITIAL_PATTERN, MOVE_PAUSE_MS, SCALE_FACTOR};
use crate::protocol::StatusMessage;
use crate::types::{Command, DutyLevel, OutputPattern, ScaleFactor, TimerReload};

/// Complete controller state (immutable)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerState {
    /// LED bank word
    outputs: OutputPattern,
    /// PWM intensity
    duty: DutyLevel,
    /// Reload scale, fixed for the lifetime of the state
    scale: ScaleFactor,
    /// Held-iterations counter for `P`
    raise: EdgeCounter,
    /// Held-iterations counter for `L`
    lower: EdgeCounter,
}

impl ControllerState {
    /// Create a state with idle counters
    #[must_use]
    pub const fn new(outputs: OutputPattern, duty: DutyLevel, scale: ScaleFactor) -> Self {
        Self {
            outputs,
            duty,
            scale,
            raise: EdgeCounter::IDLE,
            lower: EdgeCounter::IDLE,
        }
    }

    /// State right after boot: first LED lit, 10% intensity
    #[must_use]
    pub const fn boot() -> Self {
        Self::new(INITIAL_PATTERN, INITIAL_DUTY, SCALE_FACTOR)
    }

    /// Get LED bank word
    #[must_use]
    pub const fn outputs(&self) -> OutputPattern {
        self.outputs
    }

    /// Get intensity
    #[must_use]
    pub const fn duty(&self) -> DutyLevel {
        self.duty
    }

    /// Get reload scale
    #[must_use]
    pub const fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Get timer reload for the current intensity
    #[must_use]
    pub const fn reload(&self) -> TimerReload {
        self.scale.reload_for(self.duty)
    }

    /// Get the `P` counter
    #[must_use]
    pub const fn raise_counter(&self) -> EdgeCounter {
        self.raise
    }

    /// Get the `L` counter
    #[must_use]
    pub const fn lower_counter(&self) -> EdgeCounter {
        self.lower
    }

    /// Set LED word (returns new state)
    #[must_use]
    pub const fn with_outputs(self, outputs: OutputPattern) -> Self {
        Self { outputs, ..self }
    }

    /// Set intensity (returns new state)
    #[must_use]
    pub const fn with_duty(self, duty: DutyLevel) -> Self {
        Self { duty, ..self }
    }

    /// Release both adjust counters (returns new state)
    #[must_use]
    pub const fn release_counters(self) -> Self {
        Self {
            raise: self.raise.release(),
            lower: self.lower.release(),
            ..self
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::boot()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ControllerState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Ctrl({}, {}, {})", self.outputs, self.duty, self.reload());
    }
}

/// Side effects requested by one transition
///
/// The control loop carries these out against the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Reaction {
    /// Command decoded from the latched byte
    pub command: Option<Command>,
    /// LED word must be rewritten
    pub outputs_changed: bool,
    /// New reload for the PWM timer
    pub reload: Option<TimerReload>,
    /// Line to transmit
    pub status: Option<StatusMessage>,
    /// Pause before the next iteration
    pub pause_ms: Option<u32>,
    /// Latched byte must be reset to "no command"
    pub clear_latch: bool,
}

impl Reaction {
    /// Check whether the transition had any visible effect
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.outputs_changed
            && self.reload.is_none()
            && self.status.is_none()
            && self.pause_ms.is_none()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Reaction {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Reaction({}, outputs={}, reload={}, pause={})",
            self.command,
            self.outputs_changed,
            self.reload,
            self.pause_ms
        );
    }
}

/// Apply the latched byte to the state, returning new state and its side effects
#[must_use]
pub fn apply_byte(state: ControllerState, latched: u8) -> (ControllerState, Reaction) {
    let command = Command::from_byte(latched);

    let (next, mut reaction) = match command {
        Some(Command::Forward) => {
            move_pattern(state, state.outputs.forward(), StatusMessage::Forward)
        }
        Some(Command::Backward) => {
            move_pattern(state, state.outputs.backward(), StatusMessage::Backward)
        }
        Some(Command::ToggleLow) => {
            move_pattern(state, state.outputs.toggle_low(), StatusMessage::BlinkLow)
        }
        Some(Command::ToggleHigh) => {
            move_pattern(state, state.outputs.toggle_high(), StatusMessage::BlinkHigh)
        }
        Some(Command::IntensityUp) => {
            let (raise, fired) = state.raise.press();
            adjust_duty(ControllerState { raise, ..state }, fired, state.duty.step_up())
        }
        Some(Command::IntensityDown) => {
            let (lower, fired) = state.lower.press();
            adjust_duty(ControllerState { lower, ..state }, fired, state.duty.step_down())
        }
        None => (
            state,
            Reaction {
                clear_latch: true,
                ..Reaction::default()
            },
        ),
    };
    reaction.command = command;

    // A counter only survives while its own command stays latched
    let raise = if command == Some(Command::IntensityUp) {
        next.raise
    } else {
        next.raise.release()
    };
    let lower = if command == Some(Command::IntensityDown) {
        next.lower
    } else {
        next.lower.release()
    };

    (ControllerState { raise, lower, ..next }, reaction)
}

fn move_pattern(
    state: ControllerState,
    outputs: OutputPattern,
    status: StatusMessage,
) -> (ControllerState, Reaction) {
    let next = state.release_counters().with_outputs(outputs);
    let reaction = Reaction {
        outputs_changed: true,
        status: Some(status),
        pause_ms: Some(MOVE_PAUSE_MS),
        ..Reaction::default()
    };
    (next, reaction)
}

fn adjust_duty(state: ControllerState, fired: bool, duty: DutyLevel) -> (ControllerState, Reaction) {
    if !fired {
        return (state, Reaction::default());
    }

    let next = state.with_duty(duty);
    let reaction = Reaction {
        reload: Some(next.reload()),
        status: Some(StatusMessage::DutyCycle(duty)),
        ..Reaction::default()
    };
    (next, reaction)
}
