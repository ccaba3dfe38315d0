//! Command Interpreter
//!
//! State machine mapping received command bytes to LED patterns and
//! PWM intensity. Implements the functional core of the firmware.

pub mod edge;
pub mod state;
