//! Hardware Abstraction Layer
//!
//! Binds the port traits to STM32G474 peripherals through embassy-stm32.
//! This module isolates hardware-specific code.

pub mod pwm;
pub mod uart;
