//! LED Sequencer Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! LED sequencer driven by single-character commands over a serial link.
//! Eight LEDs are moved, blinked and dimmed; intensity is a PWM duty cycle
//! expressed as the reload value of a count-up timer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        Control Loop  │  Status Lines  │  Command Latch       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   FUNCTIONAL CORE                            │
//! │   Controller State Machine  │  Edge Counters  │  Types       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │        USART  │  TIM PWM  │  GPIO LED bank                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Transitions are values**: `apply_byte` returns the next state and a
//!   `Reaction`; nothing in the core touches hardware
//! - **Ranges in the types**: `DutyLevel` and `ScaleFactor` cannot leave their ranges
//! - **Hardware behind traits**: `embedded-hal` pins, `embedded-io` serial,
//!   and the crate's own `OutputBank`/`ReloadTimer` ports
//! - **Host testable**: everything except `hal` builds with `std`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// USART and timer adapters for the STM32G474.
#[cfg(feature = "embedded")]
pub mod hal;

/// Peripheral Drivers
///
/// LED bank over `embedded-hal` output pins.
pub mod drivers;

/// Command Interpreter
///
/// State machine mapping commands to LED patterns and intensity.
pub mod controller;

/// Control Loop
///
/// Boot sequence and per-iteration side effects.
pub mod app;

/// Command Latch
///
/// Single-slot mailbox between the receiver and the control loop.
pub mod mailbox;

/// Port traits for the LED bank and the PWM timer
pub mod ports;

/// Communication Protocols
///
/// Startup banner and status lines.
pub mod protocol;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::app::ControlLoop;
    pub use crate::config::*;
    pub use crate::controller::state::{ControllerState, Reaction};
    pub use crate::drivers::led_bank::LedBank;
    pub use crate::hal::pwm::LedPwm;
    pub use crate::mailbox::{CommandLatch, RxFault};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
