//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the LED sequencer hardware.
//! Serial settings, delays, the PWM timebase and pin mappings are centralized here.

use crate::types::{DutyLevel, OutputPattern, ScaleFactor};

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// Serial bit rate for the command link
pub const SERIAL_BAUD_RATE: u32 = 19_200;

/// Settle time after the serial port is configured, before the banner
pub const SERIAL_SETTLE_MS: u32 = 100;

/// Pause after a movement or blink command
pub const MOVE_PAUSE_MS: u32 = 500;

/// Interval between control loop iterations
///
/// The executor is cooperative; the loop has to yield for the receiver task
/// to run.
pub const CONTROL_TICK_MS: u32 = 1;

/// Output word shown once the banner has been sent
pub const INITIAL_PATTERN: OutputPattern = OutputPattern::from_bits(0x01);

/// Startup intensity (10%)
pub const INITIAL_DUTY: DutyLevel = DutyLevel::MIN.step_up();

/// Maximum rendered status line length
pub const STATUS_LINE_CAPACITY: usize = 48;

/// PWM reference timebase
///
/// Reload values are expressed in ticks of an 8-bit count-up timer fed by
/// `clock_hz / (prescaler * postscaler)`. One duty step lasts `step_us`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmTiming {
    /// Timer input clock
    pub clock_hz: u32,
    /// Timer prescaler
    pub prescaler: u32,
    /// Timer postscaler
    pub postscaler: u32,
    /// Duration of one duty step in microseconds
    pub step_us: u32,
}

impl PwmTiming {
    /// Ticks per duty step (integer truncation)
    #[must_use]
    pub const fn ticks_per_step(&self) -> u32 {
        (self.clock_hz / 1_000_000) * self.step_us / (self.prescaler * self.postscaler)
    }

    /// Derive the reload scale factor, `None` if a full-scale period overflows the timer
    #[must_use]
    pub const fn scale_factor(&self) -> Option<ScaleFactor> {
        let ticks = self.ticks_per_step();
        if ticks > u8::MAX as u32 {
            None
        } else {
            ScaleFactor::new(ticks as u8)
        }
    }

    /// Duration of a single timer tick in nanoseconds
    #[must_use]
    pub const fn tick_ns(&self) -> u32 {
        (self.prescaler * self.postscaler * 1_000) / (self.clock_hz / 1_000_000)
    }

    /// Frequency of one full-scale PWM period in Hz
    #[must_use]
    pub const fn pwm_frequency_hz(&self) -> u32 {
        match self.scale_factor() {
            Some(scale) => 1_000_000_000 / (self.tick_ns() * scale.full_scale_ticks() as u32),
            None => 0,
        }
    }
}

/// Timebase of the reference design: 20MHz oscillator, 1:32 prescaler,
/// 1:4 postscaler, 100us per duty step
pub const PWM_TIMING: PwmTiming = PwmTiming {
    clock_hz: 20_000_000,
    prescaler: 32,
    postscaler: 4,
    step_us: 100,
};

/// Scale factor applied to every reload computation
pub const SCALE_FACTOR: ScaleFactor = match PWM_TIMING.scale_factor() {
    Some(scale) => scale,
    None => panic!("PWM timebase overflows the 8-bit timer"),
};

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// LED bank, bit 0 through bit 7
    pub const LED_BANK: [&str; 8] = ["PB0", "PB1", "PB2", "PB3", "PB4", "PB5", "PB6", "PB7"];

    /// LED bank intensity PWM output
    pub const LED_PWM: &str = "PA6";

    /// Command link TX
    pub const SERIAL_TX: &str = "PA9";

    /// Command link RX
    pub const SERIAL_RX: &str = "PA10";
}

/// DMA channel assignments
pub mod dma {
    //! DMA channel assignments for the serial link

    /// USART1 TX DMA channel
    pub const USART1_TX: u8 = 1;

    /// USART1 RX DMA channel
    pub const USART1_RX: u8 = 2;
}

/// Timer assignments
pub mod timers {
    //! Hardware timer assignments

    /// LED intensity PWM timer
    pub const LED_PWM: u8 = 3;
}
