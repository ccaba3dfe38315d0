//! Shared types used across the LED sequencer firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

/// Byte value the latch holds when no command is pending
pub const NO_COMMAND: u8 = 0;

/// Single-byte command received over the serial link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `F`: light the next LED
    Forward,
    /// `A`: light the previous LED
    Backward,
    /// `D`: blink the low nibble
    ToggleLow,
    /// `E`: blink the high nibble
    ToggleHigh,
    /// `P`: raise intensity one step
    IntensityUp,
    /// `L`: lower intensity one step
    IntensityDown,
}

impl Command {
    /// All recognized commands
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::ToggleLow,
        Self::ToggleHigh,
        Self::IntensityUp,
        Self::IntensityDown,
    ];

    /// Decode a received byte (case-sensitive)
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'F' => Some(Self::Forward),
            b'A' => Some(Self::Backward),
            b'D' => Some(Self::ToggleLow),
            b'E' => Some(Self::ToggleHigh),
            b'P' => Some(Self::IntensityUp),
            b'L' => Some(Self::IntensityDown),
            _ => None,
        }
    }

    /// Wire byte for this command
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Forward => b'F',
            Self::Backward => b'A',
            Self::ToggleLow => b'D',
            Self::ToggleHigh => b'E',
            Self::IntensityUp => b'P',
            Self::IntensityDown => b'L',
        }
    }

    /// Whether the command moves or blinks the LEDs (and so pauses the loop)
    #[must_use]
    pub const fn is_pattern_command(self) -> bool {
        matches!(
            self,
            Self::Forward | Self::Backward | Self::ToggleLow | Self::ToggleHigh
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Forward => defmt::write!(f, "FWD"),
            Self::Backward => defmt::write!(f, "BACK"),
            Self::ToggleLow => defmt::write!(f, "BLINK-LO"),
            Self::ToggleHigh => defmt::write!(f, "BLINK-HI"),
            Self::IntensityUp => defmt::write!(f, "DUTY+"),
            Self::IntensityDown => defmt::write!(f, "DUTY-"),
        }
    }
}

/// State of the eight-LED output bank, bit n = LED n
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutputPattern(u8);

impl OutputPattern {
    /// All LEDs off
    pub const OFF: Self = Self(0x00);

    /// Lowest LED only
    pub const FIRST: Self = Self(0x01);

    /// Highest LED only
    pub const LAST: Self = Self(0x80);

    /// Bits 0-3
    pub const LOW_NIBBLE: u8 = 0x0F;

    /// Bits 4-7
    pub const HIGH_NIBBLE: u8 = 0xF0;

    /// Create from a raw word
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw word
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether LED `index` (0-7) is lit
    #[must_use]
    pub const fn is_set(self, index: u8) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }

    /// Advance one position, restarting at the first LED once the last is lit
    #[must_use]
    pub const fn forward(self) -> Self {
        if self.0 >= Self::LAST.0 {
            Self::FIRST
        } else {
            Self(self.0 << 1)
        }
    }

    /// Step back one position, restarting at the last LED once all are off
    #[must_use]
    pub const fn backward(self) -> Self {
        if self.0 == 0 {
            Self::LAST
        } else {
            Self(self.0 >> 1)
        }
    }

    /// Invert bits 0-3
    #[must_use]
    pub const fn toggle_low(self) -> Self {
        Self(self.0 ^ Self::LOW_NIBBLE)
    }

    /// Invert bits 4-7
    #[must_use]
    pub const fn toggle_high(self) -> Self {
        Self(self.0 ^ Self::HIGH_NIBBLE)
    }
}

impl fmt::Debug for OutputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputPattern({:08b})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for OutputPattern {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{:08b}", self.0);
    }
}

/// PWM intensity in tenths of full scale, always within 0..=10
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DutyLevel(u8);

impl DutyLevel {
    /// LEDs dark
    pub const MIN: Self = Self(0);

    /// Full intensity
    pub const MAX: Self = Self(10);

    /// Create a level, returns None above 10
    #[must_use]
    pub const fn new(tenths: u8) -> Option<Self> {
        if tenths <= Self::MAX.0 {
            Some(Self(tenths))
        } else {
            None
        }
    }

    /// Create a level, clamping to 10
    #[must_use]
    pub const fn saturating(tenths: u8) -> Self {
        if tenths > Self::MAX.0 {
            Self::MAX
        } else {
            Self(tenths)
        }
    }

    /// Level in tenths
    #[must_use]
    pub const fn tenths(self) -> u8 {
        self.0
    }

    /// Level as a percentage (0-100)
    #[must_use]
    pub const fn as_percent(self) -> u8 {
        self.0 * 10
    }

    /// One step brighter, held at 10
    #[must_use]
    pub const fn step_up(self) -> Self {
        Self::saturating(self.0 + 1)
    }

    /// One step dimmer, held at 0
    #[must_use]
    pub const fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DutyLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.as_percent());
    }
}

/// Timer ticks per duty step
///
/// Ten steps must fit the 256-count timer, so `10 * scale <= 256`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFactor(u8);

impl ScaleFactor {
    /// Largest scale whose full-scale period still fits the timer
    pub const MAX: Self = Self(25);

    /// Create a scale factor, returns None if zero or if ten steps overflow the timer
    #[must_use]
    pub const fn new(ticks: u8) -> Option<Self> {
        if ticks == 0 || ticks > Self::MAX.0 {
            None
        } else {
            Some(Self(ticks))
        }
    }

    /// Ticks per duty step
    #[must_use]
    pub const fn ticks(self) -> u8 {
        self.0
    }

    /// Ticks in a 100% period
    #[must_use]
    pub const fn full_scale_ticks(self) -> u16 {
        self.0 as u16 * DutyLevel::MAX.0 as u16
    }

    /// Reload value producing `duty`
    #[must_use]
    pub const fn reload_for(self, duty: DutyLevel) -> TimerReload {
        TimerReload(TimerReload::OVERFLOW - self.0 as u16 * duty.0 as u16)
    }
}

/// Start value of the count-up-to-overflow PWM timer
///
/// A smaller reload means a longer active time. DutyLevel 0 yields 256,
/// which lands on the 8-bit register as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerReload(u16);

impl TimerReload {
    /// Count at which the 8-bit timer overflows
    pub const OVERFLOW: u16 = 256;

    /// Computed reload value (6-256)
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Value as written to an 8-bit timer register
    #[must_use]
    pub const fn register(self) -> u8 {
        (self.0 % Self::OVERFLOW) as u8
    }

    /// Ticks between reload and overflow, i.e. the active time
    #[must_use]
    pub const fn active_ticks(self) -> u16 {
        Self::OVERFLOW - self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TimerReload {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TMR({})", self.0);
    }
}
