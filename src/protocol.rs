//! Communication Protocols
//!
//! Text sent back over the command link: the startup banner and one status
//! line per acted-upon command. Every line ends with LF followed by CR.

use core::fmt::Write as _;

use embedded_io::Write;
use heapless::String;

use crate::config::STATUS_LINE_CAPACITY;
use crate::types::DutyLevel;

/// Line terminator, LF then CR
pub const LINE_END: &[u8] = b"\n\r";

/// Startup banner listing the accepted keys
pub const BANNER: &str = "Pressionar as teclas F, A, D, E, P ou L";

/// Status line text
pub type StatusLine = String<STATUS_LINE_CAPACITY>;

/// Status reported after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    /// Pattern moved forward
    Forward,
    /// Pattern moved backward
    Backward,
    /// Low nibble toggled
    BlinkLow,
    /// High nibble toggled
    BlinkHigh,
    /// Intensity changed
    DutyCycle(DutyLevel),
}

impl StatusMessage {
    /// Fixed text, `None` for messages carrying a value
    #[must_use]
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            Self::Forward => Some("FRENTE"),
            Self::Backward => Some("ATRAS"),
            Self::BlinkLow => Some("PISCANDO MENOS SIGNIFICATIVO"),
            Self::BlinkHigh => Some("PISCANDO MAIS SIGNIFICATIVO"),
            Self::DutyCycle(_) => None,
        }
    }

    /// Render the message without terminator
    #[must_use]
    pub fn render(self) -> StatusLine {
        let mut line = StatusLine::new();
        match self {
            Self::DutyCycle(duty) => {
                let _ = write!(line, "Duty Cycle: {}%", duty.as_percent());
            }
            other => {
                let _ = line.push_str(other.fixed_text().unwrap_or_default());
            }
        }
        line
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for StatusMessage {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::DutyCycle(duty) => defmt::write!(f, "Duty Cycle: {}", duty),
            other => defmt::write!(f, "{=str}", other.fixed_text().unwrap_or_default()),
        }
    }
}

/// Writes protocol lines to the serial transmitter
pub struct LineWriter<W> {
    port: W,
}

impl<W: Write> LineWriter<W> {
    /// Wrap a serial transmitter
    #[must_use]
    pub const fn new(port: W) -> Self {
        Self { port }
    }

    /// Send one byte
    pub fn send(&mut self, byte: u8) -> Result<(), W::Error> {
        self.port.write_all(&[byte])
    }

    /// Send text without terminator
    pub fn send_str(&mut self, text: &str) -> Result<(), W::Error> {
        self.port.write_all(text.as_bytes())
    }

    /// Send text followed by LF CR
    pub fn send_line(&mut self, text: &str) -> Result<(), W::Error> {
        self.send_str(text)?;
        self.port.write_all(LINE_END)?;
        self.port.flush()
    }

    /// Send the startup banner
    pub fn banner(&mut self) -> Result<(), W::Error> {
        self.send_line(BANNER)
    }

    /// Send a status line
    pub fn status(&mut self, message: StatusMessage) -> Result<(), W::Error> {
        self.send_line(&message.render())
    }

    /// Get the underlying transmitter
    pub fn port_mut(&mut self) -> &mut W {
        &mut self.port
    }

    /// Release the underlying transmitter
    pub fn into_inner(self) -> W {
        self.port
    }
}
