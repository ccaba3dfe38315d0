//! Command Link (USART)
//!
//! 8N1 serial link at the configured bit rate. Transmission is blocking
//! through `embedded_io::Write` on [`UartTx`]; reception runs as a DMA read
//! of one byte at a time that feeds the [`CommandLatch`].

use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Config, DataBits, Parity, StopBits, UartRx};

use crate::config::SERIAL_BAUD_RATE;
use crate::mailbox::{CommandLatch, RxFault};

pub use embassy_stm32::usart::{Uart, UartTx};

/// Serial operation result
pub type SerialResult<T> = Result<T, usart::Error>;

impl From<usart::Error> for RxFault {
    fn from(err: usart::Error) -> Self {
        match err {
            usart::Error::Overrun => Self::Overrun,
            usart::Error::Framing | usart::Error::Noise | usart::Error::Parity => Self::Framing,
            _ => Self::Framing,
        }
    }
}

/// USART configuration for the command link
#[must_use]
pub fn link_config() -> Config {
    let mut config = Config::default();
    config.baudrate = SERIAL_BAUD_RATE;
    config.data_bits = DataBits::DataBits8;
    config.stop_bits = StopBits::STOP1;
    config.parity = Parity::ParityNone;
    config
}

/// Wait for one byte and hand it to the latch
///
/// On a framing or overrun error the driver has already cleared the
/// receiver; the byte is dropped and the latch keeps its previous value.
pub async fn receive_into(rx: &mut UartRx<'_, Async>, latch: &CommandLatch) -> Result<(), RxFault> {
    let mut byte = [0u8; 1];
    let received: SerialResult<()> = rx.read(&mut byte).await;
    latch.accept(received.map(|()| byte[0]).map_err(RxFault::from))
}
