//! LED Sequencer Main Application
//!
//! Entry point for the STM32G474-based LED sequencer firmware.
//! Initializes hardware, spawns the serial receiver and runs the control loop.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Uart, UartRx};
use embassy_stm32::{bind_interrupts, peripherals};
use {defmt_rtt as _, panic_probe as _};

use led_sequencer::hal::uart::{link_config, receive_into};
use led_sequencer::prelude::*;

/// Latest command byte, written by the receiver task
static LATCH: CommandLatch = CommandLatch::new();

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("LED Sequencer Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // LED bank on PB0-PB7, all off until the banner is out
    let leds = LedBank::new([
        Output::new(p.PB0, Level::Low, Speed::Low),
        Output::new(p.PB1, Level::Low, Speed::Low),
        Output::new(p.PB2, Level::Low, Speed::Low),
        Output::new(p.PB3, Level::Low, Speed::Low),
        Output::new(p.PB4, Level::Low, Speed::Low),
        Output::new(p.PB5, Level::Low, Speed::Low),
        Output::new(p.PB6, Level::Low, Speed::Low),
        Output::new(p.PB7, Level::Low, Speed::Low),
    ])
    .unwrap_or_else(|never| match never {});

    // Intensity PWM on TIM3 CH1 (PA6)
    let pwm = LedPwm::new(p.TIM3, p.PA6, SCALE_FACTOR);

    // USART1 for the command link
    // PA9 = TX, PA10 = RX
    let uart = defmt::unwrap!(Uart::new(
        p.USART1,
        p.PA10, // RX
        p.PA9,  // TX
        Irqs,
        p.DMA1_CH1,
        p.DMA1_CH2,
        link_config(),
    ));
    let (tx, rx) = uart.split();

    info!(
        "LEDs on {=str}..{=str}, PWM on {=str} (TIM{})",
        pins::LED_BANK[0],
        pins::LED_BANK[7],
        pins::LED_PWM,
        timers::LED_PWM
    );
    info!(
        "USART1 initialized at {} baud, TX {=str} RX {=str}",
        SERIAL_BAUD_RATE,
        pins::SERIAL_TX,
        pins::SERIAL_RX
    );

    // Let the line settle before the banner
    Timer::after(Duration::from_millis(u64::from(SERIAL_SETTLE_MS))).await;

    let mut control = ControlLoop::with_boot_state(tx, leds, pwm);
    if let Err(err) = control.start() {
        warn!("Banner not sent: {}", err);
    }
    info!("Boot state {}", control.state());

    // Commands are only accepted once the boot state is showing
    spawner.spawn(receiver_task(rx)).unwrap();

    info!("Receiver enabled, entering control loop");

    loop {
        let reaction = control.step(&LATCH);
        if !reaction.is_idle() {
            info!("{} -> {}", reaction, control.state());
        }
        if let Err(err) = control.report(&reaction) {
            warn!("Status line not sent: {}", err);
        }

        let wait_ms = reaction.pause_ms.unwrap_or(CONTROL_TICK_MS);
        Timer::after(Duration::from_millis(u64::from(wait_ms))).await;
    }
}

/// Receiver task - latches every byte that arrives on the command link
#[embassy_executor::task]
async fn receiver_task(mut rx: UartRx<'static, Async>) {
    loop {
        if let Err(fault) = receive_into(&mut rx, &LATCH).await {
            warn!("RX {} error, byte dropped", fault);
        }
    }
}
