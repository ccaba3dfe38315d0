//! Peripheral Drivers
//!
//! Domain-level drivers built on `embedded-hal` traits, so they run
//! against real pins on the target and against mocks on the host.

pub mod led_bank;
