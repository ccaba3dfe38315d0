//! LED Intensity PWM
//!
//! The controller works in reload values of an 8-bit count-up timer. On the
//! STM32 the same duty is produced by a general-purpose timer channel whose
//! period spans the full-scale tick count; the active ticks of a reload
//! become the compare value.

use embassy_stm32::gpio::OutputType;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::timer::{Channel1Pin, GeneralInstance4Channel};
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::Peripheral;

use crate::config::PWM_TIMING;
use crate::ports::ReloadTimer;
use crate::types::{ScaleFactor, TimerReload};

/// LED bank intensity output on channel 1 of a general-purpose timer
pub struct LedPwm<'d, T: GeneralInstance4Channel> {
    pwm: SimplePwm<'d, T>,
    full_scale: u16,
    reload: Option<TimerReload>,
}

impl<'d, T: GeneralInstance4Channel> LedPwm<'d, T> {
    /// Configure the timer for one full-scale period per PWM cycle
    ///
    /// The output stays dark until the first reload is set.
    pub fn new(
        tim: impl Peripheral<P = T> + 'd,
        pin: impl Peripheral<P = impl Channel1Pin<T>> + 'd,
        scale: ScaleFactor,
    ) -> Self {
        let ch1 = PwmPin::new_ch1(pin, OutputType::PushPull);
        let mut pwm = SimplePwm::new(
            tim,
            Some(ch1),
            None,
            None,
            None,
            Hertz(PWM_TIMING.pwm_frequency_hz()),
            CountingMode::EdgeAlignedUp,
        );

        let mut channel = pwm.ch1();
        channel.set_duty_cycle_fully_off();
        channel.enable();

        defmt::info!(
            "LED PWM at {}Hz, {} ticks full scale",
            PWM_TIMING.pwm_frequency_hz(),
            scale.full_scale_ticks()
        );

        Self {
            pwm,
            full_scale: scale.full_scale_ticks(),
            reload: None,
        }
    }

    /// Get the last reload applied
    #[must_use]
    pub const fn reload(&self) -> Option<TimerReload> {
        self.reload
    }
}

impl<T: GeneralInstance4Channel> ReloadTimer for LedPwm<'_, T> {
    fn set_reload(&mut self, reload: TimerReload) {
        let active = reload.active_ticks().min(self.full_scale);
        self.pwm.ch1().set_duty_cycle_fraction(active, self.full_scale);
        self.reload = Some(reload);
        defmt::debug!("PWM {} -> {}/{}", reload, active, self.full_scale);
    }
}
