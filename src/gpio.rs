use crate::SwitchDriver;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

/// Electrical level that counts as "pressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveLevel {
    /// Active low (pull-up resistor, pressing grounds the pin). The usual
    /// wiring for a normally-open foot switch.
    Low,
    /// Active high (pull-down resistor, pressing connects the pin to VCC).
    High,
}

/// A foot switch wired directly to a GPIO input pin.
///
/// Wraps an `InputPin` and implements [`SwitchDriver`] by waiting for the
/// active and inactive levels. Debouncing is assumed to happen below this
/// layer, in hardware or in the pin driver.
pub struct GpioSwitch<P: InputPin> {
    pin: P,
    active_level: ActiveLevel,
}

impl<P: InputPin> GpioSwitch<P> {
    /// Create a new GPIO foot switch.
    ///
    /// # Arguments
    /// * `pin`: a GPIO input pin. For `embassy` HALs the pin type also
    ///   implements the async `wait_for_high`/`wait_for_low` methods.
    /// * `active_level`: the level the pin sits at while the switch is
    ///   pressed.
    pub fn new(pin: P, active_level: ActiveLevel) -> Self {
        Self { pin, active_level }
    }

    /// Whether the switch is currently held down, by a direct level read.
    pub fn is_pressed(&mut self) -> bool {
        match self.active_level {
            ActiveLevel::Low => self.pin.is_low().unwrap_or_default(),
            ActiveLevel::High => self.pin.is_high().unwrap_or_default(),
        }
    }
}

impl<P> SwitchDriver for GpioSwitch<P>
where
    P: InputPin + Wait,
{
    async fn wait_for_press(&mut self) {
        match self.active_level {
            ActiveLevel::Low => self.pin.wait_for_low().await.unwrap_or_default(),
            ActiveLevel::High => self.pin.wait_for_high().await.unwrap_or_default(),
        }
    }

    async fn wait_for_release(&mut self) {
        match self.active_level {
            ActiveLevel::Low => self.pin.wait_for_high().await.unwrap_or_default(),
            ActiveLevel::High => self.pin.wait_for_low().await.unwrap_or_default(),
        }
    }
}
