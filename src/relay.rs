use embedded_hal::digital::OutputPin;

use crate::error::HardwareFault;

/// Relay coil state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayState {
    Energized,
    #[default]
    Deenergized,
}

impl RelayState {
    pub fn is_energized(&self) -> bool {
        *self == RelayState::Energized
    }

    /// Short label for the status screen
    pub fn label(&self) -> &'static str {
        match self {
            RelayState::Energized => "ON",
            RelayState::Deenergized => "OFF",
        }
    }
}

/// Two-point hysteresis.
/// param reading: current relative humidity percentage
/// param low: at or below this the relay is energized
/// param high: at or above this the relay is released
/// param previous: the state returned for the last reading
/// returns the new relay state; inside the dead band the previous state holds
///
/// The low test runs first, so with an inverted band (low >= high) a reading
/// that meets both limits energizes the relay.
/// A NaN reading (or limit) fails both comparisons and keeps `previous`.
pub fn decide(reading: f32, low: f32, high: f32, previous: RelayState) -> RelayState {
    if reading <= low {
        RelayState::Energized
    } else if reading >= high {
        RelayState::Deenergized
    } else {
        previous
    }
}

/// Which line level pulls the relay in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayPolarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

/// Relay module on an output line
pub struct Relay<P> {
    pin: P,
    polarity: RelayPolarity,
}

impl<P: OutputPin> Relay<P> {
    pub fn new(pin: P, polarity: RelayPolarity) -> Self {
        Self { pin, polarity }
    }

    /// Drives the line for `state`
    pub fn set(&mut self, state: RelayState) -> Result<(), HardwareFault> {
        let high = match self.polarity {
            RelayPolarity::ActiveHigh => state.is_energized(),
            RelayPolarity::ActiveLow => !state.is_energized(),
        };
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| HardwareFault::RelayOutput)
    }
}
