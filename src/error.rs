//! Hardware faults

/// Faults raised by the collaborators around the control core.
/// None of them stop the controller; they are logged and the loop carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// The LCD (or its I2C backpack) did not accept a write
    DisplayBus,
    /// The relay line could not be driven
    RelayOutput,
    /// The humidity probe could not be sampled
    SensorRead,
    /// A button line could not be read
    ButtonInput,
}

impl HardwareFault {
    pub fn describe(&self) -> &'static str {
        match self {
            HardwareFault::DisplayBus => "display bus error",
            HardwareFault::RelayOutput => "relay output error",
            HardwareFault::SensorRead => "sensor read error",
            HardwareFault::ButtonInput => "button input error",
        }
    }
}
