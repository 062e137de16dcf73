use crate::lcd;
use crate::menu::{MESSAGE_A, MESSAGE_B};
use crate::relay::RelayPolarity;
use crate::sensors::ProbeCalibration;
use crate::thresholds::ThresholdPair;
use crate::timer::{Duration, CONTROL_INTERVAL, LOOP_DELAY_MS, SETTLE_DELAY};

/// Build-time settings for the station. Nothing here is stored; every boot
/// starts from these values.
/// thresholds: the band used until the operator edits it
/// settle: quiet time per button after a press is accepted
/// control_interval: time between humidity reads and relay decisions
/// loop_delay_ms: pause between loop passes in the firmware
/// relay_polarity: line level that pulls the relay in
/// message_a / message_b: texts for the two message screens
/// calibration: soil probe ADC calibration
/// lcd_address: I2C address of the LCD backpack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub thresholds: ThresholdPair,
    pub settle: Duration,
    pub control_interval: Duration,
    pub loop_delay_ms: u32,
    pub relay_polarity: RelayPolarity,
    pub message_a: &'static str,
    pub message_b: &'static str,
    pub calibration: ProbeCalibration,
    pub lcd_address: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            thresholds: ThresholdPair::default(),
            settle: SETTLE_DELAY,
            control_interval: CONTROL_INTERVAL,
            loop_delay_ms: LOOP_DELAY_MS,
            relay_polarity: RelayPolarity::ActiveHigh,
            message_a: MESSAGE_A,
            message_b: MESSAGE_B,
            calibration: ProbeCalibration::default(),
            lcd_address: lcd::DEFAULT_ADDRESS,
        }
    }
}
