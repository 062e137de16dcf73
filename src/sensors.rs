use crate::error::HardwareFault;

/// Supplies the humidity reading for a control cycle
pub trait HumiditySource {
    /// Relative humidity in percent
    fn read_percent(&mut self) -> Result<f32, HardwareFault>;
}

impl<F> HumiditySource for F
where
    F: FnMut() -> Result<f32, HardwareFault>,
{
    fn read_percent(&mut self) -> Result<f32, HardwareFault> {
        self()
    }
}

/// Raw ADC access for the soil probe
pub trait RawSampler {
    fn sample(&mut self) -> Result<u16, HardwareFault>;
}

impl<F> RawSampler for F
where
    F: FnMut() -> Result<u16, HardwareFault>,
{
    fn sample(&mut self) -> Result<u16, HardwareFault> {
        self()
    }
}

/// ADC counts of the probe in dry air and in water.
/// Capacitive probes read lower the wetter they are, so `dry` is normally
/// the larger number; the mapping works either way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeCalibration {
    pub dry: u16,
    pub wet: u16,
    /// Samples averaged per reading
    pub samples: u8,
}

impl Default for ProbeCalibration {
    fn default() -> Self {
        ProbeCalibration {
            dry: 3000,
            wet: 1300,
            samples: 8,
        }
    }
}

impl ProbeCalibration {
    /// Maps raw counts linearly onto 0-100%, clamped
    /// param counts: averaged ADC reading
    /// returns humidity percentage
    pub fn percent(&self, counts: f32) -> f32 {
        let span = self.wet as f32 - self.dry as f32;
        if span == 0.0 {
            return 0.0;
        }
        ((counts - self.dry as f32) * 100.0 / span).clamp(0.0, 100.0)
    }
}

/// Capacitive soil moisture probe on an ADC channel
pub struct SoilProbe<S> {
    sampler: S,
    calibration: ProbeCalibration,
}

impl<S: RawSampler> SoilProbe<S> {
    pub fn new(sampler: S, calibration: ProbeCalibration) -> Self {
        Self {
            sampler,
            calibration,
        }
    }

    /// Averages the configured number of raw samples (at least one)
    pub fn raw_average(&mut self) -> Result<f32, HardwareFault> {
        let samples = self.calibration.samples.max(1);
        let mut total: u32 = 0;
        for _ in 0..samples {
            total += self.sampler.sample()? as u32;
        }
        Ok(total as f32 / samples as f32)
    }
}

impl<S: RawSampler> HumiditySource for SoilProbe<S> {
    fn read_percent(&mut self) -> Result<f32, HardwareFault> {
        let counts = self.raw_average()?;
        Ok(self.calibration.percent(counts))
    }
}
