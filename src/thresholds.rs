/// ThresholdPair is the operator-selected humidity band the relay keeps the box in.
/// low: the relay is energized at or below this relative humidity percentage
/// high: the relay is released at or above this relative humidity percentage
///
/// The pair is not kept ordered. An inverted band (low >= high) is still a
/// valid input to the relay decision; see [`ThresholdPair::is_inverted`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdPair {
    pub low: f32,
    pub high: f32,
}

impl Default for ThresholdPair {
    fn default() -> Self {
        ThresholdPair {
            low: 40.0,  // pump on at 40%
            high: 60.0, // pump off at 60%
        }
    }
}

impl ThresholdPair {
    pub fn new(low: f32, high: f32) -> ThresholdPair {
        ThresholdPair { low, high }
    }

    pub fn get(&self, field: ThresholdField) -> f32 {
        match field {
            ThresholdField::High => self.high,
            ThresholdField::Low => self.low,
        }
    }

    pub fn get_mut(&mut self, field: ThresholdField) -> &mut f32 {
        match field {
            ThresholdField::High => &mut self.high,
            ThresholdField::Low => &mut self.low,
        }
    }

    /// Whether the band has no interior. Such a band still drives the relay,
    /// the low limit simply wins every reading at or below it.
    pub fn is_inverted(&self) -> bool {
        self.low >= self.high
    }
}

/// One end of the band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdField {
    High,
    Low,
}

impl ThresholdField {
    /// Label shown on the edit screen
    pub fn label(&self) -> &'static str {
        match self {
            ThresholdField::High => "max",
            ThresholdField::Low => "min",
        }
    }
}
