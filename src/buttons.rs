use embedded_hal::digital::InputPin;

use crate::error::HardwareFault;
use crate::timer::{Duration, Instant, SettleTimer};

/// Which button, if any, a poll found pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    #[default]
    None,
    Button1,
    Button2,
    Button3,
}

impl ButtonEvent {
    /// Position of the button on the panel, None for no press
    pub fn index(&self) -> Option<usize> {
        match self {
            ButtonEvent::None => None,
            ButtonEvent::Button1 => Some(0),
            ButtonEvent::Button2 => Some(1),
            ButtonEvent::Button3 => Some(2),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ButtonEvent::None
    }
}

/// Anything that can be asked for the current button press
pub trait ButtonSource {
    fn poll(&mut self, now: Instant) -> ButtonEvent;

    /// Button found down by the last poll, whether or not it got through
    /// the settle window
    fn held(&self) -> ButtonEvent;
}

/// Reads the three panel buttons.
/// The buttons pull their line to ground, so a pressed button reads LOW.
pub struct ButtonReader<B1, B2, B3> {
    button1: B1,
    button2: B2,
    button3: B3,
}

impl<B1, B2, B3> ButtonReader<B1, B2, B3>
where
    B1: InputPin,
    B2: InputPin,
    B3: InputPin,
{
    pub fn new(button1: B1, button2: B2, button3: B3) -> Self {
        Self {
            button1,
            button2,
            button3,
        }
    }

    /// Samples the lines in priority order and reports the first pressed one.
    /// No debouncing happens here.
    pub fn poll(&mut self) -> ButtonEvent {
        if is_pressed(&mut self.button1) {
            ButtonEvent::Button1
        } else if is_pressed(&mut self.button2) {
            ButtonEvent::Button2
        } else if is_pressed(&mut self.button3) {
            ButtonEvent::Button3
        } else {
            ButtonEvent::None
        }
    }
}

/// A line that cannot be read counts as released
fn is_pressed<P: InputPin>(pin: &mut P) -> bool {
    match pin.is_low() {
        Ok(low) => low,
        Err(_) => {
            warn!("{}, treating as released", HardwareFault::ButtonInput.describe());
            false
        }
    }
}

/// [`ButtonReader`] with a settle window per button: after a press is
/// reported, the same button stays quiet for the window. Holding a button
/// repeats it once per window.
pub struct DebouncedButtons<B1, B2, B3> {
    reader: ButtonReader<B1, B2, B3>,
    settle: SettleTimer<3>,
    level: ButtonEvent,
}

impl<B1, B2, B3> DebouncedButtons<B1, B2, B3>
where
    B1: InputPin,
    B2: InputPin,
    B3: InputPin,
{
    pub fn new(reader: ButtonReader<B1, B2, B3>, window: Duration) -> Self {
        Self {
            reader,
            settle: SettleTimer::new(window),
            level: ButtonEvent::None,
        }
    }
}

impl<B1, B2, B3> ButtonSource for DebouncedButtons<B1, B2, B3>
where
    B1: InputPin,
    B2: InputPin,
    B3: InputPin,
{
    fn poll(&mut self, now: Instant) -> ButtonEvent {
        let event = self.reader.poll();
        self.level = event;
        match event.index() {
            Some(index) if self.settle.accept(index, now) => {
                debug!("button pressed: {}", event);
                event
            }
            _ => ButtonEvent::None,
        }
    }

    fn held(&self) -> ButtonEvent {
        self.level
    }
}
