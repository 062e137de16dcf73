//! Parameter editor.
//!
//! Button1 raises the value by [`STEP`], Button2 lowers it, Button3 confirms.
//! The value is not bounded in either direction.
//!
//! [`ParameterEditor::handle`] runs one pass of the edit loop so the editor can
//! live inside the non-blocking menu. [`edit`] is the modal form: it keeps
//! polling until the operator confirms, however long that takes.

use crate::buttons::{ButtonEvent, ButtonSource};
use crate::display::DisplaySink;
use crate::error::HardwareFault;
use crate::rendering::render_edit_screen;
use crate::timer::Clock;

pub const STEP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditStatus {
    Editing,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterEditor {
    label: &'static str,
}

impl ParameterEditor {
    pub fn new(label: &'static str) -> ParameterEditor {
        Self { label }
    }

    /// Clears the screen and shows the label and current value
    pub fn open<D: DisplaySink>(&self, value: f32, display: &mut D) -> Result<(), HardwareFault> {
        display.clear()?;
        self.render(value, display)
    }

    pub fn render<D: DisplaySink>(&self, value: f32, display: &mut D) -> Result<(), HardwareFault> {
        render_edit_screen(display, self.label, value)
    }

    /// Applies one button event to `value`.
    /// The value changes before the screen is redrawn, so a display fault
    /// never loses a press.
    pub fn handle<D: DisplaySink>(
        &mut self,
        event: ButtonEvent,
        value: &mut f32,
        display: &mut D,
    ) -> Result<EditStatus, HardwareFault> {
        match event {
            ButtonEvent::Button1 => {
                *value += STEP;
                self.render(*value, display)?;
                Ok(EditStatus::Editing)
            }
            ButtonEvent::Button2 => {
                *value -= STEP;
                self.render(*value, display)?;
                Ok(EditStatus::Editing)
            }
            ButtonEvent::Button3 => {
                debug!("{} confirmed at {}", self.label, *value);
                Ok(EditStatus::Confirmed)
            }
            ButtonEvent::None => Ok(EditStatus::Editing),
        }
    }
}

/// Modal edit: blocks until Button3 is pressed.
/// Display faults are logged and editing carries on.
pub fn edit<B, C, D>(label: &'static str, value: &mut f32, buttons: &mut B, clock: &mut C, display: &mut D)
where
    B: ButtonSource,
    C: Clock,
    D: DisplaySink,
{
    let mut editor = ParameterEditor::new(label);
    if let Err(fault) = editor.open(*value, display) {
        warn!("edit screen: {}", fault.describe());
    }
    loop {
        let event = buttons.poll(clock.now());
        match editor.handle(event, value, display) {
            Ok(EditStatus::Confirmed) => break,
            Ok(EditStatus::Editing) => {}
            Err(fault) => warn!("edit screen: {}", fault.describe()),
        }
    }
}
