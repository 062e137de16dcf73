use heapless::String;
use ufmt::uwrite;

use crate::display::{format_value, DisplaySink, COLUMNS};
use crate::error::HardwareFault;
use crate::relay::RelayState;

const STATUS_TITLE: &str = "Humidity:";
const NO_READING: &str = "--";
const VALUE_PREFIX: &str = "Value: ";

/// Writes one full row, padding with spaces (or cutting) to the display width
/// so a shorter text never leaves old characters behind
/// param row: 0 for the top line, 1 for the bottom line
/// param line: text to render
pub fn render_line<D: DisplaySink>(display: &mut D, row: u8, line: &str) -> Result<(), HardwareFault> {
    let mut padded: String<{ COLUMNS as usize }> = String::new();
    for c in line.chars().take(COLUMNS as usize) {
        if padded.push(c).is_err() {
            break;
        }
    }
    while padded.push(' ').is_ok() {}

    display.set_cursor(0, row)?;
    display.print(&padded)
}

/// Main screen with the latest reading and the relay state on the right
/// Humidity:
/// 45.20%       OFF
pub fn render_status<D: DisplaySink>(
    display: &mut D,
    reading: Option<f32>,
    relay: RelayState,
) -> Result<(), HardwareFault> {
    render_line(display, 0, STATUS_TITLE)?;

    let mut line: String<{ COLUMNS as usize }> = String::new();
    match reading {
        Some(value) => {
            let _ = uwrite!(line, "{}%", format_value(value).as_str());
        }
        None => {
            let _ = line.push_str(NO_READING);
        }
    }
    let label = relay.label();
    let right = COLUMNS as usize - label.len();
    while line.len() < right && line.push(' ').is_ok() {}
    if line.len() > right {
        line.truncate(right);
    }
    let _ = line.push_str(label);
    render_line(display, 1, &line)
}

/// Parameter edit screen
/// Adjust max
/// Value: 60.00
pub fn render_edit_screen<D: DisplaySink>(display: &mut D, label: &str, value: f32) -> Result<(), HardwareFault> {
    let mut top: String<{ COLUMNS as usize }> = String::new();
    let _ = uwrite!(top, "Adjust {}", label);
    render_line(display, 0, &top)?;

    // blank the row first, then the value goes in after the prefix
    render_line(display, 1, VALUE_PREFIX)?;
    display.set_cursor(VALUE_PREFIX.len() as u8, 1)?;
    display.print_value(value)
}

/// Clears the screen and puts a message on the top line
pub fn render_message<D: DisplaySink>(display: &mut D, message: &str) -> Result<(), HardwareFault> {
    display.clear()?;
    display.set_cursor(0, 0)?;
    display.print(message)
}
