//! Character display interface.
//!
//! Everything the controller shows goes through [`DisplaySink`], a two row,
//! fixed width character surface. The firmware backs it with the I2C LCD in
//! [`crate::lcd`]; tests back it with an in-memory screen.

use heapless::String;
use ufmt::uwrite;

use crate::error::HardwareFault;

pub const COLUMNS: u8 = 16;
pub const ROWS: u8 = 2;

/// Longest text [`format_value`] produces ("-21474836.47")
pub const VALUE_WIDTH: usize = 12;

pub trait DisplaySink {
    fn clear(&mut self) -> Result<(), HardwareFault>;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), HardwareFault>;

    fn print(&mut self, text: &str) -> Result<(), HardwareFault>;

    /// Prints a value with two decimals
    fn print_value(&mut self, value: f32) -> Result<(), HardwareFault> {
        self.print(&format_value(value))
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn clear(&mut self) -> Result<(), HardwareFault> {
        (**self).clear()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), HardwareFault> {
        (**self).set_cursor(col, row)
    }

    fn print(&mut self, text: &str) -> Result<(), HardwareFault> {
        (**self).print(text)
    }
}

/// Formats a value with two decimals, rounding half away from zero.
/// Values that do not fit come out as "nan", "inf", "-inf" or "ovf".
pub fn format_value(value: f32) -> String<VALUE_WIDTH> {
    let mut text: String<VALUE_WIDTH> = String::new();
    if value.is_nan() {
        let _ = text.push_str("nan");
        return text;
    }
    if value.is_infinite() {
        let _ = text.push_str(if value < 0.0 { "-inf" } else { "inf" });
        return text;
    }

    let scaled = value * 100.0;
    if scaled >= i32::MAX as f32 || scaled <= -(i32::MAX as f32) {
        let _ = text.push_str("ovf");
        return text;
    }

    let rounded = if scaled < 0.0 {
        (scaled - 0.5) as i32
    } else {
        (scaled + 0.5) as i32
    };
    let magnitude = rounded.unsigned_abs();
    if rounded < 0 {
        let _ = text.push('-');
    }
    let cents = magnitude % 100;
    // Max str size 12, always fits
    let _ = uwrite!(text, "{}.", magnitude / 100);
    if cents < 10 {
        let _ = text.push('0');
    }
    let _ = uwrite!(text, "{}", cents);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TextScreen;

    #[test]
    fn print_value_writes_at_the_cursor() {
        let mut screen = TextScreen::new();
        screen.set_cursor(4, 1).unwrap();
        screen.print_value(39.5).unwrap();
        assert_eq!(screen.row(1), "    39.50");
    }

    #[test]
    fn print_value_through_a_reference() {
        let mut screen = TextScreen::new();
        let mut sink = &mut screen;
        DisplaySink::print_value(&mut sink, -2.25).unwrap();
        assert_eq!(screen.row(0), "-2.25");
    }

    #[test]
    fn two_decimals_always() {
        assert_eq!(format_value(60.0).as_str(), "60.00");
        assert_eq!(format_value(61.5).as_str(), "61.50");
        assert_eq!(format_value(0.05).as_str(), "0.05");
        assert_eq!(format_value(100.0).as_str(), "100.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_value(12.345).as_str(), "12.35");
        assert_eq!(format_value(12.344).as_str(), "12.34");
        assert_eq!(format_value(-12.346).as_str(), "-12.35");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_value(-0.5).as_str(), "-0.50");
        assert_eq!(format_value(-3.0).as_str(), "-3.00");
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        assert_eq!(format_value(-0.001).as_str(), "0.00");
    }

    #[test]
    fn non_finite_and_huge_values() {
        assert_eq!(format_value(f32::NAN).as_str(), "nan");
        assert_eq!(format_value(f32::INFINITY).as_str(), "inf");
        assert_eq!(format_value(f32::NEG_INFINITY).as_str(), "-inf");
        assert_eq!(format_value(1.0e9).as_str(), "ovf");
        assert_eq!(format_value(-1.0e9).as_str(), "ovf");
    }
}
