//! HD44780 character LCD behind a PCF8574 I2C backpack (the common "LCD1602 I2C" module).
//!
//! The expander drives the panel in 4-bit mode:
//! P0 = RS, P1 = RW, P2 = EN, P3 = backlight, P4..P7 = D4..D7.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::display::{DisplaySink, COLUMNS, ROWS};
use crate::error::HardwareFault;

pub const DEFAULT_ADDRESS: u8 = 0x27;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

// Commands
const CLEAR_DISPLAY: u8 = 0x01;
const ENTRY_MODE_SET: u8 = 0x04;
const DISPLAY_CONTROL: u8 = 0x08;
const FUNCTION_SET: u8 = 0x20;
const SET_DDRAM_ADDR: u8 = 0x80;

// Flags
const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const TWO_LINES: u8 = 0x08;

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

pub struct I2cLcd<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> I2cLcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Power-on sequence: force 4-bit mode, then two lines, display on,
    /// cleared, cursor moving right
    pub fn init(&mut self) -> Result<(), HardwareFault> {
        // The controller needs >40ms after Vcc rises
        self.delay.delay_ms(50);
        self.expander_write(0)?;
        self.delay.delay_ms(1);

        // Three times 8-bit mode, whatever state it woke up in
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);
        // and now 4-bit
        self.write_nibble(0x20)?;

        self.command(FUNCTION_SET | TWO_LINES)?;
        self.command(DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(ENTRY_MODE_SET | ENTRY_LEFT)
    }

    fn command(&mut self, value: u8) -> Result<(), HardwareFault> {
        self.send(value, 0)
    }

    fn write_data(&mut self, value: u8) -> Result<(), HardwareFault> {
        self.send(value, RS)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), HardwareFault> {
        self.write_nibble((value & 0xF0) | mode)?;
        self.write_nibble(((value << 4) & 0xF0) | mode)
    }

    /// Latches the upper four bits of `bits` (plus RS) into the panel
    fn write_nibble(&mut self, bits: u8) -> Result<(), HardwareFault> {
        self.expander_write(bits)?;
        self.expander_write(bits | EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits & !EN)?;
        self.delay.delay_us(50);
        Ok(())
    }

    /// The backlight bit rides along on every write
    fn expander_write(&mut self, bits: u8) -> Result<(), HardwareFault> {
        self.i2c
            .write(self.address, &[bits | BACKLIGHT])
            .map_err(|_| HardwareFault::DisplayBus)
    }
}

impl<I2C, D> DisplaySink for I2cLcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), HardwareFault> {
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), HardwareFault> {
        let row = row.min(ROWS - 1) as usize;
        let col = col.min(COLUMNS - 1);
        self.command(SET_DDRAM_ADDR | (ROW_OFFSETS[row] + col))
    }

    fn print(&mut self, text: &str) -> Result<(), HardwareFault> {
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }
}
