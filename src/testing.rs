//! Host stand-ins for the hardware, used by the unit tests

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, InputPin, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};
use heapless::Vec;

use crate::buttons::{ButtonEvent, ButtonReader, ButtonSource};
use crate::display::{DisplaySink, COLUMNS, ROWS};
use crate::error::HardwareFault;
use crate::timer::{Clock, Instant};

/// A digital line whose level lives in a shared cell
pub struct Line<'a> {
    level: &'a Cell<bool>,
}

impl<'a> Line<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl digital::ErrorType for Line<'_> {
    type Error = Infallible;
}

impl InputPin for Line<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl OutputPin for Line<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// A pin that fails every access
pub struct BrokenPin;

impl digital::ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Three pulled-up button lines; pressing one pulls it low
pub struct Panel {
    lines: [Cell<bool>; 3],
}

impl Panel {
    pub fn new() -> Self {
        Self {
            lines: [Cell::new(true), Cell::new(true), Cell::new(true)],
        }
    }

    pub fn press(&self, index: usize) {
        self.lines[index].set(false);
    }

    pub fn release(&self, index: usize) {
        self.lines[index].set(true);
    }

    pub fn line(&self, index: usize) -> Line<'_> {
        Line::new(&self.lines[index])
    }

    pub fn reader(&self) -> ButtonReader<Line<'_>, Line<'_>, Line<'_>> {
        ButtonReader::new(self.line(0), self.line(1), self.line(2))
    }
}

/// Hands out a fixed list of events, then nothing
pub struct ScriptedButtons<'a> {
    script: &'a [ButtonEvent],
    next: usize,
    last: ButtonEvent,
}

impl<'a> ScriptedButtons<'a> {
    pub fn new(script: &'a [ButtonEvent]) -> Self {
        Self {
            script,
            next: 0,
            last: ButtonEvent::None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }
}

impl ButtonSource for ScriptedButtons<'_> {
    fn poll(&mut self, _now: Instant) -> ButtonEvent {
        self.last = match self.script.get(self.next) {
            Some(event) => {
                self.next += 1;
                *event
            }
            None => ButtonEvent::None,
        };
        self.last
    }

    /// Every scripted event is a tap: down for its own poll only
    fn held(&self) -> ButtonEvent {
        self.last
    }
}

/// Clock that moves forward by `step` milliseconds on every read
pub struct ManualClock {
    now: u32,
    step: u32,
}

impl ManualClock {
    pub fn new(step: u32) -> Self {
        Self { now: 0, step }
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Instant {
        let now = Instant::from_ticks(self.now);
        self.now = self.now.wrapping_add(self.step);
        now
    }
}

/// In-memory 16x2 character screen
pub struct TextScreen {
    cells: [[u8; COLUMNS as usize]; ROWS as usize],
    col: usize,
    row: usize,
    clears: usize,
    failing: bool,
}

impl TextScreen {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS as usize]; ROWS as usize],
            col: 0,
            row: 0,
            clears: 0,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Row contents without trailing blanks
    pub fn row(&self, row: usize) -> &str {
        core::str::from_utf8(&self.cells[row])
            .unwrap()
            .trim_end()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    fn check(&self) -> Result<(), HardwareFault> {
        if self.failing {
            Err(HardwareFault::DisplayBus)
        } else {
            Ok(())
        }
    }
}

impl DisplaySink for TextScreen {
    fn clear(&mut self) -> Result<(), HardwareFault> {
        self.check()?;
        self.cells = [[b' '; COLUMNS as usize]; ROWS as usize];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), HardwareFault> {
        self.check()?;
        self.col = col as usize;
        self.row = (row as usize).min(ROWS as usize - 1);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), HardwareFault> {
        self.check()?;
        for byte in text.bytes() {
            if self.col < COLUMNS as usize {
                self.cells[self.row][self.col] = byte;
            }
            self.col += 1;
        }
        Ok(())
    }
}

/// I2C bus that records single-byte writes
pub struct FakeBus {
    frames: Vec<u8, 1024>,
    addresses: Vec<u8, 1024>,
    failing: bool,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            addresses: Vec::new(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    pub fn addresses(&self) -> &[u8] {
        &self.addresses
    }
}

impl i2c::ErrorType for FakeBus {
    type Error = i2c::ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if self.failing {
            return Err(i2c::ErrorKind::Bus);
        }
        for operation in operations {
            if let Operation::Write(bytes) = operation {
                for byte in bytes.iter() {
                    self.frames.push(*byte).unwrap();
                    self.addresses.push(address).unwrap();
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns at once
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
